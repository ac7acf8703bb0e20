//! Core trait for dataset format detectors.

use super::confidence::ConfidenceTier;
use super::outcome::Outcome;
use super::requirement::{DetectionFailure, RequirementMatcher};
use std::path::Path;

/// Trait for dataset format detectors.
///
/// Implement this trait to add detection support for a new format, then
/// append the detector to [`all_detectors`](super::all_detectors). A detector:
/// - Names the format with a stable identifier used in every report
/// - Checks its structural requirements through a [`RequirementMatcher`]
/// - Picks the confidence tier of a positive match
///
/// Detectors must be pure functions of the filesystem below the candidate
/// root. They may be evaluated concurrently and share no mutable state.
pub trait FormatDetector: Send + Sync {
    /// Unique format identifier (e.g., "ade20k2017").
    fn name(&self) -> &'static str;

    /// Human-readable name (e.g., "ADE20K 2017").
    fn display_name(&self) -> &'static str;

    /// Check the candidate root behind `matcher`.
    ///
    /// Return the confidence of a match, or the first unmet requirement.
    /// Use `?` on the matcher's `require_*` helpers to stop at the first
    /// failed check.
    fn detect(&self, matcher: &RequirementMatcher<'_>) -> Result<ConfidenceTier, DetectionFailure>;

    /// Evaluate this detector at `root`.
    ///
    /// Faults are reported as unmet requirements naming the detector.
    fn evaluate(&self, root: &Path) -> Outcome {
        match self.detect(&RequirementMatcher::new(root)) {
            Ok(confidence) => Outcome::matched(confidence),
            Err(DetectionFailure::Unmet(message)) => Outcome::unmet(message),
            Err(DetectionFailure::Fault(diagnostic)) => {
                Outcome::unmet(format!("{} failed: {}", self.name(), diagnostic))
            }
        }
    }
}
