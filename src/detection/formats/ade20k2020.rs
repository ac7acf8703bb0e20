//! ADE20K (2020 release) detector.

use crate::detection::{ConfidenceTier, DetectionFailure, FormatDetector, RequirementMatcher};

/// Detector for ADE20K 2020 datasets.
///
/// The 2020 release replaced the attribute text files with one JSON
/// annotation per image, nested under `<subset>/<scene>/`.
pub struct Ade20k2020Detector;

impl FormatDetector for Ade20k2020Detector {
    fn name(&self) -> &'static str {
        "ade20k2020"
    }

    fn display_name(&self) -> &'static str {
        "ADE20K 2020"
    }

    fn detect(&self, matcher: &RequirementMatcher<'_>) -> Result<ConfidenceTier, DetectionFailure> {
        matcher.require_file("*/**/*.json")?;
        Ok(ConfidenceTier::Medium)
    }
}
