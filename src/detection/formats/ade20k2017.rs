//! ADE20K (2017 release) detector.

use crate::detection::{ConfidenceTier, DetectionFailure, FormatDetector, RequirementMatcher};

/// Detector for ADE20K 2017 datasets.
///
/// Identifies the format by its per-image `*_atr.txt` attribute files,
/// stored under `<subset>/<scene>/...`.
pub struct Ade20k2017Detector;

impl FormatDetector for Ade20k2017Detector {
    fn name(&self) -> &'static str {
        "ade20k2017"
    }

    fn display_name(&self) -> &'static str {
        "ADE20K 2017"
    }

    fn detect(&self, matcher: &RequirementMatcher<'_>) -> Result<ConfidenceTier, DetectionFailure> {
        matcher.require_file("*/**/*_atr.txt")?;
        Ok(ConfidenceTier::Medium)
    }
}
