//! YOLO (darknet) detector.

use crate::detection::{ConfidenceTier, DetectionFailure, FormatDetector, RequirementMatcher};

/// Detector for darknet-style YOLO datasets.
///
/// `obj.data` is required. A `train.txt` subset list next to it is strong
/// enough evidence to raise the confidence to high.
pub struct YoloDetector;

impl FormatDetector for YoloDetector {
    fn name(&self) -> &'static str {
        "yolo"
    }

    fn display_name(&self) -> &'static str {
        "YOLO"
    }

    fn detect(&self, matcher: &RequirementMatcher<'_>) -> Result<ConfidenceTier, DetectionFailure> {
        matcher.require_file("obj.data")?;

        if matcher.probe_file("train.txt")?.is_some() {
            Ok(ConfidenceTier::High)
        } else {
            Ok(ConfidenceTier::Medium)
        }
    }
}
