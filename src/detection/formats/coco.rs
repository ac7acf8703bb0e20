//! COCO detector.

use crate::detection::{ConfidenceTier, DetectionFailure, FormatDetector, RequirementMatcher};

/// Annotation file patterns, one per COCO task.
const TASK_PATTERNS: &[&str] = &[
    "annotations/instances_*.json",
    "annotations/person_keypoints_*.json",
    "annotations/captions_*.json",
    "annotations/labels_*.json",
    "annotations/panoptic_*.json",
    "annotations/image_info_*.json",
    "annotations/stuff_*.json",
];

/// Detector for COCO datasets.
///
/// Any one task annotation file under `annotations/` is enough.
pub struct CocoDetector;

impl FormatDetector for CocoDetector {
    fn name(&self) -> &'static str {
        "coco"
    }

    fn display_name(&self) -> &'static str {
        "COCO"
    }

    fn detect(&self, matcher: &RequirementMatcher<'_>) -> Result<ConfidenceTier, DetectionFailure> {
        matcher.require_any(TASK_PATTERNS)?;
        Ok(ConfidenceTier::Medium)
    }
}
