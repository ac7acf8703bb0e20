//! Generic image directory detector.

use crate::detection::{ConfidenceTier, DetectionFailure, FormatDetector, RequirementMatcher};

/// One recursive pattern per image extension.
const IMAGE_PATTERNS: &[&str] = &[
    "**/*.jpg",
    "**/*.jpeg",
    "**/*.jpe",
    "**/*.png",
    "**/*.bmp",
    "**/*.tif",
    "**/*.tiff",
    "**/*.webp",
];

/// Fallback detector for plain directories of images.
///
/// Almost every image dataset matches this, so it only ever reports low
/// confidence and loses to any specific format.
pub struct ImageDirDetector;

impl FormatDetector for ImageDirDetector {
    fn name(&self) -> &'static str {
        "image_dir"
    }

    fn display_name(&self) -> &'static str {
        "Image directory"
    }

    fn detect(&self, matcher: &RequirementMatcher<'_>) -> Result<ConfidenceTier, DetectionFailure> {
        matcher.require_any(IMAGE_PATTERNS)?;
        Ok(ConfidenceTier::Low)
    }
}
