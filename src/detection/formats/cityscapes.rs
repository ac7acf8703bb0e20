//! Cityscapes detector.

use crate::detection::{ConfidenceTier, DetectionFailure, FormatDetector, RequirementMatcher};

/// Detector for Cityscapes datasets (`gtFine/<subset>/<city>/*_gtFine_labelIds.png`).
pub struct CityscapesDetector;

impl FormatDetector for CityscapesDetector {
    fn name(&self) -> &'static str {
        "cityscapes"
    }

    fn display_name(&self) -> &'static str {
        "Cityscapes"
    }

    fn detect(&self, matcher: &RequirementMatcher<'_>) -> Result<ConfidenceTier, DetectionFailure> {
        matcher.require_file("gtFine/*/*/*_gtFine_labelIds.png")?;
        Ok(ConfidenceTier::Medium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cityscapes_detection_positive() {
        let tmp = TempDir::new().unwrap();
        let city = tmp.path().join("gtFine/train/aachen");
        fs::create_dir_all(&city).unwrap();
        fs::write(city.join("aachen_000000_000019_gtFine_labelIds.png"), "").unwrap();

        assert_eq!(
            CityscapesDetector.evaluate(tmp.path()).confidence(),
            Some(ConfidenceTier::Medium)
        );
    }

    #[test]
    fn test_cityscapes_wrong_depth() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("gtFine/train")).unwrap();
        fs::write(tmp.path().join("gtFine/train/x_gtFine_labelIds.png"), "").unwrap();

        assert!(CityscapesDetector.evaluate(tmp.path()).confidence().is_none());
    }
}
