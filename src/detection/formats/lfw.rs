//! Labeled Faces in the Wild detector.

use crate::detection::{ConfidenceTier, DetectionFailure, FormatDetector, RequirementMatcher};

/// Detector for LFW datasets.
///
/// The pairs file sits one subset directory below the dataset root, so
/// deeper layouts need the scanner to propose deeper candidate roots.
pub struct LfwDetector;

impl FormatDetector for LfwDetector {
    fn name(&self) -> &'static str {
        "lfw"
    }

    fn display_name(&self) -> &'static str {
        "LFW"
    }

    fn detect(&self, matcher: &RequirementMatcher<'_>) -> Result<ConfidenceTier, DetectionFailure> {
        matcher.require_file("*/annotations/pairs.txt")?;
        Ok(ConfidenceTier::Medium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lfw_detection_positive() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("test/annotations")).unwrap();
        fs::write(tmp.path().join("test/annotations/pairs.txt"), "").unwrap();

        assert_eq!(
            LfwDetector.evaluate(tmp.path()).confidence(),
            Some(ConfidenceTier::Medium)
        );
    }

    #[test]
    fn test_lfw_not_found_when_nested_deeper() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/b/c/annotations")).unwrap();
        fs::write(tmp.path().join("a/b/c/annotations/pairs.txt"), "").unwrap();

        assert!(LfwDetector.evaluate(tmp.path()).confidence().is_none());
        assert!(LfwDetector
            .evaluate(&tmp.path().join("a/b"))
            .confidence()
            .is_some());
    }
}
