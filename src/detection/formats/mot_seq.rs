//! MOT sequence detector.

use crate::detection::{ConfidenceTier, DetectionFailure, FormatDetector, RequirementMatcher};

/// Detector for MOT challenge sequences (`gt/gt.txt`).
pub struct MotSeqDetector;

impl FormatDetector for MotSeqDetector {
    fn name(&self) -> &'static str {
        "mot_seq"
    }

    fn display_name(&self) -> &'static str {
        "MOT sequence"
    }

    fn detect(&self, matcher: &RequirementMatcher<'_>) -> Result<ConfidenceTier, DetectionFailure> {
        matcher.require_file("gt/gt.txt")?;
        Ok(ConfidenceTier::Medium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_mot_seq_detection() {
        let tmp = TempDir::new().unwrap();
        assert!(MotSeqDetector.evaluate(tmp.path()).confidence().is_none());

        fs::create_dir(tmp.path().join("gt")).unwrap();
        fs::write(tmp.path().join("gt/gt.txt"), "1,1,0,0,10,10,1,1,1").unwrap();
        assert_eq!(
            MotSeqDetector.evaluate(tmp.path()).confidence(),
            Some(ConfidenceTier::Medium)
        );
    }
}
