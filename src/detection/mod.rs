//! Dataset format detection.
//!
//! This module provides:
//! - Structural requirement matching against candidate roots
//! - Pluggable per-format detectors and their registry
//! - Candidate root enumeration and confidence-based arbitration
//! - Text and JSON rendering of the resulting report

mod arbiter;
mod candidates;
mod confidence;
mod detector;
pub mod formats;
mod outcome;
pub mod presenter;
mod registry;
mod report;
mod requirement;

pub use arbiter::{detect, ArbiterOptions, DetectionArbiter};
pub use candidates::{candidates, DirectoryScanner, ScannerOptions};
pub use confidence::ConfidenceTier;
pub use detector::FormatDetector;
pub use formats::all_detectors;
pub use outcome::{Outcome, RejectionReason};
pub use registry::DetectorRegistry;
pub use report::{Rejection, Report};
pub use requirement::{DetectionFailure, RequirementMatcher};
