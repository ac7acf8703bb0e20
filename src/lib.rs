//! dataset-detect - Identify which dataset formats a directory conforms to
//!
//! This crate provides functionality for:
//! - Enumerating candidate dataset roots below a directory
//! - Evaluating pluggable per-format detectors against each candidate
//! - Arbitrating matches by confidence into a reproducible report
//! - Rendering the report as text or as a JSON document

pub mod cli;
pub mod commands;
pub mod config;
pub mod detection;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use detection::{DetectionArbiter, DetectorRegistry, Report};
pub use error::{DetectError, Result};
