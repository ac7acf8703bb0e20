//! The detection verdict returned by a run.

use super::outcome::RejectionReason;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Why a single format was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub reason: RejectionReason,
    pub message: String,
}

/// Partition of the registry into detected and rejected formats.
///
/// Every registered format appears in exactly one of the two fields.
/// `rejected_formats` is always fully populated; presentation decides how
/// much of it to show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Sorted ascending.
    pub detected_formats: Vec<String>,
    /// Keyed by format name; `BTreeMap` keeps serialization order stable.
    pub rejected_formats: BTreeMap<String, Rejection>,
}

impl Report {
    pub fn is_detected(&self, name: &str) -> bool {
        self.detected_formats.iter().any(|f| f == name)
    }

    pub fn rejection(&self, name: &str) -> Option<&Rejection> {
        self.rejected_formats.get(name)
    }
}
