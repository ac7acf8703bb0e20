//! Confidence tiers attached to positive detections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strength of the evidence a detector found for its format.
///
/// Variants are declared weakest first so the derived `Ord` is the
/// arbitration order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    /// Generic fallback evidence (e.g. "contains images").
    Low,
    /// The format's structural requirements are present.
    #[default]
    Medium,
    /// Structural requirements plus distinguishing extras.
    High,
}

impl ConfidenceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfidenceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown confidence tier '{}'", other)),
        }
    }
}
