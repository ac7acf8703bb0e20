//! Per-candidate detector outcomes.

use super::confidence::ConfidenceTier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a format ended up in the rejected partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Structural requirements were not met at any candidate root.
    UnmetRequirements,
    /// Matched, but below the best confidence observed in the run.
    InsufficientConfidence,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnmetRequirements => "unmet_requirements",
            Self::InsufficientConfidence => "insufficient_confidence",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one detector against one candidate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Matched {
        confidence: ConfidenceTier,
    },
    Rejected {
        reason: RejectionReason,
        message: String,
    },
}

impl Outcome {
    pub fn matched(confidence: ConfidenceTier) -> Self {
        Self::Matched { confidence }
    }

    pub fn unmet(message: impl Into<String>) -> Self {
        Self::Rejected {
            reason: RejectionReason::UnmetRequirements,
            message: message.into(),
        }
    }

    /// Confidence if this outcome is a match.
    pub fn confidence(&self) -> Option<ConfidenceTier> {
        match self {
            Self::Matched { confidence } => Some(*confidence),
            Self::Rejected { .. } => None,
        }
    }

    /// Fold another candidate's outcome for the same detector into this one.
    ///
    /// A match beats a rejection, the higher of two matches wins, and between
    /// two rejections the earlier (`self`) is kept so messages follow
    /// candidate order.
    pub fn merge(self, later: Outcome) -> Outcome {
        match (self, later) {
            (Self::Matched { confidence: a }, Self::Matched { confidence: b }) => {
                Self::matched(a.max(b))
            }
            (m @ Self::Matched { .. }, Self::Rejected { .. }) => m,
            (Self::Rejected { .. }, m @ Self::Matched { .. }) => m,
            (first @ Self::Rejected { .. }, Self::Rejected { .. }) => first,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_serializes_snake_case() {
        let json = serde_json::to_string(&RejectionReason::UnmetRequirements).unwrap();
        assert_eq!(json, "\"unmet_requirements\"");

        let json = serde_json::to_string(&RejectionReason::InsufficientConfidence).unwrap();
        assert_eq!(json, "\"insufficient_confidence\"");
    }

    #[test]
    fn test_merge_match_beats_rejection() {
        let merged = Outcome::unmet("missing").merge(Outcome::matched(ConfidenceTier::Low));
        assert_eq!(merged, Outcome::matched(ConfidenceTier::Low));

        let merged = Outcome::matched(ConfidenceTier::Low).merge(Outcome::unmet("missing"));
        assert_eq!(merged, Outcome::matched(ConfidenceTier::Low));
    }

    #[test]
    fn test_merge_keeps_highest_confidence() {
        let merged = Outcome::matched(ConfidenceTier::Medium)
            .merge(Outcome::matched(ConfidenceTier::High))
            .merge(Outcome::matched(ConfidenceTier::Low));
        assert_eq!(merged.confidence(), Some(ConfidenceTier::High));
    }

    #[test]
    fn test_merge_keeps_first_rejection_message() {
        let merged = Outcome::unmet("first").merge(Outcome::unmet("second"));
        assert_eq!(merged, Outcome::unmet("first"));
    }
}
