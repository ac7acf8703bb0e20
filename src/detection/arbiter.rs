//! Arbitration of detector outcomes into a report.

use crate::detection::candidates::{DirectoryScanner, ScannerOptions};
use crate::detection::outcome::{Outcome, RejectionReason};
use crate::detection::registry::DetectorRegistry;
use crate::detection::report::{Rejection, Report};
use crate::detection::FormatDetector;
use crate::error::{DetectError, Result};
use rayon::prelude::*;
use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

/// Options for a detection run.
#[derive(Debug, Clone)]
pub struct ArbiterOptions {
    /// Candidate enumeration settings.
    pub scanner: ScannerOptions,
    /// Worker threads: 1 evaluates sequentially, 0 sizes the pool to the
    /// machine.
    pub jobs: usize,
}

impl Default for ArbiterOptions {
    fn default() -> Self {
        Self {
            scanner: ScannerOptions::default(),
            jobs: 1,
        }
    }
}

impl ArbiterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.scanner.depth = depth;
        self
    }

    pub fn with_scanner(mut self, scanner: ScannerOptions) -> Self {
        self.scanner = scanner;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }
}

/// Runs every registered detector against every candidate root and
/// partitions the registry into detected and rejected formats.
pub struct DetectionArbiter {
    registry: DetectorRegistry,
    options: ArbiterOptions,
}

impl DetectionArbiter {
    /// Create a new arbiter.
    pub fn new(registry: DetectorRegistry, options: ArbiterOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &DetectorRegistry {
        &self.registry
    }

    /// Detect the formats of the dataset at `root`.
    ///
    /// Fails only if `root` cannot be listed; per-format problems end up in
    /// the report.
    pub fn run(&self, root: &Path) -> Result<Report> {
        let scanner = DirectoryScanner::new(self.options.scanner.clone());
        let candidates = scanner.candidates(root)?;

        let merged = self.evaluate_all(&candidates)?;
        let report = Self::arbitrate(merged);

        tracing::info!(
            root = %root.display(),
            candidates = candidates.len(),
            detected = ?report.detected_formats,
            rejected = report.rejected_formats.len(),
            "Detection finished"
        );

        Ok(report)
    }

    /// Merged outcome per detector, in registry order.
    fn evaluate_all(&self, candidates: &[PathBuf]) -> Result<Vec<(&'static str, Outcome)>> {
        match self.options.jobs {
            1 => Ok(self
                .registry
                .detectors()
                .iter()
                .map(|d| {
                    let outcomes = candidates.iter().map(|c| evaluate_guarded(d.as_ref(), c));
                    (d.name(), merge_outcomes(outcomes))
                })
                .collect()),
            0 => Ok(self.evaluate_parallel(candidates)),
            jobs => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .build()
                    .map_err(|e| DetectError::ThreadPool(e.to_string()))?;

                Ok(pool.install(|| self.evaluate_parallel(candidates)))
            }
        }
    }

    fn evaluate_parallel(&self, candidates: &[PathBuf]) -> Vec<(&'static str, Outcome)> {
        self.registry
            .detectors()
            .par_iter()
            .map(|d| {
                // Indexed collect keeps candidate order for the merge.
                let outcomes: Vec<Outcome> = candidates
                    .par_iter()
                    .map(|c| evaluate_guarded(d.as_ref(), c))
                    .collect();
                (d.name(), merge_outcomes(outcomes))
            })
            .collect()
    }

    /// Partition merged outcomes by the best confidence observed.
    pub fn arbitrate(merged: Vec<(&str, Outcome)>) -> Report {
        let max_confidence = merged.iter().filter_map(|(_, o)| o.confidence()).max();

        let mut detected_formats: Vec<String> = merged
            .iter()
            .filter(|(_, o)| o.confidence().is_some() && o.confidence() == max_confidence)
            .map(|(name, _)| name.to_string())
            .collect();
        detected_formats.sort();
        detected_formats.dedup();

        let mut rejected_formats = BTreeMap::new();

        for (name, outcome) in merged {
            let rejection = match (outcome, max_confidence) {
                (Outcome::Matched { confidence }, Some(max)) if confidence < max => Rejection {
                    reason: RejectionReason::InsufficientConfidence,
                    message: format!(
                        "matched with {} confidence, but {} matched with {} confidence",
                        confidence,
                        detected_formats.join(", "),
                        max
                    ),
                },
                (Outcome::Matched { .. }, _) => continue,
                (Outcome::Rejected { message, .. }, _) => Rejection {
                    reason: RejectionReason::UnmetRequirements,
                    message,
                },
            };

            rejected_formats.entry(name.to_string()).or_insert(rejection);
        }

        Report {
            detected_formats,
            rejected_formats,
        }
    }
}

/// Detect formats at `root` with all built-in detectors.
pub fn detect(root: &Path, depth: usize) -> Result<Report> {
    DetectionArbiter::new(DetectorRegistry::new(), ArbiterOptions::new().with_depth(depth)).run(root)
}

/// Fold one detector's outcomes across candidates, in candidate order.
fn merge_outcomes(outcomes: impl IntoIterator<Item = Outcome>) -> Outcome {
    outcomes
        .into_iter()
        .reduce(Outcome::merge)
        .unwrap_or_else(|| Outcome::unmet("no candidate roots were probed"))
}

/// Evaluate one (detector, candidate) pair, turning a panic into a rejection.
fn evaluate_guarded(detector: &dyn FormatDetector, candidate: &Path) -> Outcome {
    let outcome = match panic::catch_unwind(AssertUnwindSafe(|| detector.evaluate(candidate))) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let diagnostic = panic_message(payload.as_ref());
            tracing::warn!(
                format = detector.name(),
                candidate = %candidate.display(),
                %diagnostic,
                "Detector panicked"
            );
            Outcome::unmet(format!("{} failed: {}", detector.name(), diagnostic))
        }
    };

    tracing::debug!(
        format = detector.name(),
        candidate = %candidate.display(),
        ?outcome,
        "Evaluated candidate"
    );

    outcome
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
