//! Structural requirement checks against a candidate root.
//!
//! Requirements are glob patterns relative to the candidate root. `**` is
//! allowed as a whole path component and matches any number of directories,
//! so a single pattern can reach arbitrarily deep below the root.
//!
//! The tree is walked without following symbolic links, and patterns are
//! matched against root-relative paths only.

use glob::{MatchOptions, Pattern};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// `*` never crosses a `/`; use `**` for recursive matches.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Why a detector could not produce a confidence for a candidate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionFailure {
    /// A structural requirement was not satisfied. The message names the
    /// pattern verbatim.
    Unmet(String),
    /// The detector itself misbehaved (e.g. an invalid pattern).
    Fault(String),
}

impl fmt::Display for DetectionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmet(message) => f.write_str(message),
            Self::Fault(diagnostic) => write!(f, "internal fault: {}", diagnostic),
        }
    }
}

/// Evaluates requirements for a single candidate root.
///
/// Probing is read-only. Missing or unreadable directories simply leave a
/// requirement unsatisfied.
#[derive(Debug, Clone, Copy)]
pub struct RequirementMatcher<'a> {
    root: &'a Path,
}

impl<'a> RequirementMatcher<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// Whether at least one regular file matches `pattern`.
    ///
    /// Never fails: an invalid pattern counts as unsatisfied.
    pub fn satisfies(&self, pattern: &str) -> bool {
        matches!(self.find(pattern), Ok(Some(_)))
    }

    /// Diagnostic text for an unmet file requirement.
    pub fn describe(pattern: &str) -> String {
        format!("required file not found: \"{}\"", pattern)
    }

    /// Require a file matching `pattern`; returns the first match in walk
    /// order (depth-first, entries sorted by name).
    pub fn require_file(&self, pattern: &str) -> Result<PathBuf, DetectionFailure> {
        self.find(pattern)?
            .ok_or_else(|| DetectionFailure::Unmet(Self::describe(pattern)))
    }

    /// Require a file matching any one of `patterns`, tried in order.
    pub fn require_any(&self, patterns: &[&str]) -> Result<PathBuf, DetectionFailure> {
        for pattern in patterns {
            if let Some(path) = self.find(pattern)? {
                return Ok(path);
            }
        }

        let alternatives: Vec<String> = patterns.iter().map(|p| format!("\"{}\"", p)).collect();
        Err(DetectionFailure::Unmet(format!(
            "none of the required files were found: {}",
            alternatives.join(", ")
        )))
    }

    /// Optional check: the first file matching `pattern`, if any.
    pub fn probe_file(&self, pattern: &str) -> Result<Option<PathBuf>, DetectionFailure> {
        self.find(pattern)
    }

    fn find(&self, pattern: &str) -> Result<Option<PathBuf>, DetectionFailure> {
        let compiled = Pattern::new(pattern).map_err(|e| {
            DetectionFailure::Fault(format!("invalid pattern \"{}\": {}", pattern, e))
        })?;

        let mut walker = WalkDir::new(self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name();
        if let Some(depth) = fixed_depth(pattern) {
            walker = walker.max_depth(depth);
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::trace!(
                        path = ?err.path(),
                        error = %err,
                        "Skipping unreadable entry"
                    );
                    continue;
                }
            };

            if !is_regular_file(&entry) {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(self.root) else {
                continue;
            };
            if compiled.matches_path_with(relative, MATCH_OPTIONS) {
                return Ok(Some(entry.into_path()));
            }
        }

        Ok(None)
    }
}

/// Number of path components a pattern without `**` can span.
fn fixed_depth(pattern: &str) -> Option<usize> {
    if pattern.contains("**") {
        None
    } else {
        Some(
            Path::new(pattern)
                .components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .count(),
        )
    }
}

/// Regular files, including symlinks that resolve to one. Symlinked
/// directories are never descended into.
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
