//! Candidate root enumeration.

use crate::error::{DetectError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Options for candidate enumeration.
#[derive(Debug, Clone, Default)]
pub struct ScannerOptions {
    /// How many directory levels below the root to propose as candidates.
    /// 0 probes only the root itself.
    pub depth: usize,
    /// Directory names never descended into.
    pub exclude: Vec<String>,
    /// Whether to follow symbolic links.
    pub follow_symlinks: bool,
}

impl ScannerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_exclude(mut self, names: Vec<String>) -> Self {
        self.exclude = names;
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

/// Proposes the directories that detectors probe as dataset roots.
#[derive(Debug, Clone, Default)]
pub struct DirectoryScanner {
    options: ScannerOptions,
}

impl DirectoryScanner {
    pub fn new(options: ScannerOptions) -> Self {
        Self { options }
    }

    /// List candidate roots: `root` itself followed by every directory up to
    /// `depth` levels below it, in lexicographic path order.
    ///
    /// Fails only when `root` itself cannot be listed. Unreadable
    /// descendants are skipped.
    pub fn candidates(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let metadata = fs::metadata(root).map_err(|e| DetectError::RootUnreadable {
            path: root.to_path_buf(),
            source: e,
        })?;

        if !metadata.is_dir() {
            return Err(DetectError::RootNotDirectory(root.to_path_buf()));
        }

        fs::read_dir(root).map_err(|e| DetectError::RootUnreadable {
            path: root.to_path_buf(),
            source: e,
        })?;

        let mut candidates = vec![root.to_path_buf()];

        if self.options.depth > 0 {
            let walker = WalkDir::new(root)
                .min_depth(1)
                .max_depth(self.options.depth)
                .follow_links(self.options.follow_symlinks)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| e.depth() == 0 || !self.is_excluded(e));

            for entry in walker {
                match entry {
                    Ok(entry) if entry.file_type().is_dir() => {
                        candidates.push(entry.into_path());
                    }
                    Ok(_) => {}
                    Err(err) => {
                        tracing::warn!(
                            path = ?err.path(),
                            error = %err,
                            "Skipping unreadable directory"
                        );
                    }
                }
            }
        }

        candidates.sort();
        candidates.dedup();

        tracing::debug!(
            root = %root.display(),
            depth = self.options.depth,
            count = candidates.len(),
            "Enumerated candidate roots"
        );

        Ok(candidates)
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        self.options.exclude.iter().any(|pattern| name == pattern.as_str())
    }
}

/// Candidate roots for `root` up to `depth` levels, with default options.
pub fn candidates(root: &Path, depth: usize) -> Result<Vec<PathBuf>> {
    DirectoryScanner::new(ScannerOptions::new().with_depth(depth)).candidates(root)
}
