//! Detector registry for managing format detectors.

use crate::detection::formats::all_detectors;
use crate::detection::FormatDetector;
use std::collections::HashSet;

/// Registry of the format detectors taking part in a run.
///
/// Built once before detection and never mutated during a run. Provides
/// filtering by format name, which backs CLI options like
/// `--formats coco,yolo`.
pub struct DetectorRegistry {
    detectors: Vec<Box<dyn FormatDetector>>,
}

impl DetectorRegistry {
    /// Create a registry with all built-in detectors.
    pub fn new() -> Self {
        Self::from_detectors(all_detectors())
    }

    /// Create a registry from an explicit detector list.
    ///
    /// Detectors are kept sorted by name so every consumer sees the same
    /// order regardless of how the list was assembled. Names must be unique;
    /// on a clash the first detector listed wins.
    pub fn from_detectors(mut detectors: Vec<Box<dyn FormatDetector>>) -> Self {
        detectors.sort_by(|a, b| a.name().cmp(b.name()));
        detectors.dedup_by(|later, earlier| {
            let clash = later.name() == earlier.name();
            if clash {
                tracing::warn!(format = later.name(), "Ignoring duplicate detector");
            }
            clash
        });
        Self { detectors }
    }

    /// Create a registry with only the specified formats.
    ///
    /// # Example
    /// ```
    /// use dataset_detect::detection::DetectorRegistry;
    ///
    /// let registry = DetectorRegistry::with_formats(&["coco", "yolo"]);
    /// assert_eq!(registry.len(), 2);
    /// ```
    pub fn with_formats(names: &[&str]) -> Self {
        let name_set: HashSet<&str> = names.iter().copied().collect();
        Self::from_detectors(
            all_detectors()
                .into_iter()
                .filter(|d| name_set.contains(d.name()))
                .collect(),
        )
    }

    /// Create a registry excluding the specified formats.
    pub fn without_formats(names: &[&str]) -> Self {
        let name_set: HashSet<&str> = names.iter().copied().collect();
        Self::from_detectors(
            all_detectors()
                .into_iter()
                .filter(|d| !name_set.contains(d.name()))
                .collect(),
        )
    }

    /// Drop the named formats from this registry.
    pub fn excluding(mut self, names: &[&str]) -> Self {
        let name_set: HashSet<&str> = names.iter().copied().collect();
        self.detectors.retain(|d| !name_set.contains(d.name()));
        self
    }

    /// Get all registered detectors, sorted by name.
    pub fn detectors(&self) -> &[Box<dyn FormatDetector>] {
        &self.detectors
    }

    /// Get a detector by format name.
    pub fn get(&self, name: &str) -> Option<&dyn FormatDetector> {
        self.detectors
            .iter()
            .find(|d| d.name() == name)
            .map(|d| d.as_ref())
    }

    /// List all format names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Names from `requested` that no built-in detector provides.
    pub fn unknown_formats<'a>(requested: &[&'a str]) -> Vec<&'a str> {
        let known = Self::new();
        requested
            .iter()
            .copied()
            .filter(|name| known.get(name).is_none())
            .collect()
    }

    /// Get the number of registered detectors.
    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl std::fmt::Debug for DetectorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectorRegistry")
            .field("detectors", &self.names())
            .finish()
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_new_has_all_detectors() {
        let registry = DetectorRegistry::new();

        assert_eq!(
            registry.names(),
            vec![
                "ade20k2017",
                "ade20k2020",
                "cityscapes",
                "coco",
                "image_dir",
                "lfw",
                "mot_seq",
                "yolo",
            ]
        );
    }

    #[test]
    fn test_registry_names_are_unique() {
        let registry = DetectorRegistry::new();
        let unique: HashSet<&str> = registry.names().into_iter().collect();

        assert_eq!(unique.len(), registry.len());
    }

    #[test]
    fn test_registry_with_formats() {
        let registry = DetectorRegistry::with_formats(&["yolo", "coco"]);

        assert_eq!(registry.names(), vec!["coco", "yolo"]);
    }

    #[test]
    fn test_registry_with_empty_formats() {
        let registry = DetectorRegistry::with_formats(&[]);

        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_without_formats() {
        let registry = DetectorRegistry::without_formats(&["image_dir"]);
        let names = registry.names();

        assert!(!names.contains(&"image_dir"));
        assert!(names.contains(&"coco"));
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn test_registry_excluding() {
        let registry = DetectorRegistry::with_formats(&["coco", "lfw", "yolo"]).excluding(&["lfw"]);

        assert_eq!(registry.names(), vec!["coco", "yolo"]);
    }

    #[test]
    fn test_registry_get() {
        let registry = DetectorRegistry::new();

        let coco = registry.get("coco");
        assert!(coco.is_some());
        assert_eq!(coco.unwrap().name(), "coco");

        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn test_unknown_formats() {
        assert_eq!(
            DetectorRegistry::unknown_formats(&["coco", "voc", "kitti"]),
            vec!["voc", "kitti"]
        );
        assert!(DetectorRegistry::unknown_formats(&["lfw"]).is_empty());
    }

    #[test]
    fn test_registry_default() {
        let registry = DetectorRegistry::default();
        assert_eq!(registry.len(), 8);
    }
}
