use crate::detection::{ArbiterOptions, DetectorRegistry, ScannerOptions};
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub detection: DetectionConfig,
    pub formats: FormatsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Directory levels below the root to probe as candidate roots
    pub depth: usize,
    /// Worker threads (1 = sequential, 0 = auto)
    pub jobs: usize,
    /// Follow symbolic links while enumerating candidates
    pub follow_symlinks: bool,
    /// Directory names never descended into
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatsConfig {
    /// Formats to run (empty = all built-in formats)
    pub enabled: Vec<String>,
    /// Formats to skip
    pub disabled: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Include rejected formats in text output
    pub show_rejections: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            depth: 0,
            jobs: 1,
            follow_symlinks: false,
            exclude: vec![".git".to_string()],
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the user config file is
    /// used when present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;

        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/dataset-detect/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dataset-detect").join("config.toml"))
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let enabled: HashSet<&str> = self.formats.enabled.iter().map(String::as_str).collect();

        let conflicting: Vec<&str> = self
            .formats
            .disabled
            .iter()
            .map(String::as_str)
            .filter(|name| enabled.contains(name))
            .collect();
        if !conflicting.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "formats both enabled and disabled: {}",
                conflicting.join(", ")
            )));
        }

        let listed: Vec<&str> = self
            .formats
            .enabled
            .iter()
            .chain(&self.formats.disabled)
            .map(String::as_str)
            .collect();
        let unknown = DetectorRegistry::unknown_formats(&listed);
        if !unknown.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "unknown formats: {}",
                unknown.join(", ")
            )));
        }

        Ok(())
    }

    /// Registry selected by the `[formats]` section
    pub fn registry(&self) -> DetectorRegistry {
        let disabled: Vec<&str> = self.formats.disabled.iter().map(String::as_str).collect();

        if self.formats.enabled.is_empty() {
            DetectorRegistry::without_formats(&disabled)
        } else {
            let enabled: Vec<&str> = self.formats.enabled.iter().map(String::as_str).collect();
            DetectorRegistry::with_formats(&enabled).excluding(&disabled)
        }
    }

    /// Arbiter options from the `[detection]` section
    pub fn arbiter_options(&self) -> ArbiterOptions {
        let scanner = ScannerOptions::new()
            .with_depth(self.detection.depth)
            .with_exclude(self.detection.exclude.clone())
            .with_follow_symlinks(self.detection.follow_symlinks);

        ArbiterOptions::new()
            .with_scanner(scanner)
            .with_jobs(self.detection.jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.detection.depth, 0);
        assert_eq!(config.detection.jobs, 1);
        assert!(!config.output.show_rejections);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[detection]"));
        assert!(toml_str.contains("[output]"));
    }

    #[test]
    fn conflicting_formats_are_invalid() {
        let mut config = Config::default();
        config.formats.enabled = vec!["coco".to_string()];
        config.formats.disabled = vec!["coco".to_string()];

        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_formats_are_invalid() {
        let mut config = Config::default();
        config.formats.disabled = vec!["pascal".to_string()];

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pascal"));
    }

    #[test]
    fn registry_follows_formats_section() {
        let mut config = Config::default();
        assert_eq!(config.registry().len(), DetectorRegistry::new().len());

        config.formats.disabled = vec!["image_dir".to_string()];
        assert!(config.registry().get("image_dir").is_none());
        assert_eq!(config.registry().len(), DetectorRegistry::new().len() - 1);

        config.formats.enabled = vec!["yolo".to_string(), "coco".to_string()];
        assert_eq!(config.registry().names(), vec!["coco", "yolo"]);
    }

    #[test]
    fn arbiter_options_follow_detection_section() {
        let mut config = Config::default();
        config.detection.depth = 3;
        config.detection.jobs = 4;

        let options = config.arbiter_options();
        assert_eq!(options.scanner.depth, 3);
        assert_eq!(options.jobs, 4);
        assert_eq!(options.scanner.exclude, vec![".git".to_string()]);
    }
}
