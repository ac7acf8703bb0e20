use dataset_detect::config::Config;
use dataset_detect::error::ConfigError;
use dataset_detect::DetectError;
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_full_config() {
    let file = config_file(
        r#"
[detection]
depth = 2
jobs = 0
follow_symlinks = true
exclude = [".git", "node_modules"]

[formats]
enabled = ["coco", "yolo", "image_dir"]
disabled = ["image_dir"]

[output]
show_rejections = true
"#,
    );

    // image_dir in both lists is rejected as a conflict
    assert!(Config::load(Some(file.path())).is_err());

    let file = config_file(
        r#"
[detection]
depth = 2
jobs = 0
follow_symlinks = true
exclude = [".git", "node_modules"]

[formats]
enabled = ["coco", "yolo"]

[output]
show_rejections = true
"#,
    );

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.detection.depth, 2);
    assert_eq!(config.detection.jobs, 0);
    assert!(config.detection.follow_symlinks);
    assert_eq!(config.detection.exclude, vec![".git", "node_modules"]);
    assert!(config.output.show_rejections);
    assert_eq!(config.registry().names(), vec!["coco", "yolo"]);

    let options = config.arbiter_options();
    assert_eq!(options.scanner.depth, 2);
    assert!(options.scanner.follow_symlinks);
}

#[test]
fn partial_config_keeps_defaults() {
    let file = config_file("[detection]\ndepth = 1\n");

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.detection.depth, 1);
    assert_eq!(config.detection.jobs, 1);
    assert_eq!(config.detection.exclude, vec![".git"]);
    assert!(config.formats.enabled.is_empty());
    assert!(!config.output.show_rejections);
}

#[test]
fn empty_config_is_default() {
    let file = config_file("");

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.detection.depth, 0);
    assert_eq!(config.registry().len(), 8);
}

#[test]
fn invalid_toml_is_parse_error() {
    let file = config_file("[detection\ndepth = ");

    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(matches!(
        err,
        DetectError::Config(ConfigError::ParseError { .. })
    ));
}

#[test]
fn wrong_value_type_is_parse_error() {
    let file = config_file("[detection]\ndepth = \"deep\"\n");

    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(matches!(
        err,
        DetectError::Config(ConfigError::ParseError { .. })
    ));
}

#[test]
fn unknown_format_is_invalid() {
    let file = config_file("[formats]\ndisabled = [\"kitti_raw\"]\n");

    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, DetectError::Config(ConfigError::Invalid(_))));
    assert!(err.to_string().contains("kitti_raw"));
}

#[test]
fn missing_explicit_path_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();

    let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(
        err,
        DetectError::Config(ConfigError::ReadError { .. })
    ));
}
