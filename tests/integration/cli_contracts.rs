use std::fs;

use filecrc::tooling::cli::{CliContext, Commands};
use filecrc::{ApiError, FileType};
use tempfile::TempDir;

fn checksum_command(kind: Option<FileType>, parts: &[&str]) -> Commands {
    Commands::Checksum {
        kind,
        format: "json".to_string(),
        parts: parts.iter().map(|p| p.to_string()).collect(),
    }
}

#[test]
fn config_file_supplies_default_kind() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("filecrc.toml");
    fs::write(&config_path, "[file]\nkind = \"image\"\n").unwrap();

    let cli = CliContext::new(Some(config_path.clone())).unwrap();
    assert_eq!(cli.config().file.kind, Some(FileType::Image));
    assert_eq!(cli.config_path(), Some(&config_path));

    let err = cli.execute(&checksum_command(None, &["x"])).unwrap_err();
    assert!(matches!(err, ApiError::Content(_)));

    // Explicit kind overrides the configured one
    let output = cli
        .execute(&checksum_command(Some(FileType::Text), &["A", "B", "C"]))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["checksum_hex"], "a3830348");
}

#[test]
fn image_file_without_parts_still_reports_zero() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("filecrc.toml");
    fs::write(&config_path, "[logging]\nlevel = \"warn\"\n").unwrap();

    let cli = CliContext::new(Some(config_path)).unwrap();
    assert_eq!(cli.config().logging.level, "warn");

    let output = cli
        .execute(&checksum_command(Some(FileType::Image), &[]))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["kind"], "image");
    assert_eq!(value["length"], 0);
    assert_eq!(value["checksum"], 0);
}

#[test]
fn missing_config_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let result = CliContext::new(Some(temp_dir.path().join("nope.toml")));
    assert!(matches!(result, Err(ApiError::ConfigError(_))));
}
