//! CLI Tooling
//!
//! Builds a content file from command-line parts and reports its checksum.
//! Content is taken from arguments only; nothing is read from disk.

use crate::checksum::format_checksum;
use crate::config::{ConfigLoader, FileCrcConfig};
use crate::error::ApiError;
use crate::file::{ContentFile, FileType};
use crate::logging::LoggingConfig;
use crate::types::{CharUnit, Checksum};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// filecrc CLI - typed in-memory files with CRC-32 checksums
#[derive(Parser, Debug)]
#[command(name = "filecrc")]
#[command(about = "Build in-memory files from text and compute their CRC-32")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply logging flags on top of the configured logging section.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Append each part to a new file and print its checksum
    Checksum {
        /// File kind (defaults to the configured kind, else untyped)
        #[arg(long, value_enum)]
        kind: Option<FileType>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Content parts, appended in order
        parts: Vec<String>,
    },
    /// Show content units, their low bytes and the checksum
    Inspect {
        /// File kind (defaults to the configured kind, else untyped)
        #[arg(long, value_enum)]
        kind: Option<FileType>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Content parts, appended in order
        parts: Vec<String>,
    },
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Checksum { .. } => "checksum",
        Commands::Inspect { .. } => "inspect",
    }
}

/// Result of the checksum command.
#[derive(Debug, Clone, Serialize)]
pub struct ChecksumReport {
    pub kind: Option<FileType>,
    pub length: usize,
    pub checksum: Checksum,
    pub checksum_hex: String,
}

/// Result of the inspect command.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    #[serde(flatten)]
    pub summary: ChecksumReport,
    pub units: Vec<CharUnit>,
    pub low_bytes: Vec<u8>,
}

impl ChecksumReport {
    fn from_file(file: &ContentFile) -> Self {
        let checksum = file.checksum();
        Self {
            kind: file.kind(),
            length: file.len(),
            checksum,
            checksum_hex: format_checksum(checksum),
        }
    }
}

fn kind_label(kind: Option<FileType>) -> &'static str {
    kind.map(FileType::as_str).unwrap_or("none")
}

fn format_checksum_text(report: &ChecksumReport) -> String {
    format!(
        "kind: {}\nlength: {}\nchecksum: {} ({})",
        kind_label(report.kind),
        report.length,
        report.checksum_hex,
        report.checksum
    )
}

fn format_inspect_text(report: &InspectReport) -> String {
    let units = report
        .units
        .iter()
        .map(|u| format!("{:04x}", u))
        .collect::<Vec<_>>()
        .join(" ");
    let bytes = report
        .low_bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{}\nunits: {}\nbytes: {}",
        format_checksum_text(&report.summary),
        units,
        bytes
    )
}

fn validate_format(format: &str) -> Result<(), ApiError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(ApiError::ConfigError(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

/// CLI context holding the resolved configuration
pub struct CliContext {
    config: FileCrcConfig,
    config_path: Option<PathBuf>,
}

impl CliContext {
    /// Create a new CLI context, loading configuration from `config_path` if given.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self::with_config(config, config_path))
    }

    pub fn with_config(config: FileCrcConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub fn config(&self) -> &FileCrcConfig {
        &self.config
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Checksum {
                kind,
                format,
                parts,
            } => {
                validate_format(format)?;
                let file = self.build_file(*kind, parts)?;
                let report = ChecksumReport::from_file(&file);
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&report)?)
                } else {
                    Ok(format_checksum_text(&report))
                }
            }
            Commands::Inspect {
                kind,
                format,
                parts,
            } => {
                validate_format(format)?;
                let file = self.build_file(*kind, parts)?;
                let report = InspectReport {
                    summary: ChecksumReport::from_file(&file),
                    units: file.content().to_vec(),
                    low_bytes: file.low_bytes(),
                };
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&report)?)
                } else {
                    Ok(format_inspect_text(&report))
                }
            }
        }
    }

    fn build_file(&self, kind: Option<FileType>, parts: &[String]) -> Result<ContentFile, ApiError> {
        let mut file = ContentFile::new();
        if let Some(kind) = kind.or(self.config.file.kind) {
            file.set_kind(kind);
        }
        for part in parts {
            file.append_str(part)?;
        }
        Ok(file)
    }
}
