//! Error types
//!
//! `ContentError` covers caller-input violations raised by [`ContentFile`](crate::file::ContentFile).
//! `ApiError` is the crate-level error used by configuration, logging and the CLI.

use crate::file::FileType;
use thiserror::Error;

/// Rejections produced by `ContentFile::append`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentError {
    /// No content was supplied to append.
    #[error("invalid content: no content supplied")]
    InvalidContent,

    /// The file is classified as a type that does not accept appended content.
    #[error("wrong file type: cannot append content to a file of type {kind}")]
    WrongFileType { kind: FileType },
}

/// Crate-level error for the configuration, logging and CLI layers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
