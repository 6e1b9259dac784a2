//! File type classification

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification tag for a [`ContentFile`](super::ContentFile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Text,
    Audio,
    Video,
    Binary,
}

impl FileType {
    /// Whether files of this type accept appended content.
    pub fn accepts_append(self) -> bool {
        !matches!(self, FileType::Image)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Text => "text",
            FileType::Audio => "audio",
            FileType::Video => "video",
            FileType::Binary => "binary",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
