//! Content Files
//!
//! An in-memory file: an ordered sequence of 16-bit character units classified
//! by an optional [`FileType`]. Content only grows, through [`ContentFile::append`],
//! and the file's checksum is the CRC-32 of the low byte of every unit.

mod kind;

pub use kind::FileType;

use crate::checksum::calculate_checksum;
use crate::error::ContentError;
use crate::types::{CharUnit, Checksum};
use tracing::{debug, trace};

/// In-memory file content with a type tag.
///
/// Not internally synchronized. Share an instance across threads only behind
/// a lock held for the whole append or checksum call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentFile {
    kind: Option<FileType>,
    content: Vec<CharUnit>,
}

impl ContentFile {
    /// Create an untyped file with empty content.
    pub fn new() -> Self {
        ContentFile {
            kind: None,
            content: Vec::new(),
        }
    }

    pub fn with_kind(kind: FileType) -> Self {
        let mut file = Self::new();
        file.set_kind(kind);
        file
    }

    pub fn set_kind(&mut self, kind: FileType) {
        self.kind = Some(kind);
    }

    pub fn kind(&self) -> Option<FileType> {
        self.kind
    }

    /// Append `new_content` to the end of the file.
    ///
    /// `None` is rejected with [`ContentError::InvalidContent`] before the type
    /// is looked at. An image file rejects every present slice, empty or not,
    /// with [`ContentError::WrongFileType`]. On error the content is untouched.
    pub fn append(&mut self, new_content: Option<&[CharUnit]>) -> Result<(), ContentError> {
        let units = new_content.ok_or(ContentError::InvalidContent)?;
        if let Some(kind) = self.kind {
            if !kind.accepts_append() {
                return Err(ContentError::WrongFileType { kind });
            }
        }

        self.content.extend_from_slice(units);
        trace!(
            appended = units.len(),
            len = self.content.len(),
            "content appended"
        );
        Ok(())
    }

    pub fn append_units(&mut self, units: &[CharUnit]) -> Result<(), ContentError> {
        self.append(Some(units))
    }

    /// Append the UTF-16 encoding of `text`.
    pub fn append_str(&mut self, text: &str) -> Result<(), ContentError> {
        let units: Vec<CharUnit> = text.encode_utf16().collect();
        self.append(Some(units.as_slice()))
    }

    /// Read-only view of the content.
    pub fn content(&self) -> &[CharUnit] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Low 8 bits of every unit, in order. High bytes are dropped.
    pub fn low_bytes(&self) -> Vec<u8> {
        self.content.iter().map(|&unit| (unit & 0x00FF) as u8).collect()
    }

    /// CRC-32 of [`low_bytes`](Self::low_bytes), or `0` for an empty file.
    pub fn checksum(&self) -> Checksum {
        if self.content.is_empty() {
            return 0;
        }
        let checksum = calculate_checksum(&self.low_bytes());
        debug!(len = self.content.len(), checksum, "checksum computed");
        checksum
    }
}
