//! filecrc: Typed In-Memory Files with CRC-32 Checksums
//!
//! A [`ContentFile`] holds an ordered sequence of 16-bit character units and an
//! optional [`FileType`]. Content grows through append, which image files refuse,
//! and the checksum is the CRC-32 of each unit's low byte.

pub mod checksum;
pub mod config;
pub mod error;
pub mod file;
pub mod logging;
pub mod tooling;
pub mod types;

pub use checksum::calculate_checksum;
pub use error::{ApiError, ContentError};
pub use file::{ContentFile, FileType};
pub use types::{CharUnit, Checksum};
