//! Core types shared across the crate.

/// CharUnit: a single 16-bit character unit of file content
pub type CharUnit = u16;

/// Checksum: CRC-32 value, always unsigned
pub type Checksum = u32;
