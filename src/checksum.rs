//! CRC-32 checksum computation
//!
//! Standard IEEE CRC-32 (reflected polynomial 0xEDB88320, initial value and
//! final XOR 0xFFFFFFFF), the variant used by zlib, gzip and PNG.

use crate::types::Checksum;
use crc32fast::Hasher;

/// Compute the CRC-32 of `bytes`.
///
/// Stateless: every call builds its own hasher, so this is safe to call from
/// any number of threads. Empty input yields `0`.
pub fn calculate_checksum(bytes: &[u8]) -> Checksum {
    let mut hasher = Hasher::new();
    hasher.update(bytes);
    hasher.finalize()
}

/// Render a checksum as fixed-width lowercase hex.
pub fn format_checksum(checksum: Checksum) -> String {
    format!("{:08x}", checksum)
}
