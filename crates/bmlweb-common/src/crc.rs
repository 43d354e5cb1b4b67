//! CRC-32 hashing utilities.
//!
//! PNG chunks carry an ISO 3309 CRC-32 over the chunk type and payload.

/// Compute the CRC-32 of a byte slice.
#[inline]
pub fn hash_bytes(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// Compute the CRC-32 of several byte slices treated as one stream.
///
/// PNG checksums cover `type ++ payload` without concatenating them in
/// memory first.
pub fn hash_parts(parts: &[&[u8]]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize()
}
