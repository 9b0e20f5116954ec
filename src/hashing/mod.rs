//! BLAKE3-based fingerprints.

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// Used to fingerprint a loaded corpus so operators can tell which knowledge
/// base a running process serves. It is not a security boundary.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[0..8]);
    u64::from_le_bytes(bytes)
}

/// Renders a fingerprint as 16 lowercase hex digits.
#[inline]
pub fn format_fingerprint(fingerprint: u64) -> String {
    format!("{:016x}", fingerprint)
}
