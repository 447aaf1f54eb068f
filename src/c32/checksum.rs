//! Checksum Module
//!
//! Double-SHA256 checksum over the version byte and payload.

use sha2::{Digest, Sha256};

use crate::c32::CHECKSUM_LENGTH;

// == Checksum ==
/// Computes the 4-byte c32check checksum for a (version, payload) pair.
///
/// The checksum is the first four bytes of `SHA256(SHA256(version || payload))`,
/// so corrupting either the version digit or any payload byte is detected.
pub fn c32_checksum(version: u8, payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut inner = Sha256::new();
    inner.update([version]);
    inner.update(payload);

    let mut outer = Sha256::new();
    outer.update(inner.finalize());
    let digest = outer.finalize();

    let mut checksum = [0u8; CHECKSUM_LENGTH];
    checksum.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    checksum
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_deterministic() {
        let payload = [0x42u8; 20];
        assert_eq!(c32_checksum(22, &payload), c32_checksum(22, &payload));
    }

    #[test]
    fn test_checksum_depends_on_version() {
        let payload = [0x42u8; 20];
        assert_ne!(c32_checksum(22, &payload), c32_checksum(26, &payload));
    }

    #[test]
    fn test_checksum_depends_on_payload() {
        let a = [0x42u8; 20];
        let mut b = a;
        b[19] ^= 1;
        assert_ne!(c32_checksum(22, &a), c32_checksum(22, &b));
    }
}
