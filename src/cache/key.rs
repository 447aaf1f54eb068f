//! Cache Key Module
//!
//! Derives the stable key an address-encoding call is memoized under.

use std::fmt::{self, Write};

// == Cache Key ==
/// Key for one `(version, hash)` encoding request.
///
/// Rendered as `"<2-digit-hex-version>:<hex-hash>"`, which is injective for
/// distinct pairs: the separator keeps a short hash from colliding with a
/// longer one under a different version. The `u8` version type makes the
/// 0-255 contract hold by construction, so building a key is total.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    // == Constructor ==
    /// Builds the key for a (version, raw hash bytes) pair.
    ///
    /// Allocation is bounded by the rendered key itself.
    pub fn new(version: u8, hash: &[u8]) -> Self {
        let mut rendered = String::with_capacity(3 + hash.len() * 2);
        // Writing into a String never fails
        let _ = write!(rendered, "{:02x}:", version);
        rendered.push_str(&hex::encode(hash));
        Self(rendered)
    }

    /// Returns the rendered key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_rendering() {
        let key = CacheKey::new(22, &[0xab, 0xcd]);
        assert_eq!(key.as_str(), "16:abcd");
    }

    #[test]
    fn test_key_is_deterministic() {
        let hash = [7u8; 20];
        assert_eq!(CacheKey::new(1, &hash), CacheKey::new(1, &hash));
    }

    #[test]
    fn test_distinct_versions_distinct_keys() {
        let hash = [7u8; 20];
        assert_ne!(CacheKey::new(22, &hash), CacheKey::new(26, &hash));
    }

    #[test]
    fn test_distinct_hashes_distinct_keys() {
        let a = [7u8; 20];
        let mut b = a;
        b[0] = 8;
        assert_ne!(CacheKey::new(22, &a), CacheKey::new(22, &b));
    }

    #[test]
    fn test_separator_prevents_prefix_collisions() {
        // (0x01, [0x23]) vs (0x12, [0x3_]) style confusions
        assert_ne!(
            CacheKey::new(0x01, &[0x23]).as_str(),
            CacheKey::new(0x12, &[0x03]).as_str()
        );
    }
}
