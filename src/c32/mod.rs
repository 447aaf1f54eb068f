//! C32 Codec Module
//!
//! Crockford-base32 address codec with an embedded double-SHA256 checksum
//! (the "c32check" format used by Stacks addresses). The encoder here is
//! the pure function the interceptor memoizes.

mod checksum;
mod decode;
mod encode;

// Re-export public functions
pub use checksum::c32_checksum;
pub use decode::{c32_address_decode, c32_decode};
pub use encode::{c32_address, c32_encode};

// == Public Constants ==
/// Crockford base32 alphabet (no I, L, O, U).
pub const C32_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Leading sigil on every c32check address.
pub const C32_SIGIL: char = 'S';

/// Length in bytes of a hash160 payload.
pub const HASH160_LENGTH: usize = 20;

/// Length in bytes of the embedded checksum.
pub const CHECKSUM_LENGTH: usize = 4;

/// Returns the value of a (normalized, uppercase) c32 digit, if any.
pub(crate) fn digit_value(ch: char) -> Option<u8> {
    C32_ALPHABET
        .iter()
        .position(|&d| d as char == ch)
        .map(|v| v as u8)
}
