//! Error types for the address cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == C32 Error Enum ==
/// Unified error type for the codec and cache subsystem.
#[derive(Error, Debug)]
pub enum C32Error {
    /// Cache capacity must be a positive integer
    #[error("Invalid cache capacity: {0} (must be positive)")]
    InvalidCapacity(usize),

    /// Address version must fit in a single c32 digit
    #[error("Invalid address version: {0} (must be < 32)")]
    InvalidVersion(u8),

    /// hash160 payloads are exactly 20 bytes
    #[error("Invalid hash length: expected 20 bytes, got {0}")]
    InvalidHashLength(usize),

    /// Character outside the c32 alphabet
    #[error("Invalid c32 character: {0:?}")]
    InvalidCharacter(char),

    /// Embedded checksum does not match the payload
    #[error("Checksum mismatch for {0}")]
    ChecksumMismatch(String),

    /// Address is structurally invalid (missing sigil, too short)
    #[error("Malformed c32 address: {0}")]
    MalformedAddress(String),
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, C32Error>;
