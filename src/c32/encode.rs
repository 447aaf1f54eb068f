//! Encode Module
//!
//! Pure c32 encoding: the function the interceptor memoizes.

use crate::c32::{c32_checksum, C32_ALPHABET, C32_SIGIL, CHECKSUM_LENGTH, HASH160_LENGTH};
use crate::error::{C32Error, Result};

// == C32 Encode ==
/// Encodes raw bytes as Crockford base32.
///
/// The bytes are treated as one big-endian integer; its base32 digits are
/// emitted without high-order zeros, then each leading zero byte of the
/// input is marked with a single `0` digit so zero prefixes round-trip.
pub fn c32_encode(data: &[u8]) -> String {
    let leading_zero_bytes = data.iter().take_while(|&&b| b == 0).count();

    // Digits of the big-endian integer value, least significant first.
    let mut digits: Vec<char> = Vec::with_capacity(data.len() * 8 / 5 + 1);
    let mut acc: u16 = 0;
    let mut bits: u32 = 0;
    for &byte in data.iter().rev() {
        acc |= (byte as u16) << bits;
        bits += 8;
        while bits >= 5 {
            digits.push(C32_ALPHABET[(acc & 0x1f) as usize] as char);
            acc >>= 5;
            bits -= 5;
        }
    }
    if bits > 0 {
        digits.push(C32_ALPHABET[(acc & 0x1f) as usize] as char);
    }

    while digits.last() == Some(&'0') {
        digits.pop();
    }
    for _ in 0..leading_zero_bytes {
        digits.push('0');
    }
    digits.iter().rev().collect()
}

// == C32 Address ==
/// Encodes a (version, hash160) pair as a checksummed c32 address.
///
/// The version must fit in a single c32 digit and the hash must be exactly
/// 20 bytes; both are contract violations rather than recoverable states.
///
/// # Arguments
/// * `version` - network version digit (0-31), e.g. 22 for Stacks mainnet
/// * `hash160` - the 20-byte hash payload
pub fn c32_address(version: u8, hash160: &[u8]) -> Result<String> {
    if version as usize >= C32_ALPHABET.len() {
        return Err(C32Error::InvalidVersion(version));
    }
    if hash160.len() != HASH160_LENGTH {
        return Err(C32Error::InvalidHashLength(hash160.len()));
    }

    let checksum = c32_checksum(version, hash160);
    let mut payload = Vec::with_capacity(HASH160_LENGTH + CHECKSUM_LENGTH);
    payload.extend_from_slice(hash160);
    payload.extend_from_slice(&checksum);

    let mut address = String::with_capacity(2 + payload.len() * 8 / 5 + 1);
    address.push(C32_SIGIL);
    address.push(C32_ALPHABET[version as usize] as char);
    address.push_str(&c32_encode(&payload));
    Ok(address)
}
