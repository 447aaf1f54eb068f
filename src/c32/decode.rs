//! Decode Module
//!
//! c32 decoding with checksum verification. Used by callers and tests;
//! the cache itself never decodes.

use crate::c32::{c32_checksum, digit_value, C32_SIGIL, CHECKSUM_LENGTH};
use crate::error::{C32Error, Result};

// == Normalization ==
/// Normalizes homoglyphs the way Crockford base32 prescribes: uppercase
/// everything, then map `O` to `0` and `L`/`I` to `1`.
fn c32_normalize(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch.to_ascii_uppercase() {
            'O' => '0',
            'L' | 'I' => '1',
            upper => upper,
        })
        .collect()
}

// == C32 Decode ==
/// Decodes a Crockford base32 string back into bytes.
///
/// Inverse of [`c32_encode`](crate::c32::c32_encode): leading `0` digits
/// become leading zero bytes, the remaining digits are read as one
/// big-endian integer.
pub fn c32_decode(input: &str) -> Result<Vec<u8>> {
    let normalized = c32_normalize(input);
    let mut values = Vec::with_capacity(normalized.len());
    for ch in normalized.chars() {
        match digit_value(ch) {
            Some(v) => values.push(v),
            None => return Err(C32Error::InvalidCharacter(ch)),
        }
    }

    let leading_zero_digits = values.iter().take_while(|&&v| v == 0).count();

    // Rebuild the integer from the non-zero-prefixed digits, least
    // significant bits first.
    let mut bytes: Vec<u8> = Vec::with_capacity(values.len() * 5 / 8 + 1);
    let mut acc: u16 = 0;
    let mut bits: u32 = 0;
    for &v in values[leading_zero_digits..].iter().rev() {
        acc |= (v as u16) << bits;
        bits += 5;
        while bits >= 8 {
            bytes.push((acc & 0xff) as u8);
            acc >>= 8;
            bits -= 8;
        }
    }
    if bits > 0 && acc != 0 {
        bytes.push(acc as u8);
    }

    // Minimal big-endian form, then one zero byte per leading zero digit.
    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    for _ in 0..leading_zero_digits {
        bytes.push(0);
    }
    bytes.reverse();
    Ok(bytes)
}

// == C32 Address Decode ==
/// Decodes a checksummed c32 address back into its (version, hash) pair.
///
/// Verifies the embedded checksum; a mismatch means the address was
/// corrupted or mistyped.
pub fn c32_address_decode(address: &str) -> Result<(u8, Vec<u8>)> {
    let mut chars = address.chars();
    let sigil = chars.next();
    if sigil != Some(C32_SIGIL) && sigil != Some(C32_SIGIL.to_ascii_lowercase()) {
        return Err(C32Error::MalformedAddress(address.to_string()));
    }
    if address.len() <= 5 {
        return Err(C32Error::MalformedAddress(address.to_string()));
    }

    let body = c32_normalize(chars.as_str());
    let mut body_chars = body.chars();
    let version_char = body_chars
        .next()
        .ok_or_else(|| C32Error::MalformedAddress(address.to_string()))?;
    let version =
        digit_value(version_char).ok_or(C32Error::InvalidCharacter(version_char))?;

    let payload = c32_decode(body_chars.as_str())?;
    if payload.len() < CHECKSUM_LENGTH {
        return Err(C32Error::MalformedAddress(address.to_string()));
    }

    let (hash, checksum) = payload.split_at(payload.len() - CHECKSUM_LENGTH);
    if c32_checksum(version, hash) != *checksum {
        return Err(C32Error::ChecksumMismatch(address.to_string()));
    }
    Ok((version, hash.to_vec()))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::c32::{c32_address, c32_encode};

    #[test]
    fn test_decode_inverts_encode() {
        let cases: Vec<Vec<u8>> = vec![
            vec![],
            vec![0x00],
            vec![0x00, 0x00, 0x01],
            vec![0x01, 0x00],
            vec![0xff; 24],
            (0u8..24).collect(),
        ];
        for bytes in cases {
            let encoded = c32_encode(&bytes);
            assert_eq!(c32_decode(&encoded).unwrap(), bytes, "case {:?}", bytes);
        }
    }

    #[test]
    fn test_decode_normalizes_homoglyphs() {
        // 'O' reads as '0', 'l'/'I' read as '1'
        assert_eq!(c32_decode("O").unwrap(), c32_decode("0").unwrap());
        assert_eq!(c32_decode("l").unwrap(), c32_decode("1").unwrap());
        assert_eq!(c32_decode("I").unwrap(), c32_decode("1").unwrap());
    }

    #[test]
    fn test_decode_rejects_invalid_character() {
        let result = c32_decode("2J*K");
        assert!(matches!(result, Err(C32Error::InvalidCharacter('*'))));
    }

    #[test]
    fn test_address_decode_inverts_address_encode() {
        let hash: Vec<u8> = (100u8..120).collect();
        for version in [0u8, 1, 20, 21, 22, 26, 31] {
            let addr = c32_address(version, &hash).unwrap();
            let (decoded_version, decoded_hash) = c32_address_decode(&addr).unwrap();
            assert_eq!(decoded_version, version);
            assert_eq!(decoded_hash, hash);
        }
    }

    #[test]
    fn test_address_decode_detects_corruption() {
        let addr = c32_address(22, &[0x42u8; 20]).unwrap();
        // Flip the last digit to something else in the alphabet
        let last = addr.chars().last().unwrap();
        let replacement = if last == '7' { '9' } else { '7' };
        let mut corrupted: String = addr[..addr.len() - 1].to_string();
        corrupted.push(replacement);

        let result = c32_address_decode(&corrupted);
        assert!(matches!(result, Err(C32Error::ChecksumMismatch(_))));
    }

    #[test]
    fn test_address_decode_rejects_missing_sigil() {
        let result = c32_address_decode("P2JKEZC09WVMR33NBSCWQAJC5GS590RP1FR9CK55");
        assert!(matches!(result, Err(C32Error::MalformedAddress(_))));
    }

    #[test]
    fn test_address_decode_rejects_too_short() {
        let result = c32_address_decode("SP2JK");
        assert!(matches!(result, Err(C32Error::MalformedAddress(_))));
    }
}
