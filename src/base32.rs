//! Base32 codec per [IETF RFC 4648](https://www.rfc-editor.org/rfc/rfc4648.html).
//!
//! This is the encoding in which OTP shared secrets are exchanged, so the
//! decoder is deliberately strict: apart from skipping ASCII spaces and `=`
//! padding, any character outside the RFC 4648 alphabet (in either case) is
//! rejected. In particular, no correction of visually ambiguous characters
//! (`0` for `O`, `1` for `L`, `8` for `B`) happens here; a caller that wants
//! that leniency must normalize before decoding, where the substitution can
//! be tested and audited on its own.

use crate::Error;

/// The RFC 4648 Base32 alphabet.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Inputs beyond this many bytes are rejected before any allocation.
const MAX_INPUT: usize = 64 * 1024 * 1024;

const INVALID: u8 = 0xFF;

/// 256-entry lookup table mapping a symbol (either case) to its 5-bit value.
const DECODE_MAP: [u8; 256] = build_decode_map();

const fn build_decode_map () -> [u8; 256] {
    let mut map = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        map[ALPHABET[i].to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    map
}

/// Number of symbols a final group of `leftover` input bytes produces; the
/// remainder of the 8-symbol group is `=` padding.
const fn symbols_for (leftover: usize) -> usize {
    match leftover {
        1 => 2,
        2 => 4,
        3 => 5,
        4 => 7,
        _ => 8,
    }
}

/// Callers coming from C-style buffers routinely include the terminating
/// NUL in the declared length. A zero byte is a terminator, not payload,
/// exactly when the declared length equals the natural string length plus
/// one, i.e. the first zero byte is the last byte.
fn effective_payload (data: &[u8]) -> &[u8] {
    match data.iter().position(|&b| b == 0) {
        Some(i) if i + 1 == data.len() => &data[..i],
        _ => data,
    }
}

/// Encode bytes as RFC 4648 Base32 with canonical `=` padding.
///
/// Input is processed 5 bytes (40 bits) at a time into 8 output symbols.
/// A single trailing zero byte is treated as a C-style terminator and
/// excluded from the bit stream. Empty input encodes to the empty string.
///
/// # Errors
///
/// [`Error::InvalidInput`] if the input exceeds 64 MiB.
pub fn encode (data: &[u8]) -> Result<String, Error> {
    if data.len() > MAX_INPUT {
        return Err(Error::InvalidInput);
    }
    let data = effective_payload(data);
    if data.is_empty() {
        return Ok(String::new());
    }

    let mut out = String::with_capacity(data.len().div_ceil(5) * 8);
    for chunk in data.chunks(5) {
        let mut block = [0u8; 5];
        block[..chunk.len()].copy_from_slice(chunk);
        let bits = (u64::from(block[0]) << 32)
            | (u64::from(block[1]) << 24)
            | (u64::from(block[2]) << 16)
            | (u64::from(block[3]) << 8)
            | u64::from(block[4]);

        let symbols = symbols_for(chunk.len());
        for i in 0..symbols {
            let index = (bits >> (35 - 5 * i)) & 0x1F;
            out.push(ALPHABET[index as usize] as char);
        }
        for _ in symbols..8 {
            out.push('=');
        }
    }
    Ok(out)
}

/// Decode RFC 4648 Base32 text into bytes.
///
/// ASCII spaces and `=` are skipped wherever they appear; letters are
/// accepted in either case. The output length is exactly
/// `floor(symbols * 5 / 8)` for the remaining symbols.
///
/// # Errors
///
/// [`Error::InvalidBase32`] for any character outside `[A-Za-z2-7 =]`, and
/// [`Error::InvalidInput`] if the input exceeds 64 MiB. Both are reported
/// before any allocation.
pub fn decode (encoded: &str) -> Result<Vec<u8>, Error> {
    if encoded.len() > MAX_INPUT {
        return Err(Error::InvalidInput);
    }

    let mut symbols = 0usize;
    for &b in encoded.as_bytes() {
        if b == b' ' || b == b'=' {
            continue;
        }
        if DECODE_MAP[b as usize] == INVALID {
            return Err(Error::InvalidBase32);
        }
        symbols += 1;
    }

    let mut out = Vec::with_capacity(symbols * 5 / 8);
    let mut buffer = 0u32;
    let mut bits_left = 0u8;
    for &b in encoded.as_bytes() {
        if b == b' ' || b == b'=' {
            continue;
        }
        buffer = (buffer << 5) | u32::from(DECODE_MAP[b as usize]);
        bits_left += 5;
        if bits_left >= 8 {
            out.push((buffer >> (bits_left - 8)) as u8);
            bits_left -= 8;
        }
    }
    Ok(out)
}

/// Whether `encoded` is non-empty and consists only of characters [`decode`]
/// accepts.
pub fn is_valid (encoded: &str) -> bool {
    !encoded.is_empty()
        && encoded
            .bytes()
            .all(|b| b == b' ' || b == b'=' || DECODE_MAP[b as usize] != INVALID)
}
