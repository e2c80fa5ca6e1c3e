//! # RFC 4226 / RFC 6238 One-Time Passwords
//!
//! Implements the HOTP algorithm described in
//! [IETF RFC 4226](https://www.rfc-editor.org/rfc/rfc4226.html), the TOTP
//! algorithm described in
//! [IETF RFC 6238](https://www.rfc-editor.org/rfc/rfc6238.html), and the
//! Steam Guard variant of TOTP, together with the two pieces neither works
//! without: a strict [RFC 4648](https://www.rfc-editor.org/rfc/rfc4648.html)
//! Base32 codec (shared secrets travel as Base32 text) and an HMAC backend
//! abstraction that produces identical results no matter which underlying
//! cryptographic library is compiled in.
//!
//! This algorithm is **NOT** the same as the challenge/response OTP of RFC
//! 2289 used by the `OTP` SASL mechanism; HOTP/TOTP are the algorithms
//! behind the familiar six-digit authenticator apps.
//!
//! ## Security
//!
//! - Decoded secrets and raw HMAC digests are held in buffers that are
//!   wiped before their memory is released, on success and on every error
//!   path.
//! - Verification compares codes in constant time over equal lengths.
//! - The Base32 decoder is strictly RFC 4648: it does **not** silently
//!   correct visually ambiguous characters such as `0` for `O`. If your
//!   product wants that leniency, normalize the text yourself before
//!   calling in, where the substitution can be tested on its own.
//! - At first use the selected HMAC backend must reproduce a known-answer
//!   vector; if it cannot, every call fails rather than falling back to a
//!   weaker primitive.
//!
//! ## Feature Flags
//!
//! - `rustcrypto`: HMAC backend over the RustCrypto `hmac`/`sha1`/`sha2`
//!   crates (default)
//! - `ring`: HMAC backend over `ring::hmac`
//! - `dyndig`: HMAC backend computed per RFC 2104 over any
//!   `digest::DynDigest`
//! - `steam`: the Steam Guard code format
//! - `validation`: clock-skew window verification
//!
//! Exactly one backend is used; when feature unification enables several,
//! the order `rustcrypto`, `ring`, `dyndig` decides.
//!
//! ## Usage
//!
//! ```rust
//! use otpkit::{hotp, totp_at, Algorithm};
//!
//! // The RFC 4226 reference secret, Base32-encoded.
//! let secret = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";
//!
//! let code = hotp(secret, 0, 6, Algorithm::Sha1).unwrap();
//! assert_eq!(code, "755224");
//!
//! let code = totp_at(secret, 59, 8, 30, Algorithm::Sha1).unwrap();
//! assert_eq!(code, "94287082");
//! ```
//!
//! Servers validating user input verify rather than generate:
//!
//! ```rust
//! use otpkit::{totp_verify_at, Algorithm};
//!
//! let secret = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";
//! assert_eq!(totp_verify_at(secret, "94287082", 59, 8, 30, Algorithm::Sha1), Ok(true));
//! assert_eq!(totp_verify_at(secret, "94287083", 59, 8, 30, Algorithm::Sha1), Ok(false));
//! ```

use core::fmt;
use core::str::FromStr;
use std::borrow::Cow;
use std::time::{SystemTime, UNIX_EPOCH};

use cow_utils::CowUtils;

pub mod base32;
mod context;
mod error;
mod secure;
mod whmac;
#[cfg(feature = "validation")]
mod window;

pub use context::OtpContext;
pub use error::Error;
#[cfg(feature = "validation")]
pub use window::validate_totp_in_window;

use secure::{timing_safe_eq, SecretBuf};
use whmac::HmacBackend;

pub(crate) const MIN_DIGITS: u32 = 4;
pub(crate) const MAX_DIGITS: u32 = 10;
pub(crate) const MAX_PERIOD: u32 = 120;

/// `10^digits` for every permitted digit count. u64 keeps the reduction of
/// a 31-bit truncated value exact up to `digits = 10`.
const DIGITS_POWER: [u64; 11] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
];

#[cfg(feature = "steam")]
const STEAM_ALPHABET: &[u8; 26] = b"23456789BCDFGHJKMNPQRTVWXY";

/// Hash algorithms usable with HOTP and TOTP.
///
/// RFC 4226 specifies HMAC-SHA-1; RFC 6238 extends the family with
/// HMAC-SHA-256 and HMAC-SHA-512. SHA1 is the default for compatibility
/// with the installed base of authenticators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    /// Digest size in bytes.
    pub const fn digest_len (self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Sha512 => 64,
        }
    }

    pub const fn as_str (self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA1",
            Algorithm::Sha256 => "SHA256",
            Algorithm::Sha512 => "SHA512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str (s: &str) -> Result<Self, Error> {
        if s.eq_ignore_ascii_case("sha1") {
            Ok(Algorithm::Sha1)
        } else if s.eq_ignore_ascii_case("sha256") {
            Ok(Algorithm::Sha256)
        } else if s.eq_ignore_ascii_case("sha512") {
            Ok(Algorithm::Sha512)
        } else {
            Err(Error::InvalidAlgorithm)
        }
    }
}

pub(crate) const fn check_digits (digits: u32) -> Result<(), Error> {
    if digits < MIN_DIGITS || digits > MAX_DIGITS {
        Err(Error::InvalidDigits)
    } else {
        Ok(())
    }
}

pub(crate) const fn check_period (period: u32) -> Result<(), Error> {
    if period == 0 || period > MAX_PERIOD {
        Err(Error::InvalidPeriod)
    } else {
        Ok(())
    }
}

/// Current Unix time in seconds. A pre-epoch clock yields a negative value,
/// which the timestamp validation rejects downstream.
pub(crate) fn unix_now () -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(_) => -1,
    }
}

/// Secrets arrive as users paste them: grouped with spaces and in either
/// case. Drop interior spaces and upper-case ASCII letters; nothing else is
/// touched here, visual-typo substitution included.
fn normalize_secret (secret: &str) -> Cow<'_, str> {
    match secret.cow_replace(" ", "") {
        Cow::Borrowed(stripped) => stripped.cow_to_ascii_uppercase(),
        Cow::Owned(mut stripped) => {
            stripped.make_ascii_uppercase();
            Cow::Owned(stripped)
        }
    }
}

/// Normalize and Base32-decode the shared secret into a wiped-on-drop
/// buffer.
fn decode_secret (secret: &str) -> Result<SecretBuf, Error> {
    let normalized = normalize_secret(secret);
    if normalized.is_empty() {
        return Err(Error::EmptyString);
    }
    let key = SecretBuf::new(base32::decode(&normalized)?);
    if key.is_empty() {
        // Padding or a lone symbol normalizes to zero key bytes.
        return Err(Error::EmptyString);
    }
    Ok(key)
}

/// `HMAC(key = decoded secret, message = counter as 8 bytes big-endian)`.
///
/// The counter is serialized explicitly so host byte order never leaks
/// into the wire value. Key and digest are wiped when their buffers drop,
/// on every exit path; the handle is consumed by finalization and closed
/// by drop on the failure paths before it.
fn compute_hmac (secret: &str, counter: u64, algorithm: Algorithm) -> Result<SecretBuf, Error> {
    let key = decode_secret(secret)?;

    let mut hd = whmac::Backend::open(algorithm)?;
    hd.set_key(&key)?;
    hd.update(&counter.to_be_bytes());

    let dlen = hd.digest_len();
    let mut digest = SecretBuf::zeroed(dlen);
    let written = hd.finalize(&mut digest)?;
    if written != dlen {
        return Err(Error::HmacFailure);
    }
    Ok(digest)
}

/// Dynamic truncation per RFC 4226 §5.3: the low nibble of the last digest
/// byte addresses a 4-byte window, whose top bit is cleared to force a
/// non-negative 31-bit big-endian value.
fn truncate_31 (digest: &[u8]) -> u32 {
    let offset = (digest[digest.len() - 1] & 0x0F) as usize;
    (u32::from(digest[offset] & 0x7F) << 24)
        | (u32::from(digest[offset + 1]) << 16)
        | (u32::from(digest[offset + 2]) << 8)
        | u32::from(digest[offset + 3])
}

fn truncate (digest: &[u8], digits: u32) -> u64 {
    u64::from(truncate_31(digest)) % DIGITS_POWER[digits as usize]
}

/// Zero-pad the truncated value to exactly `digits` decimal characters.
fn format_code (token: u64, digits: u32) -> String {
    format!("{:0width$}", token, width = digits as usize)
}

/// Map the truncated value to the 5-character Steam format: repeated
/// divmod by the 26-symbol alphabet, each quotient feeding the next round,
/// symbols appended in the order produced.
#[cfg(feature = "steam")]
fn steam_code (digest: &[u8]) -> String {
    let mut value = truncate_31(digest);
    let mut code = String::with_capacity(5);
    for _ in 0..5 {
        let index = (value % STEAM_ALPHABET.len() as u32) as usize;
        value /= STEAM_ALPHABET.len() as u32;
        code.push(STEAM_ALPHABET[index] as char);
    }
    code
}

/// HOTP per RFC 4226: a pure function of the shared secret and a counter.
///
/// The secret is normalized (interior spaces dropped, ASCII letters
/// upper-cased), Base32-decoded, and keyed into
/// `HMAC(secret, counter as 8 bytes big-endian)`; the digest is truncated
/// dynamically and reduced modulo `10^digits`. Identical arguments always
/// produce identical codes.
///
/// # Errors
///
/// [`Error::BackendVersionMismatch`] if the HMAC backend failed its
/// one-time self-check, [`Error::InvalidDigits`] outside [4, 10],
/// [`Error::InvalidCounter`] for a negative counter,
/// [`Error::EmptyString`] / [`Error::InvalidBase32`] /
/// [`Error::InvalidInput`] for a defective secret, and
/// [`Error::HmacFailure`] if the backend fails mid-computation.
pub fn hotp (secret: &str, counter: i64, digits: u32, algorithm: Algorithm) -> Result<String, Error> {
    whmac::ensure_backend()?;
    check_digits(digits)?;
    if counter < 0 {
        return Err(Error::InvalidCounter);
    }
    let digest = compute_hmac(secret, counter as u64, algorithm)?;
    Ok(format_code(truncate(&digest, digits), digits))
}

/// TOTP per RFC 6238 at an explicit Unix timestamp:
/// `hotp(secret, timestamp / period, digits, algorithm)`.
///
/// # Errors
///
/// As [`hotp`], plus [`Error::InvalidPeriod`] outside [1, 120] and
/// [`Error::InvalidCounter`] for a negative timestamp.
pub fn totp_at (
    secret: &str,
    timestamp: i64,
    digits: u32,
    period: u32,
    algorithm: Algorithm,
) -> Result<String, Error> {
    whmac::ensure_backend()?;
    check_digits(digits)?;
    check_period(period)?;
    if timestamp < 0 {
        // Rejected before the division so the truncating division can
        // never observe a negative operand.
        return Err(Error::InvalidCounter);
    }
    hotp(secret, timestamp / i64::from(period), digits, algorithm)
}

/// TOTP per RFC 6238 at the current system time.
///
/// # Errors
///
/// As [`totp_at`].
pub fn totp (secret: &str, digits: u32, period: u32, algorithm: Algorithm) -> Result<String, Error> {
    totp_at(secret, unix_now(), digits, period, algorithm)
}

/// Steam Guard code at an explicit Unix timestamp.
///
/// The time-step derivation matches [`totp_at`]; the algorithm is fixed to
/// SHA1 and the output is always 5 characters from the Steam alphabet, so
/// there is no `digits` parameter.
///
/// # Errors
///
/// As [`totp_at`], without the digit-count condition.
#[cfg(feature = "steam")]
pub fn steam_totp_at (secret: &str, timestamp: i64, period: u32) -> Result<String, Error> {
    whmac::ensure_backend()?;
    check_period(period)?;
    if timestamp < 0 {
        return Err(Error::InvalidCounter);
    }
    let counter = timestamp / i64::from(period);
    let digest = compute_hmac(secret, counter as u64, Algorithm::Sha1)?;
    Ok(steam_code(&digest))
}

/// Steam Guard code at the current system time.
///
/// # Errors
///
/// As [`steam_totp_at`].
#[cfg(feature = "steam")]
pub fn steam_totp (secret: &str, period: u32) -> Result<String, Error> {
    steam_totp_at(secret, unix_now(), period)
}

/// Recompute the expected HOTP and compare it with a user-supplied code in
/// constant time.
///
/// `Ok(true)` is a valid code, `Ok(false)` a mismatch; `Err` means the
/// expected code could not be computed at all, which callers must not
/// conflate with a mismatch.
pub fn hotp_verify (
    secret: &str,
    counter: i64,
    digits: u32,
    user_hotp: &str,
    algorithm: Algorithm,
) -> Result<bool, Error> {
    let expected = hotp(secret, counter, digits, algorithm)?;
    Ok(timing_safe_eq(expected.as_bytes(), user_hotp.as_bytes()))
}

/// Recompute the expected TOTP for `timestamp` and compare it with a
/// user-supplied code in constant time.
///
/// Verdicts are as for [`hotp_verify`].
pub fn totp_verify_at (
    secret: &str,
    user_totp: &str,
    timestamp: i64,
    digits: u32,
    period: u32,
    algorithm: Algorithm,
) -> Result<bool, Error> {
    let expected = totp_at(secret, timestamp, digits, period, algorithm)?;
    Ok(timing_safe_eq(expected.as_bytes(), user_totp.as_bytes()))
}

/// [`totp_verify_at`] against the current system time.
pub fn totp_verify (
    secret: &str,
    user_totp: &str,
    digits: u32,
    period: u32,
    algorithm: Algorithm,
) -> Result<bool, Error> {
    totp_verify_at(secret, user_totp, unix_now(), digits, period, algorithm)
}

/// Successful result of [`otp_to_int`].
///
/// `missing_leading_zero` is set when the code began with `'0'`: the
/// numeric form silently drops that digit, so anything re-rendering the
/// code from `value` must pad back to the original width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpValue {
    pub value: i64,
    pub missing_leading_zero: bool,
}

/// Parse a formatted OTP string into its numeric value.
///
/// # Errors
///
/// [`Error::InvalidInput`] when the length falls outside [4, 10] or any
/// character is not an ASCII digit.
pub fn otp_to_int (otp: &str) -> Result<OtpValue, Error> {
    let len = otp.len();
    if len < MIN_DIGITS as usize || len > MAX_DIGITS as usize {
        return Err(Error::InvalidInput);
    }
    if !otp.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidInput);
    }
    let value = otp.parse::<i64>().map_err(|_| Error::InvalidInput)?;
    Ok(OtpValue {
        value,
        missing_leading_zero: otp.starts_with('0'),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Seeds from the RFC 4226 and RFC 6238 reference suites: the ASCII
    // digit sequence repeated out to the digest size of each algorithm.
    const SEED20: &[u8] = b"12345678901234567890";
    const SEED32: &[u8] = b"12345678901234567890123456789012";
    const SEED64: &[u8] = b"1234567890123456789012345678901234567890123456789012345678901234";

    const HOTP_SHA1_VECTORS: [&str; 10] = [
        "755224", "287082", "359152", "969429", "338314", "254676", "287922", "162583",
        "399871", "520489",
    ];

    const TOTP_SHA1_VECTORS: [(i64, &str); 6] = [
        (59, "94287082"),
        (1111111109, "07081804"),
        (1111111111, "14050471"),
        (1234567890, "89005924"),
        (2000000000, "69279037"),
        (20000000000, "65353130"),
    ];

    const TOTP_SHA256_VECTORS: [(i64, &str); 6] = [
        (59, "46119246"),
        (1111111109, "68084774"),
        (1111111111, "67062674"),
        (1234567890, "91819424"),
        (2000000000, "90698825"),
        (20000000000, "77737706"),
    ];

    const TOTP_SHA512_VECTORS: [(i64, &str); 6] = [
        (59, "90693936"),
        (1111111109, "25091201"),
        (1111111111, "99943326"),
        (1234567890, "93441116"),
        (2000000000, "38618901"),
        (20000000000, "47863826"),
    ];

    fn secret_for (seed: &[u8]) -> String {
        base32::encode(seed).unwrap()
    }

    #[test]
    fn passes_rfc4226_hotp_vectors() {
        let secret = secret_for(SEED20);
        for (counter, expected) in HOTP_SHA1_VECTORS.iter().enumerate() {
            let code = hotp(&secret, counter as i64, 6, Algorithm::Sha1).unwrap();
            assert_eq!(&code, expected, "counter {counter}");
        }
    }

    #[test]
    fn passes_rfc6238_sha1_vectors() {
        let secret = secret_for(SEED20);
        for (timestamp, expected) in TOTP_SHA1_VECTORS {
            let code = totp_at(&secret, timestamp, 8, 30, Algorithm::Sha1).unwrap();
            assert_eq!(code, expected, "timestamp {timestamp}");
        }
    }

    #[test]
    fn passes_rfc6238_sha256_vectors() {
        let secret = secret_for(SEED32);
        for (timestamp, expected) in TOTP_SHA256_VECTORS {
            let code = totp_at(&secret, timestamp, 8, 30, Algorithm::Sha256).unwrap();
            assert_eq!(code, expected, "timestamp {timestamp}");
        }
    }

    #[test]
    fn passes_rfc6238_sha512_vectors() {
        let secret = secret_for(SEED64);
        for (timestamp, expected) in TOTP_SHA512_VECTORS {
            let code = totp_at(&secret, timestamp, 8, 30, Algorithm::Sha512).unwrap();
            assert_eq!(code, expected, "timestamp {timestamp}");
        }
    }

    #[test]
    fn totp_is_hotp_of_the_time_step() {
        let secret = secret_for(SEED20);
        assert_eq!(
            totp_at(&secret, 59, 8, 30, Algorithm::Sha1).unwrap(),
            hotp(&secret, 1, 8, Algorithm::Sha1).unwrap(),
        );
    }

    #[test]
    fn ten_digit_code_keeps_its_leading_zero() {
        let secret = secret_for(SEED20);
        let code = totp_at(&secret, 1234567890, 10, 30, Algorithm::Sha1).unwrap();
        assert_eq!(code, "0689005924");
    }

    #[test]
    fn code_always_has_exactly_the_requested_width() {
        let secret = secret_for(SEED20);
        for digits in MIN_DIGITS..=MAX_DIGITS {
            for counter in 0..4 {
                let code = hotp(&secret, counter, digits, Algorithm::Sha1).unwrap();
                assert_eq!(code.len(), digits as usize);
            }
        }
    }

    #[test]
    fn four_and_ten_digit_boundaries() {
        // Counter 0 truncates to 1284755224 (RFC 4226 reference table).
        let secret = secret_for(SEED20);
        assert_eq!(hotp(&secret, 0, 4, Algorithm::Sha1).unwrap(), "5224");
        assert_eq!(hotp(&secret, 0, 10, Algorithm::Sha1).unwrap(), "1284755224");
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        let secret = secret_for(SEED20);
        assert_eq!(hotp(&secret, 0, 3, Algorithm::Sha1), Err(Error::InvalidDigits));
        assert_eq!(hotp(&secret, 0, 11, Algorithm::Sha1), Err(Error::InvalidDigits));
        assert_eq!(hotp(&secret, -1, 6, Algorithm::Sha1), Err(Error::InvalidCounter));
        assert_eq!(totp_at(&secret, 59, 6, 0, Algorithm::Sha1), Err(Error::InvalidPeriod));
        assert_eq!(totp_at(&secret, 59, 6, 121, Algorithm::Sha1), Err(Error::InvalidPeriod));
        assert_eq!(totp_at(&secret, -1, 6, 30, Algorithm::Sha1), Err(Error::InvalidCounter));
    }

    #[test]
    fn accepts_boundary_parameters() {
        let secret = secret_for(SEED20);
        assert!(hotp(&secret, 0, 4, Algorithm::Sha1).is_ok());
        assert!(hotp(&secret, 0, 10, Algorithm::Sha1).is_ok());
        assert!(totp_at(&secret, 59, 6, 1, Algorithm::Sha1).is_ok());
        assert!(totp_at(&secret, 59, 6, 120, Algorithm::Sha1).is_ok());
    }

    #[test]
    fn rejects_defective_secrets() {
        assert_eq!(hotp("", 0, 6, Algorithm::Sha1), Err(Error::EmptyString));
        assert_eq!(hotp("   ", 0, 6, Algorithm::Sha1), Err(Error::EmptyString));
        assert_eq!(hotp("====", 0, 6, Algorithm::Sha1), Err(Error::EmptyString));
        assert_eq!(hotp("MZXW0===", 0, 6, Algorithm::Sha1), Err(Error::InvalidBase32));
        assert_eq!(hotp("not a secret!", 0, 6, Algorithm::Sha1), Err(Error::InvalidBase32));
    }

    #[test]
    fn normalizes_spaces_and_case() {
        let secret = secret_for(SEED20);
        let sloppy = "gezd gnbv gy3t qojq GEZD GNBV GY3T QOJQ";
        assert_eq!(
            hotp(sloppy, 0, 6, Algorithm::Sha1).unwrap(),
            hotp(&secret, 0, 6, Algorithm::Sha1).unwrap(),
        );
    }

    #[test]
    fn identical_arguments_give_identical_codes() {
        let secret = secret_for(SEED20);
        let first = hotp(&secret, 7, 6, Algorithm::Sha1).unwrap();
        let second = hotp(&secret, 7, 6, Algorithm::Sha1).unwrap();
        assert_eq!(first, second);
    }

    #[cfg(feature = "steam")]
    #[test]
    fn passes_the_steam_vector() {
        let code = steam_totp_at("ON2XAZLSMR2XAZLSONSWG4TFOQ======", 3000030, 30).unwrap();
        assert_eq!(code, "YRGQJ");
    }

    #[cfg(feature = "steam")]
    #[test]
    fn steam_codes_are_five_symbols_from_the_alphabet() {
        let secret = secret_for(SEED20);
        for timestamp in [0, 59, 1111111109, 3000030] {
            let code = steam_totp_at(&secret, timestamp, 30).unwrap();
            assert_eq!(code.len(), 5);
            assert!(code.bytes().all(|b| STEAM_ALPHABET.contains(&b)), "{code}");
        }
    }

    #[cfg(feature = "steam")]
    #[test]
    fn steam_rejects_bad_period_and_timestamp() {
        let secret = secret_for(SEED20);
        assert_eq!(steam_totp_at(&secret, 3000030, 0), Err(Error::InvalidPeriod));
        assert_eq!(steam_totp_at(&secret, 3000030, 121), Err(Error::InvalidPeriod));
        assert_eq!(steam_totp_at(&secret, -1, 30), Err(Error::InvalidCounter));
    }

    #[test]
    fn verification_accepts_only_the_exact_code() {
        let secret = secret_for(SEED20);
        for (timestamp, expected) in TOTP_SHA1_VECTORS {
            assert_eq!(
                totp_verify_at(&secret, expected, timestamp, 8, 30, Algorithm::Sha1),
                Ok(true),
            );
            // Flip the last digit: a single differing digit must mismatch.
            let mut altered = expected.as_bytes().to_vec();
            altered[7] = b'0' + (altered[7] - b'0' + 1) % 10;
            let altered = String::from_utf8(altered).unwrap();
            assert_eq!(
                totp_verify_at(&secret, &altered, timestamp, 8, 30, Algorithm::Sha1),
                Ok(false),
            );
        }
    }

    #[test]
    fn verification_mismatches_a_wrong_length_code() {
        let secret = secret_for(SEED20);
        assert_eq!(
            totp_verify_at(&secret, "9428708", 59, 8, 30, Algorithm::Sha1),
            Ok(false),
        );
    }

    #[test]
    fn verification_error_is_distinct_from_mismatch() {
        assert_eq!(
            totp_verify_at("", "94287082", 59, 8, 30, Algorithm::Sha1),
            Err(Error::EmptyString),
        );
        let secret = secret_for(SEED20);
        assert_eq!(
            totp_verify_at(&secret, "94287082", 59, 3, 30, Algorithm::Sha1),
            Err(Error::InvalidDigits),
        );
    }

    #[test]
    fn hotp_verification() {
        let secret = secret_for(SEED20);
        assert_eq!(hotp_verify(&secret, 0, 6, "755224", Algorithm::Sha1), Ok(true));
        assert_eq!(hotp_verify(&secret, 0, 6, "755225", Algorithm::Sha1), Ok(false));
        assert_eq!(
            hotp_verify(&secret, -1, 6, "755224", Algorithm::Sha1),
            Err(Error::InvalidCounter),
        );
    }

    #[test]
    fn parses_codes_to_integers() {
        let parsed = otp_to_int("755224").unwrap();
        assert_eq!(parsed.value, 755224);
        assert!(!parsed.missing_leading_zero);

        let parsed = otp_to_int("0689005924").unwrap();
        assert_eq!(parsed.value, 689005924);
        assert!(parsed.missing_leading_zero);
    }

    #[test]
    fn rejects_unparseable_codes() {
        assert_eq!(otp_to_int("124"), Err(Error::InvalidInput));
        assert_eq!(otp_to_int("12345678901"), Err(Error::InvalidInput));
        assert_eq!(otp_to_int("12a4"), Err(Error::InvalidInput));
        assert_eq!(otp_to_int("-1234"), Err(Error::InvalidInput));
    }

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in [Algorithm::Sha1, Algorithm::Sha256, Algorithm::Sha512] {
            assert_eq!(algorithm.as_str().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("sha256".parse::<Algorithm>(), Ok(Algorithm::Sha256));
        assert_eq!("md5".parse::<Algorithm>(), Err(Error::InvalidAlgorithm));
        assert_eq!("".parse::<Algorithm>(), Err(Error::InvalidAlgorithm));
    }

    #[test]
    fn current_time_totp_has_the_requested_shape() {
        let secret = secret_for(SEED20);
        let code = totp(&secret, 6, 30, Algorithm::Sha1).unwrap();
        assert_eq!(code.len(), 6);
        assert!(code.bytes().all(|b| b.is_ascii_digit()));
    }
}
