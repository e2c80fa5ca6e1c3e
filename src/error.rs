/// The closed set of failure conditions an OTP operation can report.
///
/// Every fallible function in this crate returns exactly one of these; no
/// operation is retried, since each condition stems from bad input or a
/// misconfigured environment rather than anything transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The cryptographic backend failed its one-time known-answer
    /// self-check. Once this is observed, every later call fails with it
    /// too: the crate will not fall back to a weaker primitive.
    #[error("cryptographic backend failed its self-check; the linked library is too old or misconfigured")]
    BackendVersionMismatch,
    /// The input contains a character outside the RFC 4648 Base32 alphabet.
    #[error("input is not valid Base32")]
    InvalidBase32,
    /// The named hash algorithm is not one of SHA1, SHA256 or SHA512.
    #[error("unknown or unsupported hash algorithm")]
    InvalidAlgorithm,
    /// The requested number of digits falls outside [4, 10].
    #[error("digit count must be between 4 and 10")]
    InvalidDigits,
    /// The TOTP period falls outside [1, 120] seconds.
    #[error("period must be between 1 and 120 seconds")]
    InvalidPeriod,
    /// The counter or timestamp is negative.
    #[error("counter must be non-negative")]
    InvalidCounter,
    /// An output buffer was too small for the digest the backend produced.
    #[error("memory allocation failed or output buffer too small")]
    MemoryAllocation,
    /// Malformed input that no more specific condition covers, including
    /// inputs over the codec size bound.
    #[error("invalid input")]
    InvalidInput,
    /// The secret contains no key material once normalized and decoded.
    #[error("empty string")]
    EmptyString,
    /// The backend reported a failure while computing the HMAC, or a handle
    /// was used before it was keyed.
    #[error("HMAC computation failed")]
    HmacFailure,
}
