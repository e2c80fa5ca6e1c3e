//! Reusable TOTP parameter context.

use crate::{check_digits, check_period, unix_now, Algorithm, Error};

/// An immutable, validated `{digits, period, algorithm}` tuple.
///
/// Construction applies the same parameter rules as the free functions and
/// fails without producing a context if any of them is violated. The
/// context owns no secret and holds no hidden state, so one instance can
/// serve any number of computations from any thread; each call stands
/// alone. Dropping it releases nothing beyond the value itself.
///
/// ```rust
/// use otpkit::{Algorithm, OtpContext};
///
/// let ctx = OtpContext::new(8, 30, Algorithm::Sha1).unwrap();
/// let code = ctx.totp_at("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ", 59).unwrap();
/// assert_eq!(code, "94287082");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpContext {
    digits: u32,
    period: u32,
    algorithm: Algorithm,
}

impl OtpContext {
    /// Validate the parameters and build a context.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDigits`] outside [4, 10], [`Error::InvalidPeriod`]
    /// outside [1, 120].
    pub fn new (digits: u32, period: u32, algorithm: Algorithm) -> Result<Self, Error> {
        check_digits(digits)?;
        check_period(period)?;
        Ok(OtpContext { digits, period, algorithm })
    }

    pub const fn digits (&self) -> u32 {
        self.digits
    }

    pub const fn period (&self) -> u32 {
        self.period
    }

    pub const fn algorithm (&self) -> Algorithm {
        self.algorithm
    }

    /// TOTP for the given secret at the current system time.
    pub fn totp (&self, secret: &str) -> Result<String, Error> {
        self.totp_at(secret, unix_now())
    }

    /// TOTP for the given secret at an explicit Unix timestamp.
    pub fn totp_at (&self, secret: &str, timestamp: i64) -> Result<String, Error> {
        crate::totp_at(secret, timestamp, self.digits, self.period, self.algorithm)
    }
}
