//! Hygiene helpers for secret material: best-effort wiping and
//! constant-time comparison.
//!
//! Decoded secrets and raw digests live in [`SecretBuf`] so the wipe runs
//! on every exit path, success and failure alike. A moved-out or leaked
//! copy a runtime might make is out of reach of any library; this is the
//! best effort a native target can give.

use core::fmt;
use core::ops::{Deref, DerefMut};

use constant_time_eq::constant_time_eq;
use zeroize::Zeroize;

/// Overwrite a buffer with zeroes in a way the compiler must not elide.
pub(crate) fn wipe (buf: &mut [u8]) {
    buf.zeroize();
}

/// Compare two byte strings without a content-dependent early exit.
///
/// Unequal lengths compare unequal; the length itself is not secret.
pub(crate) fn timing_safe_eq (a: &[u8], b: &[u8]) -> bool {
    constant_time_eq(a, b)
}

/// Owned byte buffer that is wiped before its memory is released.
pub(crate) struct SecretBuf(Vec<u8>);

impl SecretBuf {
    pub(crate) fn new (bytes: Vec<u8>) -> Self {
        SecretBuf(bytes)
    }

    pub(crate) fn zeroed (len: usize) -> Self {
        SecretBuf(vec![0u8; len])
    }
}

impl Deref for SecretBuf {
    type Target = [u8];

    fn deref (&self) -> &[u8] {
        &self.0
    }
}

impl DerefMut for SecretBuf {
    fn deref_mut (&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl Drop for SecretBuf {
    fn drop (&mut self) {
        wipe(&mut self.0);
    }
}

impl fmt::Debug for SecretBuf {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBuf")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}
