//! Wrapped-HMAC backend abstraction.
//!
//! The truncation algorithm upstream of this module is HMAC-SHA1/256/512
//! based and must behave identically no matter which cryptographic library
//! is linked. Each backend wraps one library behind the same capability
//! set; the backend is chosen at compile time through cargo features, never
//! at runtime:
//!
//! - `rustcrypto` (default): the `hmac` crate over `sha1`/`sha2`
//! - `ring`: `ring::hmac`
//! - `dyndig`: HMAC per [IETF RFC 2104](https://www.rfc-editor.org/rfc/rfc2104.html)
//!   computed over any `digest::DynDigest`
//!
//! If several backend features end up enabled through feature unification,
//! the first of the list above wins.

use hex::FromHex;
use once_cell::sync::OnceCell;

use crate::secure::timing_safe_eq;
use crate::{Algorithm, Error};

#[cfg(feature = "rustcrypto")]
mod rustcrypto;
#[cfg(all(feature = "ring", not(feature = "rustcrypto")))]
mod ring;
#[cfg(all(feature = "dyndig", not(any(feature = "rustcrypto", feature = "ring"))))]
mod dyndig;

#[cfg(feature = "rustcrypto")]
pub(crate) type Backend = rustcrypto::RustCryptoHmac;
#[cfg(all(feature = "ring", not(feature = "rustcrypto")))]
pub(crate) type Backend = ring::RingHmac;
#[cfg(all(feature = "dyndig", not(any(feature = "rustcrypto", feature = "ring"))))]
pub(crate) type Backend = dyndig::DynDigestHmac;

#[cfg(not(any(feature = "rustcrypto", feature = "ring", feature = "dyndig")))]
compile_error!("an HMAC backend feature is required: rustcrypto, ring or dyndig");

/// The capability set every backend exposes.
///
/// A handle is single-use: `finalize` consumes it, so reuse after
/// finalization is unrepresentable, and dropping the handle is the close
/// path on success and failure alike.
pub(crate) trait HmacBackend: Sized {
    /// Open a handle for one HMAC computation with the given algorithm.
    fn open (algorithm: Algorithm) -> Result<Self, Error>;

    /// Digest size in bytes for the algorithm this handle was opened with.
    fn digest_len (&self) -> usize;

    /// Install the key. Must be called exactly once, before any update.
    fn set_key (&mut self, key: &[u8]) -> Result<(), Error>;

    /// Feed message bytes. Updates before `set_key` are discarded and
    /// surface as [`Error::HmacFailure`] at finalization.
    fn update (&mut self, data: &[u8]);

    /// Write the digest into `out` and return the number of bytes written.
    ///
    /// `out` shorter than [`digest_len`](Self::digest_len) is
    /// [`Error::MemoryAllocation`]; an unkeyed handle is
    /// [`Error::HmacFailure`].
    fn finalize (self, out: &mut [u8]) -> Result<usize, Error>;
}

/// Known-answer self-check: HMAC-SHA1 test case 1 from
/// [IETF RFC 2202](https://www.rfc-editor.org/rfc/rfc2202.html).
fn known_answer_check<B: HmacBackend> () -> Result<(), Error> {
    let expected = <[u8; 20]>::from_hex("b617318655057264e28bc0b6fb378c8ef146be00")
        .map_err(|_| Error::BackendVersionMismatch)?;

    let mut hd = B::open(Algorithm::Sha1)?;
    hd.set_key(&[0x0B; 20])?;
    hd.update(b"Hi There");
    let mut out = [0u8; 20];
    let written = hd.finalize(&mut out)?;
    if written != expected.len() || !timing_safe_eq(&out, &expected) {
        return Err(Error::BackendVersionMismatch);
    }
    Ok(())
}

/// Run the backend self-check exactly once per process.
///
/// The result is sticky: after a failure every caller keeps failing with
/// [`Error::BackendVersionMismatch`] instead of proceeding on a primitive
/// that cannot reproduce a known HMAC value. The once-guard gives
/// happens-before semantics to concurrent first calls.
pub(crate) fn ensure_backend () -> Result<(), Error> {
    static SELF_CHECK: OnceCell<Result<(), Error>> = OnceCell::new();
    *SELF_CHECK.get_or_init(|| {
        known_answer_check::<Backend>().map_err(|_| Error::BackendVersionMismatch)
    })
}
