//! Backend over `ring::hmac`.

use ::ring::hmac;

use super::HmacBackend;
use crate::{Algorithm, Error};

fn ring_algorithm (algorithm: Algorithm) -> hmac::Algorithm {
    match algorithm {
        Algorithm::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
        Algorithm::Sha256 => hmac::HMAC_SHA256,
        Algorithm::Sha512 => hmac::HMAC_SHA512,
    }
}

pub(crate) struct RingHmac {
    algorithm: Algorithm,
    ctx: Option<hmac::Context>,
}

impl HmacBackend for RingHmac {
    fn open (algorithm: Algorithm) -> Result<Self, Error> {
        Ok(RingHmac { algorithm, ctx: None })
    }

    fn digest_len (&self) -> usize {
        self.algorithm.digest_len()
    }

    fn set_key (&mut self, key: &[u8]) -> Result<(), Error> {
        let key = hmac::Key::new(ring_algorithm(self.algorithm), key);
        self.ctx = Some(hmac::Context::with_key(&key));
        Ok(())
    }

    fn update (&mut self, data: &[u8]) {
        if let Some(ctx) = &mut self.ctx {
            ctx.update(data);
        }
    }

    fn finalize (self, out: &mut [u8]) -> Result<usize, Error> {
        let dlen = self.digest_len();
        if out.len() < dlen {
            return Err(Error::MemoryAllocation);
        }
        let ctx = self.ctx.ok_or(Error::HmacFailure)?;
        let tag = ctx.sign();
        out[..dlen].copy_from_slice(tag.as_ref());
        Ok(dlen)
    }
}
