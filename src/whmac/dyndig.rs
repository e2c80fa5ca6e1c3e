//! Backend computing HMAC per
//! [IETF RFC 2104](https://www.rfc-editor.org/rfc/rfc2104.html) over any
//! hash exposed as a `digest::DynDigest` trait object.

use digest::DynDigest;

use super::HmacBackend;
use crate::secure::SecretBuf;
use crate::{Algorithm, Error};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

fn new_digest (algorithm: Algorithm) -> Box<dyn DynDigest> {
    match algorithm {
        Algorithm::Sha1 => Box::new(sha1::Sha1::default()),
        Algorithm::Sha256 => Box::new(sha2::Sha256::default()),
        Algorithm::Sha512 => Box::new(sha2::Sha512::default()),
    }
}

/// Internal block size of the underlying hash, which is the HMAC key-block
/// size.
const fn block_len (algorithm: Algorithm) -> usize {
    match algorithm {
        Algorithm::Sha1 | Algorithm::Sha256 => 64,
        Algorithm::Sha512 => 128,
    }
}

pub(crate) struct DynDigestHmac {
    algorithm: Algorithm,
    hasher: Box<dyn DynDigest>,
    // Key block xored with OPAD, held back for the outer pass. Present only
    // once the handle is keyed.
    opad_block: Option<SecretBuf>,
}

impl HmacBackend for DynDigestHmac {
    fn open (algorithm: Algorithm) -> Result<Self, Error> {
        Ok(DynDigestHmac {
            algorithm,
            hasher: new_digest(algorithm),
            opad_block: None,
        })
    }

    fn digest_len (&self) -> usize {
        self.algorithm.digest_len()
    }

    fn set_key (&mut self, key: &[u8]) -> Result<(), Error> {
        let blen = block_len(self.algorithm);
        let mut block = SecretBuf::zeroed(blen);
        if key.len() > blen {
            // Keys longer than one block are hashed down first.
            let dlen = self.digest_len();
            self.hasher.update(key);
            self.hasher
                .finalize_into_reset(&mut block[..dlen])
                .map_err(|_| Error::HmacFailure)?;
        } else {
            block[..key.len()].copy_from_slice(key);
        }

        let mut ipad_block = SecretBuf::zeroed(blen);
        let mut opad_block = SecretBuf::zeroed(blen);
        for i in 0..blen {
            ipad_block[i] = block[i] ^ IPAD;
            opad_block[i] = block[i] ^ OPAD;
        }
        self.hasher.update(&ipad_block);
        self.opad_block = Some(opad_block);
        Ok(())
    }

    fn update (&mut self, data: &[u8]) {
        // Data fed before the key would corrupt the inner hash; discard it
        // and let finalize report the unkeyed handle.
        if self.opad_block.is_some() {
            self.hasher.update(data);
        }
    }

    fn finalize (mut self, out: &mut [u8]) -> Result<usize, Error> {
        let dlen = self.digest_len();
        if out.len() < dlen {
            return Err(Error::MemoryAllocation);
        }
        let opad_block = self.opad_block.take().ok_or(Error::HmacFailure)?;

        let mut inner = SecretBuf::zeroed(dlen);
        self.hasher
            .finalize_into_reset(&mut inner)
            .map_err(|_| Error::HmacFailure)?;

        self.hasher.update(&opad_block);
        self.hasher.update(&inner);
        self.hasher
            .finalize_into_reset(&mut out[..dlen])
            .map_err(|_| Error::HmacFailure)?;
        Ok(dlen)
    }
}
