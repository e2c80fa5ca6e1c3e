//! Backend over the RustCrypto `hmac` crate with `sha1`/`sha2` digests.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use super::HmacBackend;
use crate::{Algorithm, Error};

enum MacState {
    Sha1(Hmac<Sha1>),
    Sha256(Hmac<Sha256>),
    Sha512(Hmac<Sha512>),
}

pub(crate) struct RustCryptoHmac {
    algorithm: Algorithm,
    mac: Option<MacState>,
}

impl HmacBackend for RustCryptoHmac {
    fn open (algorithm: Algorithm) -> Result<Self, Error> {
        Ok(RustCryptoHmac { algorithm, mac: None })
    }

    fn digest_len (&self) -> usize {
        self.algorithm.digest_len()
    }

    fn set_key (&mut self, key: &[u8]) -> Result<(), Error> {
        let mac = match self.algorithm {
            Algorithm::Sha1 => {
                MacState::Sha1(Hmac::new_from_slice(key).map_err(|_| Error::HmacFailure)?)
            }
            Algorithm::Sha256 => {
                MacState::Sha256(Hmac::new_from_slice(key).map_err(|_| Error::HmacFailure)?)
            }
            Algorithm::Sha512 => {
                MacState::Sha512(Hmac::new_from_slice(key).map_err(|_| Error::HmacFailure)?)
            }
        };
        self.mac = Some(mac);
        Ok(())
    }

    fn update (&mut self, data: &[u8]) {
        match &mut self.mac {
            Some(MacState::Sha1(mac)) => mac.update(data),
            Some(MacState::Sha256(mac)) => mac.update(data),
            Some(MacState::Sha512(mac)) => mac.update(data),
            None => {}
        }
    }

    fn finalize (self, out: &mut [u8]) -> Result<usize, Error> {
        let dlen = self.digest_len();
        if out.len() < dlen {
            return Err(Error::MemoryAllocation);
        }
        match self.mac.ok_or(Error::HmacFailure)? {
            MacState::Sha1(mac) => out[..dlen].copy_from_slice(&mac.finalize().into_bytes()),
            MacState::Sha256(mac) => out[..dlen].copy_from_slice(&mac.finalize().into_bytes()),
            MacState::Sha512(mac) => out[..dlen].copy_from_slice(&mac.finalize().into_bytes()),
        }
        Ok(dlen)
    }
}
