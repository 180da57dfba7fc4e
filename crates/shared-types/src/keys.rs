//! # Key Pairs
//!
//! secp256k1 key pairs as stored by the node's key manager.

use crate::entities::{keccak256, Address};
use crate::errors::KeyError;
use secp256k1::{PublicKey, Secp256k1, SecretKey};

/// Length of a raw secp256k1 secret key.
pub const SECRET_KEY_LENGTH: usize = 32;

/// A secp256k1 key pair with its uncompressed public key.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    /// Raw 32-byte secret scalar.
    pub private_key: [u8; SECRET_KEY_LENGTH],
    /// Uncompressed SEC1 public key (65 bytes, `0x04` prefix).
    pub public_key: [u8; 65],
}

impl KeyPair {
    /// Builds a key pair from raw secret key bytes.
    pub fn from_secret(secret: &[u8]) -> Result<Self, KeyError> {
        if secret.len() != SECRET_KEY_LENGTH {
            return Err(KeyError::InvalidLength {
                expected: SECRET_KEY_LENGTH,
                actual: secret.len(),
            });
        }

        let secret_key = SecretKey::from_slice(secret).map_err(|_| KeyError::InvalidSecretKey)?;
        let secp = Secp256k1::signing_only();
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);

        Ok(Self {
            private_key: secret_key.secret_bytes(),
            public_key: public_key.serialize_uncompressed(),
        })
    }

    /// Account address: last 20 bytes of Keccak-256 over the public key
    /// without its SEC1 prefix byte.
    pub fn address(&self) -> Address {
        let hash = keccak256(&self.public_key[1..]);
        Address::from_slice(&hash.as_bytes()[12..])
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
