use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::models::WalletError;
use crate::utils::encoding::{decode_hex, encode_hex};

pub const PUBLIC_KEY_LENGTH: usize = 32;
pub const SEED_LENGTH: usize = 32;
pub const SECRET_KEY_LENGTH: usize = 64;
pub const SIGNATURE_LENGTH: usize = 64;

/// Derivation input for a wallet keypair.
///
/// `Fresh` asks for random generation, `Seed` carries a 32-byte seed to
/// expand, and `Expanded` carries a full 64-byte secret key to adopt as-is.
#[derive(Zeroize, ZeroizeOnDrop)]
pub enum KeyMaterial {
    Fresh,
    Seed([u8; SEED_LENGTH]),
    Expanded([u8; SECRET_KEY_LENGTH]),
}

impl KeyMaterial {
    /// Classify raw input bytes by length. Empty input means fresh
    /// generation; anything other than 0, 32 or 64 bytes is rejected.
    pub fn from_bytes(input: &[u8]) -> Result<Self, WalletError> {
        match input.len() {
            0 => Ok(KeyMaterial::Fresh),
            SEED_LENGTH => {
                let mut seed = [0u8; SEED_LENGTH];
                seed.copy_from_slice(input);
                Ok(KeyMaterial::Seed(seed))
            }
            SECRET_KEY_LENGTH => {
                let mut secret_key = [0u8; SECRET_KEY_LENGTH];
                secret_key.copy_from_slice(input);
                Ok(KeyMaterial::Expanded(secret_key))
            }
            _ => Err(WalletError::InvalidKeyMaterial(
                "expected 32-byte seed or 64-byte secret key".to_string(),
            )),
        }
    }
}

/// An Ed25519 wallet keypair. The 64-byte secret key follows the extended
/// convention: the trailing 32 bytes repeat the public key.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    pub public_key: [u8; PUBLIC_KEY_LENGTH],
    pub secret_key: [u8; SECRET_KEY_LENGTH],
}

impl KeyPair {
    /// Display address: "0x" followed by the hex-encoded public key.
    pub fn address(&self) -> String {
        format!("0x{}", encode_hex(&self.public_key))
    }

    pub fn public_key_hex(&self) -> String {
        encode_hex(&self.public_key)
    }

    pub fn secret_key_hex(&self) -> String {
        encode_hex(&self.secret_key)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key_hex())
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Persisted wallet record, one per wallet.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredWallet {
    pub public_key_hex: String,
    pub secret_key_hex: String,
}

impl StoredWallet {
    /// Rebuild the keypair from the stored hex fields.
    pub fn to_keypair(&self) -> Result<KeyPair, WalletError> {
        let public_key: [u8; PUBLIC_KEY_LENGTH] =
            decode_hex(&self.public_key_hex)?.try_into().map_err(|bytes: Vec<u8>| {
                WalletError::StorageCorrupted(format!(
                    "public key is {} bytes, expected {}",
                    bytes.len(),
                    PUBLIC_KEY_LENGTH
                ))
            })?;
        let secret_key: [u8; SECRET_KEY_LENGTH] =
            decode_hex(&self.secret_key_hex)?.try_into().map_err(|bytes: Vec<u8>| {
                WalletError::StorageCorrupted(format!(
                    "secret key is {} bytes, expected {}",
                    bytes.len(),
                    SECRET_KEY_LENGTH
                ))
            })?;
        Ok(KeyPair {
            public_key,
            secret_key,
        })
    }
}

impl From<&KeyPair> for StoredWallet {
    fn from(wallet: &KeyPair) -> Self {
        StoredWallet {
            public_key_hex: wallet.public_key_hex(),
            secret_key_hex: wallet.secret_key_hex(),
        }
    }
}

/// Session record written by the login path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAuth {
    pub address: String,
    pub public_key: String,
    pub created_at: i64,
}
