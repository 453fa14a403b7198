mod error;
mod key;

pub use error::WalletError;
pub use key::{
    KeyMaterial, KeyPair, StoredWallet, WalletAuth, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH,
    SEED_LENGTH, SIGNATURE_LENGTH,
};
