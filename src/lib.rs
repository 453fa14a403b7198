//! Wallet key-material management: Ed25519 keypair derivation, hex
//! encoding, detached signing, and record persistence over an injected
//! key/value store.

pub mod config;
pub mod models;
pub mod services;
pub mod traits;
pub mod utils;

pub use config::WalletConfig;
pub use models::{KeyMaterial, KeyPair, StoredWallet, WalletAuth, WalletError};
pub use services::wallet_service::{derive, derive_from_bytes, import, sign, verify};
pub use services::{MemoryStore, WalletStore};
pub use traits::{KeyValueStore, StoreError};
