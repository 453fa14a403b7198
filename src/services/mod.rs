mod storage;
pub mod wallet_service;

pub use storage::{MemoryStore, WalletStore, SESSION_STORAGE_KEY, WALLET_STORAGE_KEY};
