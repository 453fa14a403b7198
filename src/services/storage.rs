use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use log::{debug, warn};

use crate::models::{KeyPair, StoredWallet, WalletAuth, WalletError};
use crate::traits::{KeyValueStore, StoreError};

pub const WALLET_STORAGE_KEY: &str = "lumina_wallet_v1";
pub const SESSION_STORAGE_KEY: &str = "lumina_wallet_session_v1";

/// In-memory key/value store for tests and contexts without a real
/// persistence backend.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Persistence and session adapter over an injected key/value store.
///
/// Storage failures never fail the wallet operations themselves: writes
/// degrade to no-ops and reads to `None`, matching environments where no
/// backend exists at all.
pub struct WalletStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> WalletStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist the wallet as a hex record under the wallet storage key.
    pub fn store_wallet(&self, wallet: &KeyPair) {
        let record = StoredWallet::from(wallet);
        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize wallet record: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.put(WALLET_STORAGE_KEY, &json) {
            debug!("Skipping wallet persistence: {}", e);
        }
    }

    /// Load the persisted wallet, or `None` when there is no record, the
    /// backend is unavailable, or the record cannot be parsed.
    pub fn load_wallet(&self) -> Option<KeyPair> {
        let raw = match self.store.get(WALLET_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                debug!("Wallet storage unavailable: {}", e);
                return None;
            }
        };
        match parse_stored_wallet(&raw) {
            Ok(wallet) => Some(wallet),
            Err(e) => {
                warn!("Discarding unreadable wallet record: {}", e);
                None
            }
        }
    }

    pub fn clear_wallet(&self) {
        if let Err(e) = self.store.remove(WALLET_STORAGE_KEY) {
            debug!("Skipping wallet removal: {}", e);
        }
    }

    /// Create a session for the wallet and persist it. The session value is
    /// returned even when persistence is unavailable.
    pub fn login(&self, wallet: &KeyPair) -> WalletAuth {
        let auth = WalletAuth {
            address: wallet.address(),
            public_key: wallet.public_key_hex(),
            created_at: Utc::now().timestamp_millis(),
        };
        match serde_json::to_string(&auth) {
            Ok(json) => {
                if let Err(e) = self.store.put(SESSION_STORAGE_KEY, &json) {
                    debug!("Skipping session persistence: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize session record: {}", e),
        }
        auth
    }

    pub fn session(&self) -> Option<WalletAuth> {
        let raw = match self.store.get(SESSION_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                debug!("Session storage unavailable: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(auth) => Some(auth),
            Err(e) => {
                warn!("Discarding unreadable session record: {}", e);
                None
            }
        }
    }

    pub fn require_session(&self) -> Result<WalletAuth, WalletError> {
        self.session().ok_or(WalletError::WalletNotConnected)
    }

    /// Remove both the session and the wallet record.
    pub fn logout(&self) {
        if let Err(e) = self.store.remove(SESSION_STORAGE_KEY) {
            debug!("Skipping session removal: {}", e);
        }
        self.clear_wallet();
    }
}

fn parse_stored_wallet(raw: &str) -> Result<KeyPair, WalletError> {
    let record: StoredWallet = serde_json::from_str(raw)?;
    record.to_keypair()
}
