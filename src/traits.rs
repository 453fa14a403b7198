use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No persistence backend: {0}")]
    Unavailable(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Key/value storage boundary for wallet and session records.
///
/// Implementations are injected into `WalletStore` so the wallet logic never
/// touches a concrete backend directly.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
