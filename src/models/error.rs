use std::fmt;

use crate::traits::StoreError;

#[derive(Debug)]
pub enum WalletError {
    InvalidKeyMaterial(String),
    InvalidEncoding(String),
    StorageUnavailable(String),
    StorageCorrupted(String),
    WalletNotConnected,
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WalletError::InvalidKeyMaterial(msg) => write!(f, "Invalid key material: {}", msg),
            WalletError::InvalidEncoding(msg) => write!(f, "Invalid hex encoding: {}", msg),
            WalletError::StorageUnavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            WalletError::StorageCorrupted(msg) => write!(f, "Stored wallet corrupted: {}", msg),
            WalletError::WalletNotConnected => write!(f, "Wallet not connected"),
        }
    }
}

impl std::error::Error for WalletError {}

impl From<hex::FromHexError> for WalletError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::OddLength => {
                WalletError::InvalidEncoding("odd length".to_string())
            }
            hex::FromHexError::InvalidHexCharacter { .. } => {
                WalletError::InvalidEncoding("invalid character".to_string())
            }
            hex::FromHexError::InvalidStringLength => {
                WalletError::InvalidEncoding("invalid length".to_string())
            }
        }
    }
}

impl From<StoreError> for WalletError {
    fn from(err: StoreError) -> Self {
        WalletError::StorageUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::StorageCorrupted(err.to_string())
    }
}
