use std::{env, fs, path::Path};

use log::{debug, info};

use crate::models::{KeyPair, StoredWallet, WalletError};
use crate::services::wallet_service;

pub const WALLET_SECRET_KEY_ENV: &str = "WALLET_SECRET_KEY";
pub const WALLET_KEYPAIR_FILE: &str = "wallet_keypair.json";

pub struct WalletConfig {
    pub wallet: KeyPair,
    pub address: String,
}

impl WalletConfig {
    pub fn load() -> Result<Self, WalletError> {
        let wallet = load_wallet(WALLET_SECRET_KEY_ENV, WALLET_KEYPAIR_FILE)?;
        let address = wallet.address();
        Ok(WalletConfig { wallet, address })
    }
}

fn load_wallet(env_var_name: &str, json_file_path: &str) -> Result<KeyPair, WalletError> {
    // First try to load from environment variable
    if let Ok(secret_hex) = env::var(env_var_name) {
        info!("Loading wallet from environment variable {}", env_var_name);
        let wallet = wallet_service::import(&secret_hex)?;
        info!("Successfully loaded wallet with address: {}", wallet.address());
        return Ok(wallet);
    }

    // Fall back to JSON file
    info!(
        "Environment variable {} not found, falling back to JSON file: {}",
        env_var_name, json_file_path
    );
    load_wallet_from_json(json_file_path)
}

pub fn load_wallet_from_json(json_file_path: &str) -> Result<KeyPair, WalletError> {
    let path = Path::new(json_file_path);

    if !path.exists() {
        return Err(WalletError::StorageUnavailable(format!(
            "keypair file not found: {}",
            json_file_path
        )));
    }

    debug!("Reading wallet record from JSON file: {}", json_file_path);
    let raw = fs::read_to_string(path).map_err(|e| {
        WalletError::StorageUnavailable(format!("failed to read {}: {}", json_file_path, e))
    })?;
    let record: StoredWallet = serde_json::from_str(&raw).map_err(|e| {
        WalletError::StorageCorrupted(format!("invalid keypair file {}: {}", json_file_path, e))
    })?;
    let wallet = record.to_keypair()?;

    info!(
        "Successfully loaded wallet from {} with address: {}",
        json_file_path,
        wallet.address()
    );
    Ok(wallet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KeyMaterial, SEED_LENGTH};
    use crate::utils::encoding::encode_hex;

    #[test]
    fn load_wallet_prefers_environment_variable() {
        let seed = [5u8; SEED_LENGTH];
        env::set_var("LUMINA_WALLET_TEST_SECRET", encode_hex(&seed));
        let wallet = load_wallet("LUMINA_WALLET_TEST_SECRET", "missing.json").unwrap();
        env::remove_var("LUMINA_WALLET_TEST_SECRET");

        let expected = wallet_service::derive_from_bytes(Some(&seed)).unwrap();
        assert_eq!(wallet, expected);
    }

    #[test]
    fn load_wallet_from_json_round_trips() {
        let wallet = wallet_service::derive(KeyMaterial::Fresh);
        let record = StoredWallet::from(&wallet);
        let path = env::temp_dir().join(format!("wallet_keypair_test_{}.json", std::process::id()));
        fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

        let loaded = load_wallet_from_json(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, wallet);
    }

    #[test]
    fn load_wallet_from_json_missing_file() {
        assert!(matches!(
            load_wallet_from_json("no_such_keypair.json"),
            Err(WalletError::StorageUnavailable(_))
        ));
    }

    #[test]
    fn load_wallet_from_json_rejects_garbage() {
        let path = env::temp_dir().join(format!(
            "wallet_keypair_garbage_{}.json",
            std::process::id()
        ));
        fs::write(&path, "not a wallet record").unwrap();

        let result = load_wallet_from_json(path.to_str().unwrap());
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(WalletError::StorageCorrupted(_))));
    }
}
