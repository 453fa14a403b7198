use dotenv::dotenv;
use log::info;
use std::env;

use lumina_wallet::models::{KeyMaterial, StoredWallet};
use lumina_wallet::services::wallet_service;

fn main() {
    dotenv().ok();
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(log_level));

    let wallet = wallet_service::derive(KeyMaterial::Fresh);
    info!("Generated wallet with address: {}", wallet.address());

    println!("Wallet address: {}", wallet.address());
    println!("Public key: {}", wallet.public_key_hex());

    // Print in the format expected by load_wallet_from_json
    println!("\nFor JSON files:");
    println!(
        "{}",
        serde_json::to_string_pretty(&StoredWallet::from(&wallet))
            .expect("wallet record is serializable")
    );
}
