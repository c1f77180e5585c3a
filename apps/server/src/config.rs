//! Server configuration from environment variables.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::RngCore;
use rust_decimal::Decimal;
use std::str::FromStr;

use investfolio_core::constants::DEFAULT_THB_PER_USD;

/// Runtime configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    /// Address the HTTP listener binds to (`IV_LISTEN_ADDR`).
    pub listen_addr: String,
    /// SQLite database file (`IV_DB_PATH`).
    pub db_path: String,
    /// Argon2 hash of the access password (`IV_AUTH_PASSWORD_HASH`).
    /// When unset the API runs open.
    pub password_hash: Option<String>,
    /// JWT signing key (`IV_SECRET_KEY`, base64). A random per-boot
    /// key is generated when unset, which invalidates tokens across
    /// restarts.
    pub secret_key: Vec<u8>,
    /// Fixed THB per USD conversion rate (`IV_THB_PER_USD`).
    pub thb_per_usd: Decimal,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr =
            std::env::var("IV_LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8425".to_string());
        let db_path =
            std::env::var("IV_DB_PATH").unwrap_or_else(|_| "data/investfolio.db".to_string());

        let password_hash = std::env::var("IV_AUTH_PASSWORD_HASH")
            .ok()
            .filter(|h| !h.trim().is_empty());

        let secret_key = std::env::var("IV_SECRET_KEY")
            .ok()
            .and_then(|raw| match BASE64.decode(raw.trim()) {
                Ok(bytes) if !bytes.is_empty() => Some(bytes),
                _ => {
                    tracing::warn!("IV_SECRET_KEY is not valid base64; generating a random key");
                    None
                }
            })
            .unwrap_or_else(|| {
                let mut bytes = [0u8; 32];
                rand::rngs::OsRng.fill_bytes(&mut bytes);
                bytes.to_vec()
            });

        let thb_per_usd = std::env::var("IV_THB_PER_USD")
            .ok()
            .and_then(|raw| match Decimal::from_str(raw.trim()) {
                Ok(rate) => Some(rate),
                Err(_) => {
                    tracing::warn!("IV_THB_PER_USD is not a valid decimal; using the default");
                    None
                }
            })
            .unwrap_or(DEFAULT_THB_PER_USD);

        Self {
            listen_addr,
            db_path,
            password_hash,
            secret_key,
            thb_per_usd,
        }
    }
}
