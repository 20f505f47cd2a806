//! Server configuration.
//!
//! Configuration is loaded once at startup from environment variables
//! (`dotenv` is applied in `main` before this runs). Most settings have
//! development defaults; the token signing secret does not. A missing or
//! too-short `JWT_SECRET` is a fatal startup condition: a process that
//! cannot sign tokens must not come up half-working.

use thiserror::Error;

/// Minimum length of the signing secret in bytes. HS256 keys shorter than
/// the hash output are trivially cheaper to brute force.
pub const MIN_SECRET_LEN: usize = 32;

/// Default bcrypt work factor, matching the stored hashes this service
/// has always produced.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Fatal configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET is not set; refusing to start without a signing secret")]
    MissingSecret,

    #[error("JWT_SECRET must be at least {MIN_SECRET_LEN} bytes, got {0}")]
    SecretTooShort(usize),

    #[error("invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Runtime configuration, resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string.
    pub database_url: String,
    /// Symmetric secret for token signing. Read once here, injected into
    /// the signer, never consulted from ambient scope again.
    pub jwt_secret: String,
    /// bcrypt work factor for new password hashes.
    pub bcrypt_cost: u32,
    /// Port the HTTP server binds.
    pub port: u16,
    /// Directory of static front-end assets.
    pub public_dir: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when `JWT_SECRET` is absent or shorter than
    /// [`MIN_SECRET_LEN`] bytes, or when a numeric variable fails to parse.
    /// All of these abort startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingSecret)?;
        if jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort(jwt_secret.len()));
        }

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:ideabox.db?mode=rwc".to_string());

        let bcrypt_cost = match std::env::var("BCRYPT_COST") {
            Ok(raw) => raw.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: raw,
            })?,
            Err(_) => DEFAULT_BCRYPT_COST,
        };

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value: raw,
            })?,
            Err(_) => 3000,
        };

        let public_dir = std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            bcrypt_cost,
            port,
            public_dir,
        })
    }
}
