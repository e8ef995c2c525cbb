//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Everything has a development default; nothing is required.

use std::env;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port to listen on.
    pub port: u16,

    /// Bind address (default: 127.0.0.1).
    pub bind_addr: String,

    /// Admin username for the Basic credential check.
    pub admin_user: String,

    /// Admin password for the Basic credential check.
    ///
    /// This is a demo: a hardcoded default, no hashing, no user store.
    pub admin_password: String,

    /// Every Nth checkout mints a discount code.
    pub discount_interval: u64,

    /// Discount rate in basis points (1000 = 10%).
    pub discount_rate_bps: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ServerConfig {
            port: env::var("SHOPLITE_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SHOPLITE_PORT".to_string()))?,

            bind_addr: env::var("SHOPLITE_BIND").unwrap_or_else(|_| "127.0.0.1".to_string()),

            admin_user: env::var("SHOPLITE_ADMIN_USER").unwrap_or_else(|_| "admin".to_string()),

            admin_password: env::var("SHOPLITE_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "password".to_string()),

            discount_interval: env::var("SHOPLITE_DISCOUNT_INTERVAL")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SHOPLITE_DISCOUNT_INTERVAL".to_string()))?,

            discount_rate_bps: env::var("SHOPLITE_DISCOUNT_RATE_BPS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SHOPLITE_DISCOUNT_RATE_BPS".to_string()))?,
        };

        if config.discount_interval == 0 {
            return Err(ConfigError::InvalidValue(
                "SHOPLITE_DISCOUNT_INTERVAL".to_string(),
            ));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for ServerConfig {
    /// Development defaults: localhost:8080, admin/password, every 3rd
    /// order mints a 10% code.
    fn default() -> Self {
        ServerConfig {
            port: 8080,
            bind_addr: "127.0.0.1".to_string(),
            admin_user: "admin".to_string(),
            admin_password: "password".to_string(),
            discount_interval: 3,
            discount_rate_bps: 1000,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
