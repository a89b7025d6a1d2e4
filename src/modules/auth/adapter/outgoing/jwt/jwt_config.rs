use std::env;

use crate::shared::config::ConfigError;

pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 86_400;
const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub access_token_expiry: i64, // seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("JWT_SECRET").ok(),
            env::var("JWT_ACCESS_TOKEN_EXPIRY").ok(),
        )
    }

    fn from_values(secret: Option<String>, expiry: Option<String>) -> Result<Self, ConfigError> {
        let secret_key = secret.ok_or(ConfigError::Missing("JWT_SECRET"))?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                value: format!("{} characters, need {}", secret_key.len(), MIN_SECRET_LEN),
            });
        }

        let access_token_expiry = match expiry {
            None => DEFAULT_ACCESS_TOKEN_EXPIRY,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "JWT_ACCESS_TOKEN_EXPIRY",
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            secret_key,
            access_token_expiry,
        })
    }
}
