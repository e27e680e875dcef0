use crate::{env_or_default, ConfigError, FromEnv};

/// Application secret key configuration.
///
/// Used for session signing in the web UI. The development default is not
/// suitable for production; set SECRET_KEY in the environment there.
#[derive(Clone)]
pub struct SecretConfig {
    pub secret_key: String,
}

impl SecretConfig {
    pub fn new(secret_key: String) -> Self {
        Self { secret_key }
    }
}

// Manual Debug impl so the key never ends up in logs
impl std::fmt::Debug for SecretConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretConfig")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl FromEnv for SecretConfig {
    /// Reads SECRET_KEY with a development default
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret_key: env_or_default("SECRET_KEY", "dev-secret-key"),
        })
    }
}
