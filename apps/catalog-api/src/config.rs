//! Configuration for the Catalog API

use core_config::{
    database::DatabaseConfig, secret::SecretConfig, server::ServerConfig, FromEnv,
};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub secret: SecretConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            secret: SecretConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}
