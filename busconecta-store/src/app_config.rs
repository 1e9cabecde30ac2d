use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub payment: PaymentConfig,
    pub account: AccountRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Path of the on-device JSON store file.
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentConfig {
    #[serde(default = "default_payment_delay")]
    pub delay_seconds: u64,
}

fn default_payment_delay() -> u64 {
    3
}

#[derive(Debug, Deserialize, Clone)]
pub struct AccountRules {
    pub min_password_length: usize,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of BUSCONECTA)
            .add_source(config::Environment::with_prefix("BUSCONECTA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
