//! Configuration file and secret loading.
//!
//! Server settings come from an optional `config.toml`; every field has
//! a default, so a missing file yields the default configuration.
//! Secrets come from the environment only and are wrapped in
//! [`SecretString`] the moment they are read, so they never appear in
//! Debug output or logs.

use std::path::Path;

use secrecy::SecretString;
use thiserror::Error;

use polyskill_types::config::ServerConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing required environment variable: {0}")]
    MissingSecret(&'static str),
}

/// Load server settings from `path`. A missing file is not an error;
/// it yields the defaults.
pub fn load_server_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    if !path.exists() {
        return Ok(ServerConfig::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// API credentials for the collaborator services, loaded from the
/// environment at startup. The skill id is an identifier, not a
/// credential, so it stays a plain `String`.
pub struct Secrets {
    /// VirusTotal API key (`API_KEY`).
    pub virustotal_api_key: SecretString,
    /// MyMemory RapidAPI key (`TRANSLATOR_TOKEN`).
    pub translator_token: SecretString,
    /// Yandex geocoder API key (`GEOCODER_API_KEY`).
    pub geocoder_api_key: SecretString,
    /// Yandex weather API key (`WEATHER_API_KEY`).
    pub weather_api_key: SecretString,
    /// Yandex Dialogs skill id (`SKILL_ID`).
    pub skill_id: String,
    /// Yandex Dialogs OAuth token (`ACCESS_TOKEN`).
    pub dialogs_token: SecretString,
}

impl Secrets {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            virustotal_api_key: secret_var("API_KEY")?,
            translator_token: secret_var("TRANSLATOR_TOKEN")?,
            geocoder_api_key: secret_var("GEOCODER_API_KEY")?,
            weather_api_key: secret_var("WEATHER_API_KEY")?,
            skill_id: plain_var("SKILL_ID")?,
            dialogs_token: secret_var("ACCESS_TOKEN")?,
        })
    }
}

fn plain_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingSecret(name))
}

fn secret_var(name: &'static str) -> Result<SecretString, ConfigError> {
    plain_var(name).map(SecretString::from)
}
