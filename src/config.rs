use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Credentials and coordinates for the Amplify Central platform API.
/// Loaded once at startup and read-only for the lifetime of the run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub org_id: String,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("acutils")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".acutils")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the config file, then apply `ACUTILS_*`
    /// environment variable overrides (a `.env` file is honored too).
    /// A missing file is not an error; incomplete credentials surface later
    /// as an authentication failure.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = Self::get_config_path()?;
        debug!("Loading config from: {:?}", config_path);

        let mut config = if config_path.exists() {
            let config_content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            toml::from_str(&config_content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?
        } else {
            info!("Config file doesn't exist, starting from defaults");
            Self::default()
        };

        if let Ok(value) = std::env::var("ACUTILS_CLIENT_ID") {
            config.client_id = value;
        }
        if let Ok(value) = std::env::var("ACUTILS_CLIENT_SECRET") {
            config.client_secret = value;
        }
        if let Ok(value) = std::env::var("ACUTILS_BASE_URL") {
            config.base_url = value;
        }
        if let Ok(value) = std::env::var("ACUTILS_ORG_ID") {
            config.org_id = value;
        }

        Ok(config)
    }

    /// All four fields are required before any token exchange is attempted.
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty()
            && !self.client_secret.is_empty()
            && !self.base_url.is_empty()
            && !self.org_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_incomplete() {
        assert!(!Config::default().is_complete());
    }

    #[test]
    fn config_with_all_fields_is_complete() {
        let config = Config {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            base_url: "https://central.example".to_string(),
            org_id: "123456".to_string(),
        };
        assert!(config.is_complete());
    }

    #[test]
    fn empty_field_makes_config_incomplete() {
        let config = Config {
            client_id: "id".to_string(),
            client_secret: String::new(),
            base_url: "https://central.example".to_string(),
            org_id: "123456".to_string(),
        };
        assert!(!config.is_complete());
    }

    #[test]
    fn config_parses_from_toml() {
        let config: Config = toml::from_str(
            r#"
            client_id = "id"
            client_secret = "secret"
            base_url = "https://central.example"
            org_id = "123456"
            "#,
        )
        .unwrap();
        assert_eq!(config.client_id, "id");
        assert_eq!(config.base_url, "https://central.example");
        assert!(config.is_complete());
    }
}
