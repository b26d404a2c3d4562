#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, validate_socket_addr, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_DATA_PATH: &str = "patients.json";
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

/// 合併 TOML 與命令列後的最終伺服器設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub data_path: String,
    pub model_path: Option<String>,
    pub verbose: bool,
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            data_path: DEFAULT_DATA_PATH.to_string(),
            model_path: None,
            verbose: false,
            log_format: "compact".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            bind_address: file
                .bind_address()
                .map(str::to_string)
                .unwrap_or(defaults.bind_address),
            data_path: file
                .data_path()
                .map(str::to_string)
                .unwrap_or(defaults.data_path),
            model_path: file.model_path().map(str::to_string),
            verbose: file.verbose(),
            log_format: file
                .log_format()
                .map(str::to_string)
                .unwrap_or(defaults.log_format),
        }
    }
}

impl ConfigProvider for ServerConfig {
    fn bind_address(&self) -> &str {
        &self.bind_address
    }

    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn model_path(&self) -> Option<&str> {
        self.model_path.as_deref()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("server.bind", &self.bind_address)?;
        validate_path("data.path", &self.data_path)?;
        if let Some(model_path) = &self.model_path {
            validate_path("model.path", model_path)?;
        }
        validate_one_of("logging.format", &self.log_format, &LOG_FORMATS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
        assert!(!config.json_logs());
    }

    #[test]
    fn test_from_toml_fills_missing_values_with_defaults() {
        let file = TomlConfig::from_toml_str("[model]\npath = \"iris.json\"\n").unwrap();
        let config = ServerConfig::from_toml(&file);
        assert_eq!(config.data_path, DEFAULT_DATA_PATH);
        assert_eq!(config.model_path(), Some("iris.json"));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = ServerConfig {
            bind_address: "not-an-address".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            data_path: String::new(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            log_format: "xml".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
