use super::toml_config::TomlConfig;
use super::ServerConfig;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "patient-api")]
#[command(about = "Patient lookup API with an iris flower classifier")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address to listen on, e.g. 127.0.0.1:8000
    #[arg(long)]
    pub bind: Option<String>,

    /// Patients JSON document
    #[arg(long)]
    pub data_path: Option<String>,

    /// Iris model coefficients (JSON); /predict is disabled without it
    #[arg(long)]
    pub model_path: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 載入 TOML (若有指定) 後以命令列參數覆蓋
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_toml(&TomlConfig::from_file(path)?),
            None => ServerConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.bind_address = bind.clone();
        }
        if let Some(data_path) = &self.data_path {
            config.data_path = data_path.clone();
        }
        if let Some(model_path) = &self.model_path {
            config.model_path = Some(model_path.clone());
        }
        if self.verbose {
            config.verbose = true;
        }
        if self.json_logs {
            config.log_format = "json".to_string();
        }

        Ok(config)
    }
}
