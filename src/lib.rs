pub mod adapters;
pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{InMemorySource, JsonFileSource};
pub use client::PredictClient;
pub use config::ServerConfig;
pub use core::classifier::IrisModel;
pub use server::AppState;
pub use utils::error::{ApiError, Result};
