mod handlers;
mod router;
mod state;

pub use handlers::PredictResponse;
pub use router::create_router;
pub use state::AppState;

use std::sync::Arc;

use crate::adapters::JsonFileSource;
use crate::core::classifier::IrisModel;
use crate::core::ConfigProvider;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::validate_socket_addr;

/// 由設定建立伺服器狀態 (資料來源與模型都在此明確注入)
pub fn build_state<C: ConfigProvider>(config: &C) -> Result<AppState> {
    let source = Arc::new(JsonFileSource::new(config.data_path()));

    let model = match config.model_path() {
        Some(path) => {
            let model = IrisModel::from_file(path)?;
            tracing::info!("🌸 Loaded iris model with {} classes from {}", model.class_count(), path);
            Some(model)
        }
        None => {
            tracing::warn!("⚠️ No model path configured, /predict will return 503");
            None
        }
    };

    Ok(AppState::new(source, model))
}

/// Serve the API on an already bound listener until the task is dropped.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    let router = create_router(state);
    axum::serve(listener, router).await.map_err(ApiError::IoError)
}

/// Run the HTTP server
pub async fn run<C: ConfigProvider>(config: &C) -> Result<()> {
    let addr = validate_socket_addr("server.bind", config.bind_address())?;
    let state = build_state(config)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 Patient API listening on http://{}", listener.local_addr()?);
    tracing::info!("📁 Serving patients from {}", state.store().source().describe());

    serve(listener, state).await
}
