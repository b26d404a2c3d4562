use crate::core::store::parse_snapshot;
use crate::domain::model::Snapshot;
use crate::domain::ports::PatientSource;
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// 從 JSON 檔案讀取病患資料 (每次 load 都重新讀檔)
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PatientSource for JsonFileSource {
    async fn load(&self) -> Result<Snapshot> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ApiError::SourceUnavailable {
                path: self.path.display().to_string(),
                source: e,
            })?;
        parse_snapshot(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed snapshot held in memory, handed out as a fresh copy on every load.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    snapshot: Snapshot,
}

impl InMemorySource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        crate::core::store::snapshot_from_value(value).map(Self::new)
    }
}

#[async_trait]
impl PatientSource for InMemorySource {
    async fn load(&self) -> Result<Snapshot> {
        Ok(self.snapshot.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.snapshot.len())
    }
}
