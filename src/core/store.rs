use crate::domain::model::{Record, Snapshot};
use crate::domain::ports::PatientSource;
use crate::utils::error::{ApiError, Result};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// 病患資料存取：從來源載入快照並提供以 id 查詢
#[derive(Clone)]
pub struct RecordStore {
    source: Arc<dyn PatientSource>,
}

impl RecordStore {
    pub fn new(source: Arc<dyn PatientSource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &dyn PatientSource {
        self.source.as_ref()
    }

    pub async fn load(&self) -> Result<Snapshot> {
        let started = Instant::now();
        let snapshot = self.source.load().await.inspect_err(|e| {
            tracing::warn!("⚠️ Failed to load snapshot from {}: {}", self.source.describe(), e);
        })?;
        tracing::debug!(
            "Loaded {} records from {} in {:?}",
            snapshot.len(),
            self.source.describe(),
            started.elapsed()
        );
        Ok(snapshot)
    }
}

/// 精確比對 id；找不到時回傳 `NotFound`
pub fn get<'a>(snapshot: &'a Snapshot, id: &str) -> Result<&'a Record> {
    snapshot.get(id).ok_or_else(|| ApiError::NotFound { id: id.to_string() })
}

pub fn parse_snapshot(bytes: &[u8]) -> Result<Snapshot> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| ApiError::MalformedData {
        message: format!("invalid JSON: {}", e),
    })?;
    snapshot_from_value(value)
}

/// Builds a snapshot from a JSON document of the form `{ "<id>": { ... }, ... }`.
///
/// Every entry must be an object; one bad entry fails the whole document.
pub fn snapshot_from_value(value: Value) -> Result<Snapshot> {
    let entries = match value {
        Value::Object(entries) => entries,
        other => {
            return Err(ApiError::MalformedData {
                message: format!(
                    "expected a JSON object keyed by patient id, found {}",
                    json_type_name(&other)
                ),
            })
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (id, entry) in entries {
        match entry {
            Value::Object(fields) => records.push(Record::new(id, fields)),
            other => {
                return Err(ApiError::MalformedData {
                    message: format!(
                        "record '{}' must be an object, found {}",
                        id,
                        json_type_name(&other)
                    ),
                })
            }
        }
    }

    Ok(Snapshot::from_records(records))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
