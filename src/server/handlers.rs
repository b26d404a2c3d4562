use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::query;
use crate::domain::model::{FlowerMeasurements, Record, Snapshot};
use crate::server::state::AppState;
use crate::utils::error::{ApiError, Result};

#[derive(Debug, Deserialize)]
pub struct SortParams {
    pub sort_by: Option<String>,
    #[serde(default = "default_order")]
    pub order: String,
}

fn default_order() -> String {
    "asc".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_flower: usize,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::debug!("Request rejected ({}): {}", status, self);
        } else {
            tracing::error!(
                "❌ Request failed ({}): {} (Category: {:?}, Severity: {:?})",
                status,
                self,
                self.category(),
                self.severity()
            );
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// GET / - Home
pub async fn home() -> Json<Value> {
    Json(json!({ "message": "Patients management system" }))
}

/// GET /about
pub async fn about() -> Json<Value> {
    Json(json!({ "message": "A fully functional API to manage patients" }))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// GET /view - Every patient, keyed by id
pub async fn view(State(state): State<AppState>) -> Result<Json<Snapshot>> {
    let snapshot = state.store().load().await?;
    Ok(Json(snapshot))
}

/// GET /patient/:patient_id - Single patient lookup
pub async fn view_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Record>> {
    let snapshot = state.store().load().await?;
    let record = query::by_id(&snapshot, &patient_id)?;
    Ok(Json(record.clone()))
}

/// GET /sort?sort_by=<field>&order=<asc|desc>
pub async fn sorted_patients(
    State(state): State<AppState>,
    Query(params): Query<SortParams>,
) -> Result<Json<Vec<Record>>> {
    // 先驗證參數再載入資料，無效請求不需要讀檔
    let (field, order) = query::parse_sort_params(params.sort_by.as_deref(), &params.order)?;
    let snapshot = state.store().load().await?;
    tracing::debug!("Sorting {} records by {} ({})", snapshot.len(), field, order);
    Ok(Json(query::sort_by(&snapshot, field, order)))
}

/// POST /predict - Iris species prediction
pub async fn predict(
    State(state): State<AppState>,
    Json(input): Json<FlowerMeasurements>,
) -> Result<Json<PredictResponse>> {
    let model = state.model().ok_or(ApiError::ModelUnavailable)?;
    let predicted_flower = model.predict(&input)?;
    tracing::info!(
        "🌸 Predicted class {} ({})",
        predicted_flower,
        model.class_name(predicted_flower).unwrap_or("unknown")
    );
    Ok(Json(PredictResponse { predicted_flower }))
}
