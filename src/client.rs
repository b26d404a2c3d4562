use crate::domain::model::{FlowerMeasurements, Species};
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::validate_url;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PredictBody {
    predicted_flower: usize,
}

/// `/predict` 端點的 HTTP 客戶端
#[derive(Debug, Clone)]
pub struct PredictClient {
    base_url: String,
    client: Client,
}

impl PredictClient {
    pub fn new(base_url: &str) -> Result<Self> {
        validate_url("api_url", base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    pub async fn predict(&self, measurements: &FlowerMeasurements) -> Result<Species> {
        let endpoint = self.endpoint();
        tracing::debug!("Making API request to: {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .json(measurements)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("API response status: {}", response.status());
        let body: PredictBody = response.json().await?;

        Species::from_index(body.predicted_flower).ok_or_else(|| ApiError::ModelError {
            message: format!("unknown flower class {}", body.predicted_flower),
        })
    }
}
