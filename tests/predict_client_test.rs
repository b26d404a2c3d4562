use anyhow::Result;
use httpmock::prelude::*;
use patient_api::core::{FlowerMeasurements, Species};
use patient_api::server::{self, AppState};
use patient_api::{ApiError, InMemorySource, IrisModel, PredictClient};
use std::sync::Arc;

fn versicolor() -> FlowerMeasurements {
    FlowerMeasurements {
        sepal_length: 5.9,
        sepal_width: 3.0,
        petal_length: 4.2,
        petal_width: 1.5,
    }
}

#[tokio::test]
async fn test_client_maps_class_index_to_species() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/predict")
            .json_body(serde_json::json!({
                "sepal_length": 5.9,
                "sepal_width": 3.0,
                "petal_length": 4.2,
                "petal_width": 1.5
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"predicted_flower": 1}));
    });

    let client = PredictClient::new(&server.base_url())?;
    let species = client.predict(&versicolor()).await?;

    api_mock.assert();
    assert_eq!(species, Species::Versicolor);
    Ok(())
}

#[tokio::test]
async fn test_client_rejects_unknown_class() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200)
            .json_body(serde_json::json!({"predicted_flower": 7}));
    });

    let client = PredictClient::new(&server.base_url())?;
    let err = client.predict(&versicolor()).await.unwrap_err();
    assert!(matches!(err, ApiError::ModelError { .. }));
    Ok(())
}

#[tokio::test]
async fn test_client_surfaces_server_errors() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(503)
            .json_body(serde_json::json!({"detail": "No prediction model loaded"}));
    });

    let client = PredictClient::new(&format!("{}/", server.base_url()))?;
    let err = client.predict(&versicolor()).await.unwrap_err();

    api_mock.assert();
    assert!(matches!(err, ApiError::HttpClientError(_)));
    Ok(())
}

#[test]
fn test_client_validates_url() {
    assert!(PredictClient::new("ftp://example.com").is_err());
    assert!(PredictClient::new("").is_err());
    let client = PredictClient::new("http://127.0.0.1:8000/").unwrap();
    assert_eq!(client.endpoint(), "http://127.0.0.1:8000/predict");
}

#[tokio::test]
async fn test_client_against_real_server() -> Result<()> {
    let model_path = format!("{}/data/iris_model.json", env!("CARGO_MANIFEST_DIR"));
    let model = IrisModel::from_file(model_path)?;
    let state = AppState::new(Arc::new(InMemorySource::default()), Some(model));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let base = format!("http://{}", listener.local_addr()?);
    tokio::spawn(server::serve(listener, state));

    let client = PredictClient::new(&base)?;
    assert_eq!(client.predict(&versicolor()).await?, Species::Versicolor);

    let setosa = FlowerMeasurements {
        sepal_length: 5.1,
        sepal_width: 3.5,
        petal_length: 1.4,
        petal_width: 0.2,
    };
    assert_eq!(client.predict(&setosa).await?, Species::Setosa);
    Ok(())
}
