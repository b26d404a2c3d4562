use crate::domain::model::FlowerMeasurements;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{validate_exclusive_range, validate_finite, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const FEATURE_COUNT: usize = 4;

/// 多項式邏輯迴歸模型 (已訓練好的係數)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrisModel {
    pub classes: Vec<String>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl IrisModel {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ApiError::ModelError {
            message: format!("cannot read model file '{}': {}", path.display(), e),
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let model: IrisModel = serde_json::from_str(content).map_err(|e| ApiError::ModelError {
            message: format!("model file is not valid JSON: {}", e),
        })?;
        model.check_shape()?;
        Ok(model)
    }

    fn check_shape(&self) -> Result<()> {
        if self.classes.len() < 2 {
            return Err(ApiError::ModelError {
                message: format!("expected at least 2 classes, found {}", self.classes.len()),
            });
        }
        if self.coefficients.len() != self.classes.len() {
            return Err(ApiError::ModelError {
                message: format!(
                    "expected {} coefficient rows, found {}",
                    self.classes.len(),
                    self.coefficients.len()
                ),
            });
        }
        if self.intercepts.len() != self.classes.len() {
            return Err(ApiError::ModelError {
                message: format!(
                    "expected {} intercepts, found {}",
                    self.classes.len(),
                    self.intercepts.len()
                ),
            });
        }
        if let Some((row, coef)) = self
            .coefficients
            .iter()
            .enumerate()
            .find(|(_, coef)| coef.len() != FEATURE_COUNT)
        {
            return Err(ApiError::ModelError {
                message: format!(
                    "coefficient row {} has {} weights, expected {}",
                    row,
                    coef.len(),
                    FEATURE_COUNT
                ),
            });
        }
        Ok(())
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Linear score per class: `coef · x + intercept`.
    pub fn decision_function(&self, input: &FlowerMeasurements) -> Vec<f64> {
        let features = input.as_features();
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(coef, intercept)| {
                coef.iter()
                    .zip(features.iter())
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + intercept
            })
            .collect()
    }

    /// Softmax over the decision function.
    pub fn probabilities(&self, input: &FlowerMeasurements) -> Vec<f64> {
        let scores = self.decision_function(input);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let total: f64 = exps.iter().sum();
        exps.into_iter().map(|e| e / total).collect()
    }

    /// 回傳預測類別索引 (與 softmax 機率最大者相同)
    pub fn predict(&self, input: &FlowerMeasurements) -> Result<usize> {
        input.validate()?;
        let scores = self.decision_function(input);
        let (best, _) = scores
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(best, best_score), (idx, &score)| {
                if score > best_score {
                    (idx, score)
                } else {
                    (best, best_score)
                }
            });
        tracing::debug!("Prediction scores {:?} -> class {}", scores, best);
        Ok(best)
    }

    pub fn class_name(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }
}

impl Validate for FlowerMeasurements {
    fn validate(&self) -> Result<()> {
        validate_finite("sepal_length", self.sepal_length)?;
        validate_finite("sepal_width", self.sepal_width)?;
        validate_finite("petal_length", self.petal_length)?;
        validate_exclusive_range("petal_width", self.petal_width, 0.0, 120.0)?;
        Ok(())
    }
}
