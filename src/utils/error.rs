use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Patient data source unavailable ({path}): {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed patient data: {message}")]
    MalformedData { message: String },

    #[error("Patient not found: {id}")]
    NotFound { id: String },

    #[error("Invalid field '{value}', select from [{valid}]")]
    InvalidField { value: String, valid: String },

    #[error("Invalid order '{value}', select between [{valid}]")]
    InvalidDirection { value: String, valid: String },

    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Model error: {message}")]
    ModelError { message: String },

    #[error("No prediction model loaded")]
    ModelUnavailable,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    DataSource,
    Request,
    Model,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ApiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::SourceUnavailable { .. } | ApiError::MalformedData { .. } => {
                ErrorCategory::DataSource
            }
            ApiError::NotFound { .. }
            | ApiError::InvalidField { .. }
            | ApiError::InvalidDirection { .. }
            | ApiError::InvalidInput { .. } => ErrorCategory::Request,
            ApiError::ModelError { .. } | ApiError::ModelUnavailable => ErrorCategory::Model,
            ApiError::ConfigError { .. } | ApiError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ApiError::IoError(_) | ApiError::HttpClientError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::DataSource | ErrorCategory::Model => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 是否為呼叫端造成的錯誤 (對應 4xx)
    pub fn is_client_error(&self) -> bool {
        self.category() == ErrorCategory::Request
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ApiError::SourceUnavailable { path, .. } => {
                format!("Check that '{}' exists and is readable", path)
            }
            ApiError::MalformedData { .. } => {
                "Make sure the data file is a JSON object mapping patient ids to objects".to_string()
            }
            ApiError::NotFound { .. } => "Use /view to list the known patient ids".to_string(),
            ApiError::InvalidField { valid, .. } => format!("Use one of: {}", valid),
            ApiError::InvalidDirection { valid, .. } => format!("Use one of: {}", valid),
            ApiError::InvalidInput { field, .. } => format!("Correct the value of '{}'", field),
            ApiError::ModelError { .. } => {
                "Regenerate the model file with classes, coefficients and intercepts".to_string()
            }
            ApiError::ModelUnavailable => "Start the server with --model-path".to_string(),
            ApiError::ConfigError { .. } | ApiError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML configuration file".to_string()
            }
            ApiError::IoError(_) => "Check file permissions and available disk space".to_string(),
            ApiError::HttpClientError(_) => {
                "Make sure the API server is running and reachable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::DataSource => format!("Patient data could not be loaded: {}", self),
            ErrorCategory::Request => self.to_string(),
            ErrorCategory::Model => format!("Prediction is not available: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("Unexpected system error: {}", self),
        }
    }

    /// HTTP 狀態碼對應
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidField { .. }
            | ApiError::InvalidDirection { .. }
            | ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::SourceUnavailable { .. } | ApiError::ModelUnavailable => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::HttpClientError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
