use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected response status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CartError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CartError::ApiError(_) | CartError::UnexpectedStatus { .. } => ErrorCategory::Network,
            CartError::IoError(_) | CartError::StorageError { .. } => ErrorCategory::Storage,
            CartError::SerializationError(_) => ErrorCategory::Data,
            CartError::UrlError(_)
            | CartError::ConfigError { .. }
            | CartError::InvalidConfigValueError { .. }
            | CartError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常可以重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self.category(), ErrorCategory::Network)
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CartError::ApiError(_) | CartError::UnexpectedStatus { .. } => {
                "Could not reach the product catalog".to_string()
            }
            CartError::IoError(_) | CartError::StorageError { .. } => {
                "Could not read or write the saved cart".to_string()
            }
            CartError::SerializationError(_) => "The saved cart is not valid JSON".to_string(),
            CartError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            CartError::ConfigValidationError { field, message } => {
                format!("Invalid setting {}: {}", field, message)
            }
            CartError::UrlError(e) => format!("Invalid URL: {}", e),
            CartError::ConfigError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the catalog API is running and the base URL is correct",
            ErrorCategory::Storage => "Check that the storage path exists and is writable",
            ErrorCategory::Data => "Remove or repair the storage file, then try again",
            ErrorCategory::Configuration => "Review the command line options or the TOML config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;
