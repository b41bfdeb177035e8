use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Rate limited by the card API (HTTP 429)")]
    RateLimited { retry_after: Option<u64> },

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("API returned HTTP {status}: {details}")]
    HttpStatus { status: u16, details: String },

    #[error("Card not found: {id}")]
    NotFound { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    RateLimit,
    Timeout,
    Http,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CardError::ApiError(_) => ErrorCategory::Network,
            CardError::RateLimited { .. } => ErrorCategory::RateLimit,
            CardError::Timeout { .. } => ErrorCategory::Timeout,
            CardError::HttpStatus { .. } | CardError::NotFound { .. } => ErrorCategory::Http,
            CardError::SerializationError(_) => ErrorCategory::Data,
            CardError::ConfigError { .. }
            | CardError::InvalidConfigValueError { .. }
            | CardError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            CardError::ValidationError { .. } => ErrorCategory::Input,
            CardError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::RateLimit | ErrorCategory::Timeout | ErrorCategory::Network => {
                ErrorSeverity::Medium
            }
            ErrorCategory::Http | ErrorCategory::Data | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CardError::RateLimited { .. } => {
                "Too many requests (429). The card API is rate limiting us.".to_string()
            }
            CardError::Timeout { seconds } => {
                format!("The card API did not answer within {} seconds.", seconds)
            }
            CardError::HttpStatus { status, .. } => {
                format!("Error: the card API responded with HTTP {}.", status)
            }
            CardError::NotFound { id } => format!("No card exists with id '{}'.", id),
            CardError::ApiError(_) => "Error: Could not retrieve cards.".to_string(),
            CardError::SerializationError(_) => {
                "Failed to load card details: unexpected response format.".to_string()
            }
            CardError::ValidationError { message } => message.clone(),
            CardError::ConfigError { .. }
            | CardError::InvalidConfigValueError { .. }
            | CardError::ConfigValidationError { .. } => format!("Invalid configuration: {}", self),
            CardError::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CardError::RateLimited {
                retry_after: Some(secs),
            } => format!("Wait {} seconds before searching again", secs),
            CardError::RateLimited { retry_after: None } => {
                "Wait a moment before searching again".to_string()
            }
            CardError::Timeout { .. } => {
                "Check your connection or raise --timeout-seconds".to_string()
            }
            CardError::HttpStatus { status, .. } if *status >= 500 => {
                "The card API is having trouble, try again later".to_string()
            }
            CardError::HttpStatus { .. } => "Check the search syntax and try again".to_string(),
            CardError::NotFound { .. } => "Search for the card first and copy its id".to_string(),
            CardError::ApiError(_) => "Check your network connection and the API base URL".to_string(),
            CardError::SerializationError(_) => {
                "Verify --api-base-url points at a Scryfall-compatible API".to_string()
            }
            CardError::ValidationError { .. } => "Enter a card name or a search query".to_string(),
            CardError::ConfigError { .. }
            | CardError::InvalidConfigValueError { .. }
            | CardError::ConfigValidationError { .. } => {
                "Fix the configuration file or command-line flags".to_string()
            }
            CardError::IoError(_) => "Check file paths and permissions".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_conditions_have_distinct_messages() {
        let rate = CardError::RateLimited { retry_after: None };
        let timeout = CardError::Timeout { seconds: 10 };
        let http = CardError::HttpStatus {
            status: 500,
            details: "boom".to_string(),
        };

        assert_eq!(rate.category(), ErrorCategory::RateLimit);
        assert_eq!(timeout.category(), ErrorCategory::Timeout);
        assert_eq!(http.category(), ErrorCategory::Http);

        assert!(rate.user_friendly_message().contains("429"));
        assert!(timeout.user_friendly_message().contains("10 seconds"));
        assert!(http.user_friendly_message().contains("500"));
    }

    #[test]
    fn test_severity_ordering() {
        let input = CardError::ValidationError {
            message: "empty".to_string(),
        };
        let config = CardError::ConfigError {
            message: "bad".to_string(),
        };

        assert_eq!(input.severity(), ErrorSeverity::Low);
        assert_eq!(config.severity(), ErrorSeverity::High);
        assert!(input.severity() < config.severity());
    }

    #[test]
    fn test_retry_after_in_suggestion() {
        let err = CardError::RateLimited {
            retry_after: Some(3),
        };
        assert_eq!(err.recovery_suggestion(), "Wait 3 seconds before searching again");
    }
}
