use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTML parsing error: {message}")]
    HtmlParseError { message: String },

    #[error("No stats table found for the {season} season")]
    MissingTableError { season: String },

    #[error("Stats table for the {season} season has no header row")]
    MissingHeaderError { season: String },

    #[error("Only {extracted} players extracted, {required} required")]
    InsufficientDataError { extracted: usize, required: usize },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
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
    Low,
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::HttpError(_) | ReportError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            ReportError::IoError(_) => ErrorCategory::Storage,
            ReportError::SerializationError(_)
            | ReportError::HtmlParseError { .. }
            | ReportError::MissingTableError { .. }
            | ReportError::MissingHeaderError { .. }
            | ReportError::InsufficientDataError { .. } => ErrorCategory::Data,
            ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReportError::InsufficientDataError { .. } => ErrorSeverity::Low,
            ReportError::HttpError(_) | ReportError::HttpStatusError { .. } => {
                ErrorSeverity::Medium
            }
            ReportError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Network failures are worth retrying; everything else needs a fix first.
    pub fn is_retryable(&self) -> bool {
        match self {
            ReportError::HttpError(e) => e.is_timeout() || e.is_connect(),
            ReportError::HttpStatusError { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::HttpError(_) => "Check network connectivity or raise --timeout-seconds",
            ReportError::HttpStatusError { .. } => {
                "The stats site refused the request; wait a few minutes and retry"
            }
            ReportError::IoError(_) => "Check that the output directory is writable",
            ReportError::SerializationError(_) => "Report the player data that failed to encode",
            ReportError::HtmlParseError { .. }
            | ReportError::MissingTableError { .. }
            | ReportError::MissingHeaderError { .. } => {
                "The page layout may have changed; inspect the fetched HTML"
            }
            ReportError::InsufficientDataError { .. } => {
                "Retry later or drop --no-seed to fall back to the bundled roster"
            }
            ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. } => "Fix the configuration value and rerun",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not download stats: {}", self),
            ErrorCategory::Storage => format!("Could not write the report: {}", self),
            ErrorCategory::Data => format!("Could not build the report: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_and_severity() {
        let status = ReportError::HttpStatusError {
            url: "https://example.com".to_string(),
            status: 503,
        };
        assert_eq!(status.category(), ErrorCategory::Network);
        assert_eq!(status.severity(), ErrorSeverity::Medium);
        assert!(status.is_retryable());

        let missing = ReportError::MissingTableError {
            season: "current".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Data);
        assert_eq!(missing.severity(), ErrorSeverity::High);
        assert!(!missing.is_retryable());

        let short = ReportError::InsufficientDataError {
            extracted: 12,
            required: 101,
        };
        assert_eq!(short.severity(), ErrorSeverity::Low);
        assert_eq!(short.to_string(), "Only 12 players extracted, 101 required");
    }

    #[test]
    fn test_user_friendly_message_mentions_cause() {
        let err = ReportError::InvalidConfigValueError {
            field: "source.current_url".to_string(),
            value: "nope".to_string(),
            reason: "Invalid URL format".to_string(),
        };
        let msg = err.user_friendly_message();
        assert!(msg.starts_with("Invalid configuration"));
        assert!(msg.contains("source.current_url"));
    }
}
