use thiserror::Error;

/// Application-wide error types for jobscout.
#[derive(Error, Debug)]
pub enum AppError {
    /// A request field failed validation.
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// The upstream scraper answered with a non-success HTTP status.
    #[error("upstream scraper error (HTTP {status_code}): {message}")]
    Upstream { message: String, status_code: u16 },

    /// Network/connection error reaching the upstream scraper.
    #[error("network error: {0}")]
    Network(String),

    /// Request to the upstream scraper timed out.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// The upstream scraper rate-limited this client.
    #[error("rate limited by upstream scraper")]
    RateLimited,

    /// JSON serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Shorthand for a field-level validation failure.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// The request field this error is about, when it is a validation error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_field() {
        let err = AppError::validation("results_wanted", "must be between 1 and 1000");
        assert_eq!(err.field(), Some("results_wanted"));
        assert_eq!(
            err.to_string(),
            "invalid results_wanted: must be between 1 and 1000"
        );
    }

    #[test]
    fn non_validation_errors_have_no_field() {
        assert_eq!(AppError::RateLimited.field(), None);
        assert_eq!(AppError::Timeout(300).field(), None);
    }
}
