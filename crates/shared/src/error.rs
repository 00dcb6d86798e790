//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input data could not be read.
    #[error("Input error: {0}")]
    Input(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Access denied.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Output could not be written.
    #[error("Output error: {0}")]
    Output(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78,
            Self::Input(_) | Self::Validation(_) => 65,
            Self::BusinessRule(_) => 3,
            Self::Forbidden(_) => 77,
            Self::Output(_) => 74,
        }
    }

    /// Returns the stable error code used in logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Input(_) => "INPUT_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Output(_) => "OUTPUT_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(AppError::Config(String::new()).exit_code(), 78);
        assert_eq!(AppError::Input(String::new()).exit_code(), 65);
        assert_eq!(AppError::Validation(String::new()).exit_code(), 65);
        assert_eq!(AppError::BusinessRule(String::new()).exit_code(), 3);
        assert_eq!(AppError::Forbidden(String::new()).exit_code(), 77);
        assert_eq!(AppError::Output(String::new()).exit_code(), 74);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Config(String::new()).error_code(), "CONFIG_ERROR");
        assert_eq!(AppError::Input(String::new()).error_code(), "INPUT_ERROR");
        assert_eq!(
            AppError::BusinessRule(String::new()).error_code(),
            "BUSINESS_RULE_VIOLATION"
        );
        assert_eq!(AppError::Forbidden(String::new()).error_code(), "FORBIDDEN");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Config("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(
            AppError::BusinessRule("msg".into()).to_string(),
            "Business rule violation: msg"
        );
        assert_eq!(
            AppError::Output("msg".into()).to_string(),
            "Output error: msg"
        );
    }
}
