//! Error handling for domain-scout

use thiserror::Error;

/// Main error type for domain-scout
#[derive(Error, Debug, Clone)]
pub enum ScoutError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Provider error ({provider}): {message}")]
    Provider {
        provider: String,
        message: String,
        code: Option<String>,
    },

    #[error("Domain checking error for '{domain}': {message}")]
    DomainCheck {
        domain: String,
        message: String,
        provider: Option<String>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ScoutError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a provider error (availability or text generation)
    pub fn provider(
        provider: impl Into<String>,
        message: impl Into<String>,
        code: Option<String>,
    ) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
            code,
        }
    }

    /// Create a domain checking error
    pub fn domain_check(
        domain: impl Into<String>,
        message: impl Into<String>,
        provider: Option<String>,
    ) -> Self {
        Self::DomainCheck {
            domain: domain.into(),
            message: message.into(),
            provider,
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for malformed or out-of-range caller input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Get user-facing error text, used as the body of failed tool calls
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("Configuration problem: {}. Check your .env file or environment", message)
            }
            Self::Provider { provider, message, .. } => {
                format!("Provider '{}' failed: {}. Check your API key and rate limits", provider, message)
            }
            Self::DomainCheck { domain, message, .. } => {
                format!("Could not check domain '{}': {}", domain, message)
            }
            Self::Network { message, status_code, .. } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!("Network error{}: {}", status, message)
            }
            Self::Timeout { operation, timeout_secs } => {
                format!("Operation '{}' timed out after {}s", operation, timeout_secs)
            }
            Self::Parse { message, .. } => {
                format!("Could not parse provider response: {}", message)
            }
            Self::Validation { message } => {
                format!("Invalid input: {}", message)
            }
            Self::Internal { message } => {
                format!("Internal error: {}", message)
            }
        }
    }
}

/// Convert from common error types
impl From<reqwest::Error> for ScoutError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::timeout("HTTP request", 30)
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else if err.is_request() {
            Self::network("Request failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for ScoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for ScoutError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(format!("I/O failure: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::ScoutError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::ScoutError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::ScoutError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::ScoutError::validation(format!($fmt, $($arg)*))
    };
}
