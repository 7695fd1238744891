//! Error handling for pass-forge

use thiserror::Error;

/// Main error type for pass-forge
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PassForgeError {
    #[error("Invalid date format: '{input}' (expected YYYY-MM-DD)")]
    InvalidDateFormat { input: String },

    #[error("No base words provided: nothing to generate")]
    EmptySeedSet,

    #[error("Failed to write wordlist to '{target}': {message}")]
    SinkWrite { target: String, message: String },

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Prompt error: {message}")]
    Prompt { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PassForgeError {
    /// Create an invalid date error
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            input: input.into(),
        }
    }

    /// Create a sink write error
    pub fn sink_write(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkWrite {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the pipeline can carry on after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidDateFormat { .. } | Self::EmptySeedSet | Self::SinkWrite { .. }
        )
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidDateFormat { input } => {
                format!("⚠️  Invalid date format '{}'. Skipping date-based words.\n💡 Use YYYY-MM-DD, e.g. 1990-05-21", input)
            }
            Self::EmptySeedSet => {
                "❌ No base words provided. Cannot generate a wordlist.\n💡 Fill in at least one field".to_string()
            }
            Self::SinkWrite { target, message } => {
                format!("❌ Could not save wordlist to '{}': {}\n💡 Check file permissions and paths, then retry", target, message)
            }
            Self::EmptyPassword => {
                "❌ Password cannot be empty.\n💡 Enter at least one character".to_string()
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or command line flags", message)
            }
            Self::Prompt { message } => {
                format!("❌ Input aborted: {}", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

impl From<std::io::Error> for PassForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<serde_json::Error> for PassForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::io(format!("Failed to serialize summary: {}", err), None)
    }
}

impl From<inquire::InquireError> for PassForgeError {
    fn from(err: inquire::InquireError) -> Self {
        Self::prompt(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PassForgeError>;

/// Helper macro for configuration errors
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::PassForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PassForgeError::config(format!($fmt, $($arg)*))
    };
}
