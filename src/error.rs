//! Error types for the ciede2000 library

use thiserror::Error;

/// Result type alias for ciede2000 operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error types for color difference and conversion operations
#[derive(Error, Debug)]
pub enum ColorError {
    /// A Lab component or parameter was not a finite number
    #[error("Invalid input: {parameter} = {value}")]
    InvalidInput { parameter: String, value: String },

    /// A BGR channel fell outside the 8-bit range
    #[error("Channel out of range: {channel} = {value} (expected 0-255)")]
    ChannelOutOfRange { channel: char, value: i32 },

    /// Configuration could not be read, written or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorError {
    /// Create an invalid input error for a named parameter
    pub fn invalid_input(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidInput {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if the caller can recover by adjusting the input (e.g. clamping)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ColorError::ChannelOutOfRange { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidInput { parameter, .. } => {
                format!("The value of {} must be a finite number.", parameter)
            }
            ColorError::ChannelOutOfRange { channel, value } => {
                format!(
                    "Channel {} is {}, but 8-bit channels must be between 0 and 255.",
                    channel, value
                )
            }
            ColorError::ConfigError { .. } => {
                "Could not load the color difference settings. Please check the file.".to_string()
            }
        }
    }
}
