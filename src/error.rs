// src/error.rs

//! Unified error handling for campcal.

use std::fmt;

use thiserror::Error;

/// Result type alias for campcal operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// A month-day string was not a valid `MM-DD` value
    #[error("Invalid month-day '{value}': {message}")]
    MonthDay { value: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Campsite or window lookup failed
    #[error("Not found: {0}")]
    NotFound(String),

    /// The reservation backend returned something unusable
    #[error("Backend error for campsite {campsite}: {message}")]
    Backend { campsite: String, message: String },
}

impl AppError {
    /// Create an invalid month-day error.
    pub fn month_day(value: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::MonthDay {
            value: value.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a lookup error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a backend error for a campsite.
    pub fn backend(campsite: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Backend {
            campsite: campsite.into(),
            message: message.to_string(),
        }
    }
}
