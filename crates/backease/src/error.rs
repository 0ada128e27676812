//! Error types for building and loading easing configuration.
//!
//! The easing functions themselves never fail. Errors only arise when an
//! overshoot is checked explicitly or a configuration is decoded.

use thiserror::Error;

/// Errors that can occur when building or loading a [`BackEasing`](crate::BackEasing).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EasingError {
    /// Overshoot was NaN or infinite.
    #[error("Overshoot must be a finite number, got {0}")]
    InvalidOvershoot(f64),

    /// Configuration file could not be read.
    #[cfg(feature = "config")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON could not be decoded.
    #[cfg(feature = "config")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML could not be decoded.
    #[cfg(feature = "config")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension was not `json` or `toml`.
    #[cfg(feature = "config")]
    #[error("Unknown configuration format: {0}")]
    UnknownFormat(String),
}

/// Errors that can occur when serializing a [`BackEasing`](crate::BackEasing).
#[cfg(feature = "config")]
#[derive(Error, Debug)]
pub enum EasingSaveError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Result type for easing configuration operations.
pub type Result<T> = core::result::Result<T, EasingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_overshoot_message() {
        let err = EasingError::InvalidOvershoot(f64::NAN);
        assert_eq!(err.to_string(), "Overshoot must be a finite number, got NaN");

        let err = EasingError::InvalidOvershoot(f64::INFINITY);
        assert_eq!(err.to_string(), "Overshoot must be a finite number, got inf");
    }
}
