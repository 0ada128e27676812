//! Loading and saving [`BackEasing`] as JSON or TOML.
//!
//! Missing fields fall back to [`BackEasing::default`], so `{}` is a valid
//! configuration. Every loaded curve is validated before it is returned.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::curve::BackEasing;
use crate::error::{EasingError, EasingSaveError, Result};

impl BackEasing {
    /// Decodes a curve from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EasingError::Json`] on malformed input and
    /// [`EasingError::InvalidOvershoot`] if the overshoot is not finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use backease::{BackEasing, BackMode};
    ///
    /// let curve = BackEasing::from_json(r#"{ "mode": "out", "overshoot": 2.0 }"#).unwrap();
    /// assert_eq!(curve.mode(), BackMode::Out);
    /// assert_eq!(curve.overshoot(), 2.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let curve: Self = serde_json::from_str(json)?;
        curve.checked("json")
    }

    /// Decodes a curve from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`EasingError::Toml`] on malformed input and
    /// [`EasingError::InvalidOvershoot`] if the overshoot is not finite.
    pub fn from_toml(toml: &str) -> Result<Self> {
        let curve: Self = toml::from_str(toml)?;
        curve.checked("toml")
    }

    /// Loads a curve from a `.json` or `.toml` file.
    ///
    /// # Errors
    ///
    /// Returns [`EasingError::Io`] if the file cannot be read,
    /// [`EasingError::UnknownFormat`] for any other extension, and the
    /// decoding errors of [`from_json`](Self::from_json) and
    /// [`from_toml`](Self::from_toml).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Self::from_json(&fs::read_to_string(path)?),
            "toml" => Self::from_toml(&fs::read_to_string(path)?),
            _ => {
                warn!(path = %path.display(), "unsupported easing config extension");
                Err(EasingError::UnknownFormat(ext))
            }
        }
    }

    /// Serializes this curve to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EasingSaveError::Json`] if serialization fails.
    pub fn to_json(&self) -> std::result::Result<String, EasingSaveError> {
        serde_json::to_string_pretty(self).map_err(EasingSaveError::Json)
    }

    /// Serializes this curve to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`EasingSaveError::Toml`] if serialization fails.
    pub fn to_toml(&self) -> std::result::Result<String, EasingSaveError> {
        toml::to_string_pretty(self).map_err(EasingSaveError::Toml)
    }

    fn checked(self, format: &str) -> Result<Self> {
        if let Err(err) = self.validate() {
            warn!(format, overshoot = self.overshoot(), "rejected easing config");
            return Err(err);
        }
        debug!(format, mode = ?self.mode(), overshoot = self.overshoot(), "loaded easing config");
        Ok(self)
    }
}
