//! Reusable back easing curves.
//!
//! [`BackEasing`] bundles a direction ([`BackMode`]) with an overshoot so the
//! same curve can be sampled from many places without repeating parameters.

use crate::back::{DEFAULT_OVERSHOOT, ease_in_back, ease_in_out_back, ease_out_back};
use crate::error::{EasingError, Result};

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Which part of the motion gets the back effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum BackMode {
    /// Backtrack at the start.
    In,
    /// Overshoot at the end.
    Out,
    /// Backtrack at the start and overshoot at the end.
    #[default]
    InOut,
}

/// A back easing curve with a fixed mode and overshoot.
///
/// Applying a `BackEasing` gives exactly the same result as calling the
/// matching free function with `Some(overshoot)`.
///
/// # Example
///
/// ```rust
/// use backease::{BackEasing, BackMode, ease_out_back};
///
/// let curve = BackEasing::new(BackMode::Out).with_overshoot(2.5);
///
/// assert_eq!(
///     curve.apply(0.3, 10.0, 5.0, 1.0),
///     ease_out_back(0.3, 10.0, 5.0, 1.0, Some(2.5)),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct BackEasing {
    mode: BackMode,
    overshoot: f64,
}

impl Default for BackEasing {
    fn default() -> Self {
        Self::new(BackMode::default())
    }
}

impl BackEasing {
    /// Creates a curve for `mode` with [`DEFAULT_OVERSHOOT`].
    #[inline]
    pub const fn new(mode: BackMode) -> Self {
        Self {
            mode,
            overshoot: DEFAULT_OVERSHOOT,
        }
    }

    /// Sets the overshoot without checking it.
    ///
    /// Non-finite values are allowed here and propagate into every sample.
    /// Use [`try_with_overshoot`](Self::try_with_overshoot) for input from
    /// outside the program.
    #[inline]
    pub const fn with_overshoot(self, overshoot: f64) -> Self {
        Self { overshoot, ..self }
    }

    /// Sets the overshoot, rejecting NaN and infinities.
    ///
    /// # Errors
    ///
    /// Returns [`EasingError::InvalidOvershoot`] if `overshoot` is not finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use backease::{BackEasing, BackMode};
    ///
    /// assert!(BackEasing::new(BackMode::In).try_with_overshoot(3.0).is_ok());
    /// assert!(BackEasing::new(BackMode::In).try_with_overshoot(f64::NAN).is_err());
    /// ```
    pub fn try_with_overshoot(self, overshoot: f64) -> Result<Self> {
        if !overshoot.is_finite() {
            tracing::warn!(overshoot, "rejecting non-finite overshoot");
            return Err(EasingError::InvalidOvershoot(overshoot));
        }
        Ok(self.with_overshoot(overshoot))
    }

    /// Returns the mode.
    #[inline]
    pub const fn mode(&self) -> BackMode {
        self.mode
    }

    /// Returns the overshoot.
    #[inline]
    pub const fn overshoot(&self) -> f64 {
        self.overshoot
    }

    /// Checks that the overshoot is finite.
    ///
    /// # Errors
    ///
    /// Returns [`EasingError::InvalidOvershoot`] if it is not.
    pub fn validate(&self) -> Result<()> {
        if self.overshoot.is_finite() {
            Ok(())
        } else {
            Err(EasingError::InvalidOvershoot(self.overshoot))
        }
    }

    /// Computes the eased value at time `t` for a motion from `b` to `b + c`
    /// lasting `d`.
    #[inline]
    pub fn apply(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        let s = Some(self.overshoot);
        match self.mode {
            BackMode::In => ease_in_back(t, b, c, d, s),
            BackMode::Out => ease_out_back(t, b, c, d, s),
            BackMode::InOut => ease_in_out_back(t, b, c, d, s),
        }
    }

    /// Eases normalized progress in `[0, 1]`, returning a value that starts
    /// at 0 and ends at 1.
    ///
    /// # Example
    ///
    /// ```rust
    /// use backease::BackEasing;
    ///
    /// let curve = BackEasing::default();
    /// assert_eq!(curve.ease(0.0), 0.0);
    /// assert_eq!(curve.ease(0.5), 0.5);
    /// assert_eq!(curve.ease(1.0), 1.0);
    /// ```
    #[inline]
    pub fn ease(&self, progress: f64) -> f64 {
        self.apply(progress, 0.0, 1.0, 1.0)
    }
}
