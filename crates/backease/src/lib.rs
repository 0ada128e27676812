#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
// Allow these clippy lints for math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::missing_const_for_fn)]

//! # Backease
//!
//! Back easing curves for animation timing.
//!
//! A back curve first moves away from its target ("backtrack"), then swings
//! toward it, passes it ("overshoot") and settles. Backease provides:
//!
//! - **Functions**: [`ease_in_back`], [`ease_out_back`] and
//!   [`ease_in_out_back`] in the classic `(t, b, c, d, s)` form
//! - **BackEasing**: a reusable curve with a fixed [`BackMode`] and overshoot
//! - **Config** (feature `config`): load and save curves as JSON or TOML
//!
//! ## Example
//!
//! ```rust
//! use backease::ease_in_out_back;
//!
//! // Move from 0 to 100 over 1000 ms, sampled every 100 ms
//! let samples: Vec<f64> = (0..=10)
//!     .map(|i| ease_in_out_back(f64::from(i) * 100.0, 0.0, 100.0, 1000.0, None))
//!     .collect();
//!
//! assert_eq!(samples[0], 0.0);
//! assert!(samples[2] < 0.0); // backtrack
//! assert_eq!(samples[5], 50.0); // midpoint
//! assert!(samples[8] > 100.0); // overshoot
//! assert_eq!(samples[10], 100.0);
//! ```
//!
//! ## Overshoot
//!
//! The overshoot `s` controls how far the curve swings. `None` selects
//! [`DEFAULT_OVERSHOOT`] (1.70158, about 10%). `Some(0.0)` removes the swing
//! entirely and leaves a plain cubic curve.
//!
//! ## Attribution
//!
//! The equations are Robert Penner's easing equations:
//! <http://robertpenner.com/easing/>

mod back;
#[cfg(feature = "config")]
mod config;
mod curve;
mod error;

pub use back::{
    DEFAULT_OVERSHOOT, IN_OUT_OVERSHOOT_SCALE, ease_in_back, ease_in_out_back, ease_out_back,
};
pub use curve::{BackEasing, BackMode};
#[cfg(feature = "config")]
pub use error::EasingSaveError;
pub use error::{EasingError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::back::{DEFAULT_OVERSHOOT, ease_in_back, ease_in_out_back, ease_out_back};
    pub use crate::curve::{BackEasing, BackMode};
    pub use crate::error::EasingError;
}
