//! Back easing functions in the classic `(t, b, c, d, s)` form.
//!
//! Each function maps an elapsed time `t` within a duration `d` onto a value
//! that starts at `b` and ends at `b + c`. On the way, the value backs away
//! from the target, swings past it and settles.
//!
//! The formulas follow Robert Penner's easing equations, and evaluate their
//! terms in the same order as the widely used JavaScript rendition so that
//! results agree bit for bit on IEEE-754 doubles.
//!
//! # License
//!
//! ```text
//! Copyright (c) 2001 Robert Penner
//! All rights reserved.
//!
//! Redistribution and use in source and binary forms, with or without
//! modification, are permitted provided that the following conditions are met:
//!
//! 1. Redistributions of source code must retain the above copyright notice,
//!    this list of conditions and the following disclaimer.
//!
//! 2. Redistributions in binary form must reproduce the above copyright
//!    notice, this list of conditions and the following disclaimer in the
//!    documentation and/or other materials provided with the distribution.
//!
//! 3. Neither the name of the author nor the names of contributors may be
//!    used to endorse or promote products derived from this software without
//!    specific prior written permission.
//! ```

/// Overshoot used when none is given.
///
/// Produces roughly a 10% overshoot for [`ease_in_back`] and [`ease_out_back`].
pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

/// Multiplier applied to the overshoot by [`ease_in_out_back`].
///
/// Each half of the in-out curve covers half the distance, so the overshoot is
/// stretched to keep a comparable swing.
pub const IN_OUT_OVERSHOOT_SCALE: f64 = 1.525;

/// Back easing that accelerates from `b` after first dipping away from the
/// target.
///
/// # Arguments
///
/// * `t` - Elapsed time, normally in `[0, d]`. Not clamped.
/// * `b` - Starting value.
/// * `c` - Change in value (target minus start).
/// * `d` - Total duration. Zero yields infinity or NaN.
/// * `s` - Overshoot amount, [`DEFAULT_OVERSHOOT`] when `None`.
///
/// # Example
///
/// ```rust
/// use backease::ease_in_back;
///
/// assert_eq!(ease_in_back(0.0, 10.0, 90.0, 2.0, None), 10.0);
/// assert!((ease_in_back(2.0, 10.0, 90.0, 2.0, None) - 100.0).abs() < 1e-9);
///
/// // Early on, the value moves the wrong way.
/// assert!(ease_in_back(0.5, 10.0, 90.0, 2.0, None) < 10.0);
/// ```
#[inline]
pub fn ease_in_back(t: f64, b: f64, c: f64, d: f64, s: Option<f64>) -> f64 {
    let s = s.unwrap_or(DEFAULT_OVERSHOOT);
    let t = t / d;

    c * t * t * ((s + 1.0) * t - s) + b
}

/// Back easing that overshoots `b + c` and decelerates back onto it.
///
/// Takes the same arguments as [`ease_in_back`].
///
/// # Example
///
/// ```rust
/// use backease::ease_out_back;
///
/// // Past the target before the end...
/// assert!(ease_out_back(0.75, 0.0, 1.0, 1.0, None) > 1.0);
/// // ...and back on it at the end.
/// assert!((ease_out_back(1.0, 0.0, 1.0, 1.0, None) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn ease_out_back(t: f64, b: f64, c: f64, d: f64, s: Option<f64>) -> f64 {
    let s = s.unwrap_or(DEFAULT_OVERSHOOT);
    let t = t / d - 1.0;

    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

/// Back easing in both directions: backtrack, swing through the midpoint,
/// overshoot the target and settle on it.
///
/// The first half of the duration is the backtrack phase, the second half is
/// the overshoot-and-settle phase. The two halves meet at `b + c / 2` when
/// `t = d / 2`.
///
/// The overshoot `s` (default [`DEFAULT_OVERSHOOT`]) is scaled by
/// [`IN_OUT_OVERSHOOT_SCALE`] once, whichever half `t` falls in.
///
/// No argument is validated. `t` outside `[0, d]` extrapolates the curve and
/// `d == 0` follows IEEE-754 division.
///
/// # Arguments
///
/// * `t` - Elapsed time, normally in `[0, d]`.
/// * `b` - Starting value.
/// * `c` - Change in value (target minus start).
/// * `d` - Total duration.
/// * `s` - Overshoot amount, [`DEFAULT_OVERSHOOT`] when `None`.
///
/// # Example
///
/// ```rust
/// use backease::ease_in_out_back;
///
/// assert_eq!(ease_in_out_back(0.0, 0.0, 100.0, 1000.0, None), 0.0);
/// assert_eq!(ease_in_out_back(500.0, 0.0, 100.0, 1000.0, None), 50.0);
/// assert_eq!(ease_in_out_back(1000.0, 0.0, 100.0, 1000.0, None), 100.0);
///
/// // The signature dip below the start value.
/// assert!(ease_in_out_back(250.0, 0.0, 100.0, 1000.0, None) < 0.0);
/// ```
#[inline]
pub fn ease_in_out_back(t: f64, b: f64, c: f64, d: f64, s: Option<f64>) -> f64 {
    let s = s.unwrap_or(DEFAULT_OVERSHOOT) * IN_OUT_OVERSHOOT_SCALE;
    let t = t / (d / 2.0);

    if t < 1.0 {
        // Backtrack
        c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b
    } else {
        // Overshoot and settle
        let t = t - 2.0;
        c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
    }
}
