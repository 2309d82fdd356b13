// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)] // Documentation is a must for release

//! # signal_math
//!
//! Stateless numeric helpers for audio DSP: window coefficients, magnitude and
//! decibel conversions, and a stereo volume meter.
//!
//! Every function is generic over [`RealFloat`] (`f32` or `f64`) and works on
//! borrowed slices or returns owned `Vec`s, so all of them can be called from
//! any thread on independent buffers.
//!
//! ## Features
//!
//! - `serialization`: `serde` support for [`WindowType`] and [`WindowSymmetry`]
//!
//! ## Error Handling
//!
//! Operations with preconditions (window lengths, buffer sizes) return
//! [`DspResult`]. Scalar conversions follow IEEE semantics instead: the
//! decibel value of a zero magnitude is `-inf`.
//!
//! ```rust
//! use signal_math::{DspError, hanning};
//!
//! match hanning::<f64>(1) {
//!     Ok(_) => unreachable!(),
//!     Err(DspError::Parameter(err)) => eprintln!("Invalid parameter: {err}"),
//!     Err(other) => eprintln!("Other error: {other}"),
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use signal_math::{
//!     WindowType, apply_window, calculate_volume_db_level, magnitudes_to_decibels,
//!     spectrum_magnitudes, window,
//! };
//!
//! let mut block = vec![0.5f32; 8];
//! let taper = window::<f32>(block.len(), WindowType::Hamming).unwrap();
//! apply_window(&mut block, &taper).unwrap();
//!
//! let bins = [[3.0f32, 4.0], [1.0, 0.0]];
//! let magnitudes = spectrum_magnitudes(&bins);
//! let mut decibels = vec![0.0f32; magnitudes.len()];
//! magnitudes_to_decibels(&magnitudes, &mut decibels).unwrap();
//!
//! let left = [0.25f32, -0.25];
//! let level = calculate_volume_db_level(&left, &left).unwrap();
//! assert!(level < 0.0);
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through [`tracing`]: window generation is reported at
//! `TRACE`, rejected arguments at `DEBUG`. No subscriber is installed.

mod error;
mod types;
pub mod utils;

pub use crate::error::{DspError, DspResult, ParameterError};
pub use crate::types::{WindowSymmetry, WindowType};
pub use crate::utils::{
    decibel::{
        calculate_decibel, calculate_magnitude, complex_decibel, complex_magnitude,
        decibel_to_magnitude, decibel_to_power, linear_to_decibel, logarithm,
        magnitude_to_decibel, magnitudes_to_decibels, power_to_decibel, spectrum_decibels,
        spectrum_magnitudes,
    },
    volume::{calculate_volume_db_level, mean_square_of_mix},
    windows::{apply_window, blackman, hamming, hanning, hanning_matlab, window},
};

pub use num_complex::Complex;

use num_traits::{Float, FloatConst, NumCast};

/// Index of the real part in a `[re, im]` spectrum bin.
pub const REAL: usize = 0;
/// Index of the imaginary part in a `[re, im]` spectrum bin.
pub const IMAG: usize = 1;

/// Marker trait for real floating-point types (f32, f64)
pub trait RealFloat: Float + FloatConst + NumCast + std::fmt::Debug + Send + Sync + 'static {}

impl RealFloat for f32 {}
impl RealFloat for f64 {}

/// Casts a numeric value into the target floating-point type `F`.
///
/// Used to write constants once for both `f32` and `f64`. When `F` and `T`
/// are the same type this is a no-op.
///
/// # Examples
/// ```
/// use signal_math::to_precision;
///
/// let value_f32: f32 = to_precision(0.5f64);
/// assert_eq!(value_f32, 0.5);
///
/// let value_f64: f64 = to_precision(42usize);
/// assert_eq!(value_f64, 42.0);
/// ```
///
/// # Panics
/// Panics if the value is not representable in `F`. Every primitive integer
/// and float converts to `f32`/`f64`, so this only happens for foreign
/// `NumCast` implementations.
#[inline(always)]
pub fn to_precision<F, T>(value: T) -> F
where
    F: RealFloat + NumCast,
    T: NumCast,
{
    NumCast::from(value).expect("to_precision: valid numeric conversion")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_precision() {
        let a: f32 = to_precision(3usize);
        let b: f64 = to_precision(0.25f32);
        assert_eq!(a, 3.0);
        assert_eq!(b, 0.25);
    }

    #[test]
    fn test_bin_indices() {
        let bin = [1.5f64, -2.5];
        assert_eq!(bin[REAL], 1.5);
        assert_eq!(bin[IMAG], -2.5);
    }

    #[test]
    fn test_window_symmetry_default() {
        assert_eq!(WindowSymmetry::default(), WindowSymmetry::Symmetric);
        assert!(WindowSymmetry::Periodic.is_periodic());
        assert_eq!(WindowType::Hamming.min_len(), 2);
        assert_eq!(WindowType::HanningMatlab(WindowSymmetry::Periodic).min_len(), 1);
    }
}
