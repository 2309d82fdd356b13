//! Magnitude and decibel conversions.
//!
//! Unlike the floored helpers found in many audio libraries, these functions
//! keep plain IEEE semantics: a zero magnitude converts to `-inf` dB and a
//! negative one to `NaN`. Guard the input if that is not wanted.
//!
//! # Examples
//!
//! ```rust
//! use signal_math::{calculate_magnitude, decibel_to_magnitude, magnitude_to_decibel};
//!
//! assert_eq!(calculate_magnitude(3.0f64, 4.0), 5.0);
//! assert_eq!(magnitude_to_decibel(1.0f32), 0.0);
//! assert_eq!(decibel_to_magnitude(0.0f64), 1.0);
//! ```

use num_complex::Complex;

use crate::{DspError, DspResult, IMAG, REAL, RealFloat, to_precision};

// =============================================================================
// PRIMITIVES
// =============================================================================

/// Base-10 logarithm evaluated at the precision of `F`.
///
/// Resolves to `f32::log10` or `f64::log10` at compile time.
#[inline]
pub fn logarithm<F: RealFloat>(value: F) -> F {
    value.log10()
}

/// Magnitude of the complex number `real + i·imaginary`.
///
/// Equivalent to `sqrt(real² + imaginary²)`, but the larger operand is
/// factored out first so the squared term never exceeds one and the result
/// stays finite whenever the true magnitude is representable.
///
/// # Examples
///
/// ```rust
/// use signal_math::calculate_magnitude;
///
/// assert_eq!(calculate_magnitude(3.0f64, 4.0), 5.0);
/// assert!(calculate_magnitude(1e200f64, 1e200).is_finite());
/// ```
pub fn calculate_magnitude<F: RealFloat>(real: F, imaginary: F) -> F {
    let (small, big) = if real.abs() < imaginary.abs() {
        (real, imaginary)
    } else {
        (imaginary, real)
    };

    if big.is_infinite() || small.is_infinite() {
        return F::infinity();
    }
    if big == F::zero() {
        return small.abs();
    }
    if small == F::zero() {
        return big.abs();
    }

    let ratio = small / big;
    big.abs() * (F::one() + ratio * ratio).sqrt()
}

/// Level in dB of the complex number `real + i·imaginary`.
pub fn calculate_decibel<F: RealFloat>(real: F, imaginary: F) -> F {
    magnitude_to_decibel(calculate_magnitude(real, imaginary))
}

// =============================================================================
// AMPLITUDE CONVERSIONS
// =============================================================================

/// Converts a linear magnitude to decibels: `20 * log10(magnitude)`.
///
/// Returns `-inf` for zero and `NaN` for negative input.
#[inline]
pub fn magnitude_to_decibel<F: RealFloat>(magnitude: F) -> F {
    to_precision::<F, _>(20.0) * logarithm(magnitude)
}

/// Converts every value in `magnitudes` to decibels, writing into `decibels`.
///
/// Only the first `magnitudes.len()` slots of `decibels` are written. Nothing
/// is allocated.
///
/// # Errors
/// Returns [`DspError::DimensionMismatch`] if `decibels` is shorter than
/// `magnitudes`.
pub fn magnitudes_to_decibels<F: RealFloat>(magnitudes: &[F], decibels: &mut [F]) -> DspResult<()> {
    if decibels.len() < magnitudes.len() {
        tracing::debug!(
            input = magnitudes.len(),
            output = decibels.len(),
            "decibel output buffer too small"
        );
        return Err(DspError::dimension_mismatch(
            magnitudes.len(),
            decibels.len(),
            "magnitudes_to_decibels output",
        ));
    }
    for (db, &m) in decibels.iter_mut().zip(magnitudes) {
        *db = magnitude_to_decibel(m);
    }
    Ok(())
}

/// Converts decibels to linear magnitude: `10^(decibel / 20)`.
///
/// Inverse of [`magnitude_to_decibel`] for positive magnitudes.
#[inline]
pub fn decibel_to_magnitude<F: RealFloat>(decibel: F) -> F {
    to_precision::<F, _>(10.0).powf(decibel / to_precision::<F, _>(20.0))
}

/// Level of `v1` relative to the reference `v2` in dB: `20 * log10(v1 / v2)`.
///
/// ```rust
/// use signal_math::linear_to_decibel;
///
/// let gain = linear_to_decibel(0.5f64, 1.0);
/// assert!((gain + 6.0206).abs() < 1e-3);
/// ```
pub fn linear_to_decibel<F: RealFloat>(v1: F, v2: F) -> F {
    magnitude_to_decibel(v1 / v2)
}

// =============================================================================
// POWER CONVERSIONS
// =============================================================================

/// Converts a power ratio to decibels: `10 * log10(power)`.
pub fn power_to_decibel<F: RealFloat>(power: F) -> F {
    to_precision::<F, _>(10.0) * logarithm(power)
}

/// Converts decibels to a power ratio: `10^(decibel / 10)`.
pub fn decibel_to_power<F: RealFloat>(decibel: F) -> F {
    to_precision::<F, _>(10.0).powf(decibel / to_precision::<F, _>(10.0))
}

// =============================================================================
// COMPLEX / SPECTRUM HELPERS
// =============================================================================

/// Overflow-safe magnitude of a [`Complex`] value.
pub fn complex_magnitude<F: RealFloat>(value: Complex<F>) -> F {
    calculate_magnitude(value.re, value.im)
}

/// Level in dB of a [`Complex`] value.
pub fn complex_decibel<F: RealFloat>(value: Complex<F>) -> F {
    calculate_decibel(value.re, value.im)
}

/// Magnitudes of interleaved `[re, im]` spectrum bins.
///
/// Bins are indexed with [`REAL`] and [`IMAG`], the layout FFTW-style
/// libraries emit.
pub fn spectrum_magnitudes<F: RealFloat>(bins: &[[F; 2]]) -> Vec<F> {
    bins.iter()
        .map(|bin| calculate_magnitude(bin[REAL], bin[IMAG]))
        .collect()
}

/// Levels in dB of interleaved `[re, im]` spectrum bins.
pub fn spectrum_decibels<F: RealFloat>(bins: &[[F; 2]]) -> Vec<F> {
    bins.iter()
        .map(|bin| calculate_decibel(bin[REAL], bin[IMAG]))
        .collect()
}
