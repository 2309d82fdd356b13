//! Window function generation and application.
//!
//! Every generator returns a freshly allocated `Vec` with exactly `len`
//! coefficients. Lengths a formula cannot handle (a single point where the
//! formula divides by `len - 1`, or an empty window) are rejected with a
//! [`ParameterError::OutOfRange`] instead of producing `NaN`s.
//!
//! # Examples
//!
//! ```rust
//! use signal_math::{WindowSymmetry, hamming, hanning_matlab};
//!
//! let w: Vec<f64> = hamming(4).unwrap();
//! assert!((w[0] - 0.08).abs() < 0.01);
//!
//! let p: Vec<f32> = hanning_matlab(8, WindowSymmetry::Periodic).unwrap();
//! assert_eq!(p[0], 0.0);
//! ```

use crate::{DspError, DspResult, ParameterError, RealFloat, WindowSymmetry, WindowType, to_precision};

fn check_len(len: usize, window_type: WindowType) -> DspResult<()> {
    let min = window_type.min_len();
    if len < min {
        tracing::debug!(len, min, window = ?window_type, "rejected window length");
        return Err(ParameterError::out_of_range(
            "len",
            len.to_string(),
            min.to_string(),
            usize::MAX.to_string(),
            format!("{window_type:?} window needs at least {min} point(s)"),
        )
        .into());
    }
    tracing::trace!(len, window = ?window_type, "generating window");
    Ok(())
}

/// Phase `2π·i / (len - 1)` used by the endpoint-inclusive windows.
#[inline]
fn phase<F: RealFloat>(i: usize, len: usize) -> F {
    let two_pi = to_precision::<F, _>(2.0) * F::PI();
    two_pi * to_precision::<F, _>(i) / to_precision::<F, _>(len - 1)
}

/// Generates a Hanning window with zero-valued endpoints.
///
/// `w[i] = 0.5 * (1 - cos(2π·i / (len - 1)))`
///
/// # Errors
/// Returns an error if `len < 2`.
pub fn hanning<F: RealFloat>(len: usize) -> DspResult<Vec<F>> {
    check_len(len, WindowType::Hanning)?;
    let half = to_precision::<F, _>(0.5);
    Ok((0..len)
        .map(|i| half * (F::one() - phase::<F>(i, len).cos()))
        .collect())
}

/// Generates a Hanning window following MATLAB's `hanning(N, sflag)`.
///
/// Unlike [`hanning`], the zero-weighted endpoints are not part of the
/// symmetric window: for `m` points the curve is sampled at
/// `0.5 * (1 - cos(2π·k / (m + 1)))` for `k = 1..=m`. Only the first half is
/// evaluated and the rest is mirrored from it; for odd `m` the centre sample
/// is not repeated.
///
/// The periodic variant evaluates the symmetric curve for `len - 1` points,
/// then shifts it right by one so that `w[0] == 0`.
///
/// # Errors
/// Returns an error if `len == 0`.
pub fn hanning_matlab<F: RealFloat>(len: usize, symmetry: WindowSymmetry) -> DspResult<Vec<F>> {
    check_len(len, WindowType::HanningMatlab(symmetry))?;

    let m = if symmetry.is_periodic() { len - 1 } else { len };
    let (computed, mirrored) = if m % 2 == 0 {
        (m / 2, m / 2)
    } else {
        ((m + 1) / 2, (m - 1) / 2)
    };

    let half = to_precision::<F, _>(0.5);
    let two_pi = to_precision::<F, _>(2.0) * F::PI();
    let denom = to_precision::<F, _>(m + 1);

    let mut w = vec![F::zero(); len];
    for (i, value) in w.iter_mut().take(computed).enumerate() {
        *value = half * (F::one() - (two_pi * to_precision::<F, _>(i + 1) / denom).cos());
    }

    let (head, tail) = w.split_at_mut(computed);
    for (dst, src) in tail[..m - computed].iter_mut().zip(head[..mirrored].iter().rev()) {
        *dst = *src;
    }

    if symmetry.is_periodic() {
        // w[len - 1] is still zero here, so rotating loses nothing.
        w.rotate_right(1);
        w[0] = F::zero();
    }
    Ok(w)
}

/// Generates a Hamming window.
///
/// `w[i] = 0.53836 - 0.46164 * cos(2π·i / (len - 1))`
///
/// # Errors
/// Returns an error if `len < 2`.
pub fn hamming<F: RealFloat>(len: usize) -> DspResult<Vec<F>> {
    check_len(len, WindowType::Hamming)?;
    let alpha = to_precision::<F, _>(0.53836);
    let beta = to_precision::<F, _>(0.46164);
    Ok((0..len)
        .map(|i| alpha - beta * phase::<F>(i, len).cos())
        .collect())
}

/// Generates a Blackman window.
///
/// `w[i] = 0.42 - 0.5 * cos(2π·i / (len - 1)) + 0.08 * cos(4π·i / (len - 1))`
///
/// # Errors
/// Returns an error if `len < 2`.
pub fn blackman<F: RealFloat>(len: usize) -> DspResult<Vec<F>> {
    check_len(len, WindowType::Blackman)?;
    let a0 = to_precision::<F, _>(0.42);
    let a1 = to_precision::<F, _>(0.5);
    let a2 = to_precision::<F, _>(0.08);
    let two = to_precision::<F, _>(2.0);
    Ok((0..len)
        .map(|i| {
            let p = phase::<F>(i, len);
            a0 - a1 * p.cos() + a2 * (two * p).cos()
        })
        .collect())
}

/// Generates window coefficients of the given type.
///
/// # Errors
/// Returns an error if `len` is below [`WindowType::min_len`].
pub fn window<F: RealFloat>(len: usize, window_type: WindowType) -> DspResult<Vec<F>> {
    match window_type {
        WindowType::Rectangular => {
            check_len(len, window_type)?;
            Ok(vec![F::one(); len])
        }
        WindowType::Hanning => hanning(len),
        WindowType::HanningMatlab(symmetry) => hanning_matlab(len, symmetry),
        WindowType::Hamming => hamming(len),
        WindowType::Blackman => blackman(len),
    }
}

/// Multiplies `samples` by `coefficients` in place.
///
/// # Errors
/// Returns [`DspError::DimensionMismatch`] if the two slices differ in length.
pub fn apply_window<F: RealFloat>(samples: &mut [F], coefficients: &[F]) -> DspResult<()> {
    if samples.len() != coefficients.len() {
        tracing::debug!(
            samples = samples.len(),
            coefficients = coefficients.len(),
            "window length does not match block"
        );
        return Err(DspError::dimension_mismatch(
            samples.len(),
            coefficients.len(),
            "apply_window",
        ));
    }
    for (s, &c) in samples.iter_mut().zip(coefficients) {
        *s = *s * c;
    }
    Ok(())
}
