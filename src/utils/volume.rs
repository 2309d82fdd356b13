//! Stereo volume metering.

use crate::utils::decibel::magnitude_to_decibel;
use crate::{DspError, DspResult, ParameterError, RealFloat, to_precision};

fn check_stereo_pair<F>(left: &[F], right: &[F]) -> DspResult<()> {
    if left.is_empty() {
        tracing::debug!("volume requested for empty buffers");
        return Err(ParameterError::out_of_range(
            "count",
            "0",
            "1",
            usize::MAX.to_string(),
            "At least one sample per channel is required",
        )
        .into());
    }
    if left.len() != right.len() {
        tracing::debug!(
            left = left.len(),
            right = right.len(),
            "stereo channel lengths differ"
        );
        return Err(DspError::dimension_mismatch(
            left.len(),
            right.len(),
            "right channel",
        ));
    }
    Ok(())
}

/// Mean square of the mono mix `(left[i] + right[i]) / 2`.
///
/// # Errors
/// Returns an error if the buffers are empty or differ in length.
pub fn mean_square_of_mix<F: RealFloat>(left: &[F], right: &[F]) -> DspResult<F> {
    check_stereo_pair(left, right)?;
    let two = to_precision::<F, _>(2.0);
    let sum = left
        .iter()
        .zip(right)
        .fold(F::zero(), |acc, (&l, &r)| {
            let mid = (l + r) / two;
            acc + mid * mid
        });
    Ok(sum / to_precision::<F, _>(left.len()))
}

/// RMS level in dB of the mono mix of a stereo block.
///
/// `20 * log10(sqrt(mean((left[i] + right[i]) / 2)²))`. Silence yields
/// `-inf`.
///
/// # Errors
/// Returns an error if the buffers are empty or differ in length.
///
/// # Examples
///
/// ```rust
/// use signal_math::calculate_volume_db_level;
///
/// let left = [0.5f64, -0.5, 0.5, -0.5];
/// let right = left;
/// let db = calculate_volume_db_level(&left, &right).unwrap();
/// assert!((db + 6.0206).abs() < 1e-3);
/// ```
pub fn calculate_volume_db_level<F: RealFloat>(left: &[F], right: &[F]) -> DspResult<F> {
    let mean_square = mean_square_of_mix(left, right)?;
    Ok(magnitude_to_decibel(mean_square.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_silence_is_negative_infinity() {
        let zeros = [0.0f64; 256];
        assert_eq!(calculate_volume_db_level(&zeros, &zeros).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_full_scale_dc_is_zero_db() {
        let ones = [1.0f32; 64];
        assert_eq!(calculate_volume_db_level(&ones, &ones).unwrap(), 0.0);
    }

    #[test]
    fn test_out_of_phase_channels_cancel() {
        let left = [0.8f64, -0.3, 0.1];
        let right = [-0.8f64, 0.3, -0.1];
        assert_eq!(mean_square_of_mix(&left, &right).unwrap(), 0.0);
        assert_eq!(calculate_volume_db_level(&left, &right).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_matches_direct_formula() {
        let left: Vec<f64> = (0..100).map(|i| (i as f64 * 0.1).sin()).collect();
        let right: Vec<f64> = (0..100).map(|i| 0.5 * (i as f64 * 0.07).cos()).collect();
        let sum: f64 = left
            .iter()
            .zip(&right)
            .map(|(l, r)| ((l + r) / 2.0).powi(2))
            .sum();
        let expected = 20.0 * (sum / 100.0).sqrt().log10();
        assert_approx_eq!(calculate_volume_db_level(&left, &right).unwrap(), expected, 1e-9);
    }

    #[test]
    fn test_rejects_empty_and_mismatched() {
        let empty: [f64; 0] = [];
        assert!(matches!(
            calculate_volume_db_level(&empty, &empty),
            Err(DspError::Parameter(_))
        ));
        let err = calculate_volume_db_level(&[0.1f64, 0.2], &[0.1]).unwrap_err();
        assert_eq!(err, DspError::dimension_mismatch(2, 1, "right channel"));
    }
}
