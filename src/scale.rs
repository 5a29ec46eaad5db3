/// Affine map of `input` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// The product is taken before the division so integer-valued inputs whose
/// ranges match map back onto themselves exactly.
pub fn scale_linear(input: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (input - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Rescale sample magnitudes into `[target_min, target_max]`.
///
/// Signs are dropped first: the renderers treat the waveform as an unsigned
/// height, so `-4` and `4` end up at the same place. The magnitudes are then
/// mapped from their own `[min, max]` onto the target range with integer
/// arithmetic. Silent or constant input has no range to map from and yields
/// `target_min` for every sample.
///
/// ```
/// use wavshape::scale_between;
///
/// assert_eq!(scale_between(&[-4, 0, 5, 6, 9], 0, 100), vec![44, 0, 55, 66, 100]);
/// ```
pub fn scale_between(samples: &[i16], target_min: i16, target_max: i16) -> Vec<i16> {
    let magnitudes: Vec<i64> = samples.iter().map(|&s| i64::from(s).abs()).collect();

    let (Some(&min), Some(&max)) = (magnitudes.iter().min(), magnitudes.iter().max()) else {
        return Vec::new();
    };

    if min == max {
        return vec![target_min; samples.len()];
    }

    let span = i64::from(target_max) - i64::from(target_min);

    magnitudes
        .iter()
        .map(|&m| (span * (m - min) / (max - min) + i64::from(target_min)) as i16)
        .collect()
}
