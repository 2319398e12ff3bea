//! Fixed-decimal rounding for surfaced figures.

/// Rounds `value` to `decimals` decimal places (half away from zero).
///
/// Surfaced risk figures are rounded once, at the edge of the estimator;
/// intermediate calculations always run at full precision.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rounds_to_six_decimals() {
        assert_relative_eq!(round_to(-0.021_456_789, 6), -0.021_457);
        assert_relative_eq!(round_to(0.123_456_4, 6), 0.123_456);
    }

    #[test]
    fn test_idempotent() {
        let once = round_to(0.081_234_567, 6);
        assert_eq!(once, round_to(once, 6));
    }

    #[test]
    fn test_zero_decimals() {
        assert_relative_eq!(round_to(2.5, 0), 3.0);
        assert_relative_eq!(round_to(-2.5, 0), -3.0);
    }
}
