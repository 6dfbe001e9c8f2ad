//! Angle normalization shared by the longitude providers and the classifiers.

/// Normalize an angle to [0, 360) degrees.
///
/// Inputs already in [0, 360) come back bit-for-bit unchanged, so
/// normalizing twice gives the same value as normalizing once. A tiny
/// negative input whose wrapped value rounds up to 360 maps to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_out_of_range() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert_eq!(normalize_360(-30.0), 330.0);
        assert_eq!(normalize_360(725.0), 5.0);
        assert_eq!(normalize_360(-370.0), 350.0);
    }

    #[test]
    fn in_range_values_unchanged() {
        assert_eq!(normalize_360(0.1), 0.1);
        assert_eq!(normalize_360(360.0 / 27.0), 360.0 / 27.0);
        assert_eq!(normalize_360(180.0007), 180.0007);
        assert_eq!(normalize_360(359.999_999_999), 359.999_999_999);
    }

    #[test]
    fn tiny_negative_folds_to_zero() {
        assert_eq!(normalize_360(-1e-20), 0.0);
        assert!(normalize_360(-1e-14) < 360.0);
        assert!(normalize_360(-f64::MIN_POSITIVE) < 360.0);
    }

    #[test]
    fn idempotent_on_dense_grid() {
        for i in -180_000..=180_000 {
            let x = i as f64 * 0.0013;
            let once = normalize_360(x);
            assert!((0.0..360.0).contains(&once), "{x} -> {once}");
            assert_eq!(normalize_360(once), once, "x = {x}");
        }
    }
}
