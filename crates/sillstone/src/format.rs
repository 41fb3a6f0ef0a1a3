//! Display formatting for volume results.

/// Volumes below this many m³ switch to scientific notation.
const SCIENTIFIC_BELOW_M3: f64 = 1.0e-4;

/// Format an internal mm³ volume for display in m³.
///
/// Display policy: exact zero renders as a placeholder dash (the same
/// glyph the UI shows for an invalid configuration), tiny magnitudes
/// switch to scientific notation with four fractional digits, everything
/// else is fixed-point with six fractional digits.
pub fn format_volume_m3(mm3: f64) -> String {
    if mm3 == 0.0 {
        return "—".to_string();
    }
    let m3 = mm3 / 1.0e9;
    if m3 < SCIENTIFIC_BELOW_M3 {
        format!("{m3:.4e}")
    } else {
        format!("{m3:.6}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_a_dash() {
        assert_eq!(format_volume_m3(0.0), "—");
    }

    #[test]
    fn test_fixed_point_six_digits() {
        assert_eq!(format_volume_m3(98_750_000.0), "0.098750");
        assert_eq!(format_volume_m3(99_463_495.41), "0.099463");
        assert_eq!(format_volume_m3(1.0e9), "1.000000");
    }

    #[test]
    fn test_tiny_volumes_go_scientific() {
        // 50,000 mm³ = 5e-5 m³, below the 1e-4 threshold.
        assert_eq!(format_volume_m3(50_000.0), "5.0000e-5");
    }

    #[test]
    fn test_threshold_boundary_is_fixed_point() {
        assert_eq!(format_volume_m3(100_000.0), "0.000100");
    }
}
