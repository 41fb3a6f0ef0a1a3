#![warn(missing_docs)]

//! Closed-form volume computation for L-profile stone solids.
//!
//! The solid decomposes exactly into prisms, so no numerical integration
//! (and none of the cross-section polygon's arc discretization) is
//! involved:
//!
//! - slab prism `L·W·T` plus lip prism `L·Lw·Lh`
//! - minus the edge-treatment prism removed from the top-outer edge:
//!   a right isosceles triangle `½·Tr²` for a chamfer, or a square minus
//!   its inscribed quarter circle `Tr²·(1 − π/4)` for a bullnose
//!
//! All results are in cubic millimeters; display-unit conversion is the
//! caller's concern.

use std::f64::consts::FRAC_PI_4;

use sillstone_profile::{EdgeTreatment, StoneSpec};

/// Volume of one piece broken into its decomposition terms, in mm³.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeBreakdown {
    /// Slab plus lip prism volume before edge removal.
    pub base_mm3: f64,
    /// Material removed by the edge treatment.
    pub edge_removed_mm3: f64,
    /// Volume of a single piece.
    pub unit_mm3: f64,
    /// `unit_mm3` times the piece quantity.
    pub total_mm3: f64,
}

/// Cross-section-times-length volume removed by a chamfer of leg `edge_depth`.
///
/// The removed cross-section is a right isosceles triangle whose *legs* are
/// `edge_depth`; the area is `½·Tr²`. Using the hypotenuse (`Tr·√2`) in
/// place of a leg would exactly double the result.
pub fn chamfer_removed(edge_depth: f64, length: f64) -> f64 {
    0.5 * edge_depth * edge_depth * length
}

/// Volume removed by a bullnose of radius `edge_depth`: a `Tr × Tr` square
/// minus its inscribed quarter circle, extruded over `length`.
pub fn bullnose_removed(edge_depth: f64, length: f64) -> f64 {
    edge_depth * edge_depth * (1.0 - FRAC_PI_4) * length
}

/// Compute the volume of a *validated* spec.
///
/// Pure and panic-free; invariant checking is the validator's job and is
/// not repeated here. The single-unit result is floored at zero so a
/// near-boundary input cannot round to a negative volume.
pub fn solid_volume(spec: &StoneSpec) -> VolumeBreakdown {
    let base_mm3 =
        spec.length * (spec.width * spec.thickness + spec.lip_width * spec.lip_drop);

    let edge_removed_mm3 = match spec.edge {
        EdgeTreatment::Chamfer => chamfer_removed(spec.edge_depth, spec.length),
        EdgeTreatment::Bullnose => bullnose_removed(spec.edge_depth, spec.length),
    };

    let unit_mm3 = (base_mm3 - edge_removed_mm3).max(0.0);
    let total_mm3 = unit_mm3 * f64::from(spec.quantity);

    VolumeBreakdown {
        base_mm3,
        edge_removed_mm3,
        unit_mm3,
        total_mm3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn reference_spec(edge: EdgeTreatment) -> StoneSpec {
        StoneSpec {
            length: 1000.0,
            width: 700.0,
            thickness: 100.0,
            lip_width: 150.0,
            lip_drop: 200.0,
            edge_depth: 50.0,
            edge,
            quantity: 1,
        }
    }

    #[test]
    fn test_chamfer_reference_piece() {
        let v = solid_volume(&reference_spec(EdgeTreatment::Chamfer));
        assert_relative_eq!(v.base_mm3, 100_000_000.0);
        assert_relative_eq!(v.edge_removed_mm3, 1_250_000.0);
        assert_relative_eq!(v.unit_mm3, 98_750_000.0);
        assert_relative_eq!(v.total_mm3, 98_750_000.0);
    }

    #[test]
    fn test_bullnose_reference_piece() {
        let v = solid_volume(&reference_spec(EdgeTreatment::Bullnose));
        assert_relative_eq!(v.base_mm3, 100_000_000.0);
        assert_relative_eq!(v.edge_removed_mm3, 536_504.59, max_relative = 1e-4);
        assert_relative_eq!(v.unit_mm3, 99_463_495.41, max_relative = 1e-6);
    }

    #[test]
    fn test_chamfer_uses_leg_not_hypotenuse() {
        // ½·Tr²·L, never ½·(Tr·√2)²·L — the hypotenuse substitution is
        // exactly double.
        assert_relative_eq!(chamfer_removed(50.0, 1000.0), 1_250_000.0);
        let hypotenuse = 50.0 * 2.0_f64.sqrt();
        assert_relative_eq!(
            0.5 * hypotenuse * hypotenuse * 1000.0,
            2.0 * chamfer_removed(50.0, 1000.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_edge_depth_is_exactly_base() {
        for edge in [EdgeTreatment::Chamfer, EdgeTreatment::Bullnose] {
            let spec = StoneSpec {
                edge_depth: 0.0,
                ..reference_spec(edge)
            };
            let v = solid_volume(&spec);
            assert_eq!(v.unit_mm3, v.base_mm3);
            assert_eq!(v.edge_removed_mm3, 0.0);
        }
    }

    #[test]
    fn test_near_boundary_depth_stays_non_negative() {
        // Thin sliver of a slab with the edge depth almost at the
        // thickness; the floor guards roundoff, not invalid input.
        let spec = StoneSpec {
            length: 1.0,
            width: 1.0,
            thickness: 1.0,
            lip_width: 0.5,
            lip_drop: 0.001,
            edge_depth: 1.0 - 1e-12,
            edge: EdgeTreatment::Chamfer,
            quantity: 1,
        };
        assert!(solid_volume(&spec).unit_mm3 >= 0.0);
    }

    proptest! {
        #[test]
        fn prop_volume_linear_in_quantity(
            length in 1.0..5000.0f64,
            width in 1.0..2000.0f64,
            thickness in 1.0..500.0f64,
            lip_frac in 0.01..0.99f64,
            lip_drop in 1.0..1000.0f64,
            depth_frac in 0.0..0.99f64,
            quantity in 1u32..500,
        ) {
            let spec = StoneSpec {
                length,
                width,
                thickness,
                lip_width: width * lip_frac,
                lip_drop,
                edge_depth: thickness * depth_frac,
                edge: EdgeTreatment::Chamfer,
                quantity,
            };
            prop_assert!(spec.validate().is_ok());

            let v = solid_volume(&spec);
            let single = solid_volume(&StoneSpec { quantity: 1, ..spec });
            prop_assert_eq!(v.total_mm3, single.unit_mm3 * f64::from(quantity));
            prop_assert!(v.unit_mm3 >= 0.0);
        }

        #[test]
        fn prop_chamfer_removes_more_than_bullnose(
            edge_depth in 1e-6..500.0f64,
            length in 1e-6..5000.0f64,
        ) {
            // Triangle factor ½ strictly dominates the bullnose factor
            // 1 − π/4 ≈ 0.215.
            prop_assert!(chamfer_removed(edge_depth, length) > bullnose_removed(edge_depth, length));
        }
    }
}
