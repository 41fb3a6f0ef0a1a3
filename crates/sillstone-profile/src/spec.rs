//! The parameter set and its invariant checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Treatment applied to the top-outer edge of the slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EdgeTreatment {
    /// Flat 45° bevel; `edge_depth` is the leg length of the cut triangle.
    #[default]
    Chamfer,
    /// Rounded quarter-circle edge; `edge_depth` is the arc radius.
    Bullnose,
}

/// The scalar parameters describing one L-profile stone piece.
///
/// All lengths are in millimeters. The cross-section lives in a plane with
/// x running rightward across the slab and y running *downward* from the
/// top face (the lip hangs toward +y); the treated corner is at
/// `(width, 0)`. The piece is extruded over `length` along the third axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoneSpec {
    /// Extrusion length `L`.
    pub length: f64,
    /// Total slab width `W`.
    pub width: f64,
    /// Flat slab thickness `T`.
    pub thickness: f64,
    /// Lip width `Lw`; must stay below `width`.
    pub lip_width: f64,
    /// Lip drop height `Lh` below the slab underside.
    pub lip_drop: f64,
    /// Chamfer leg length or bullnose radius `Tr`; zero means a sharp edge.
    #[serde(default)]
    pub edge_depth: f64,
    /// Which treatment `edge_depth` describes.
    #[serde(default)]
    pub edge: EdgeTreatment,
    /// Number of identical pieces.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl Default for StoneSpec {
    /// A plausible showroom piece: 1000 × 700 × 100 slab, 150 × 200 lip,
    /// sharp edge, single piece.
    fn default() -> Self {
        Self {
            length: 1000.0,
            width: 700.0,
            thickness: 100.0,
            lip_width: 150.0,
            lip_drop: 200.0,
            edge_depth: 0.0,
            edge: EdgeTreatment::Chamfer,
            quantity: 1,
        }
    }
}

/// The input field a [`Violation`] implicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `length`
    Length,
    /// `width`
    Width,
    /// `thickness`
    Thickness,
    /// `lip_width`
    LipWidth,
    /// `lip_drop`
    LipDrop,
    /// `edge_depth`
    EdgeDepth,
    /// `quantity`
    Quantity,
}

/// A single invariant violation.
///
/// Invalid input is a normal, expected return value of
/// [`StoneSpec::validate`] — nothing in this crate panics on it. The
/// `Display` impl carries the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// `length` must be strictly positive.
    #[error("length must be greater than zero")]
    NonPositiveLength,
    /// `width` must be strictly positive.
    #[error("width must be greater than zero")]
    NonPositiveWidth,
    /// `thickness` must be strictly positive.
    #[error("thickness must be greater than zero")]
    NonPositiveThickness,
    /// `lip_width` must be strictly positive.
    #[error("lip width must be greater than zero")]
    NonPositiveLipWidth,
    /// `lip_drop` must be strictly positive.
    #[error("lip drop must be greater than zero")]
    NonPositiveLipDrop,
    /// `lip_width` must stay below `width`.
    #[error("lip width must be less than the slab width")]
    LipWiderThanSlab,
    /// `edge_depth` may not be negative.
    #[error("edge depth must not be negative")]
    NegativeEdgeDepth,
    /// A positive `edge_depth` must stay below the slab thickness.
    #[error("edge depth must be less than the slab thickness")]
    EdgeDepthExceedsThickness,
    /// `quantity` must be at least one.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

impl Violation {
    /// The field this violation implicates, for callers that mark inputs.
    pub fn field(&self) -> Field {
        match self {
            Violation::NonPositiveLength => Field::Length,
            Violation::NonPositiveWidth => Field::Width,
            Violation::NonPositiveThickness => Field::Thickness,
            Violation::NonPositiveLipWidth => Field::LipWidth,
            Violation::NonPositiveLipDrop => Field::LipDrop,
            Violation::LipWiderThanSlab => Field::LipWidth,
            Violation::NegativeEdgeDepth => Field::EdgeDepth,
            Violation::EdgeDepthExceedsThickness => Field::EdgeDepth,
            Violation::ZeroQuantity => Field::Quantity,
        }
    }
}

impl StoneSpec {
    /// Check every invariant and collect all violations in one pass.
    ///
    /// Relationship checks (`lip_width < width`, `edge_depth < thickness`)
    /// are only evaluated once the fields they relate are individually
    /// valid, so a single bad field reports one violation, not a cascade.
    pub fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();

        if self.length <= 0.0 {
            violations.push(Violation::NonPositiveLength);
        }
        if self.width <= 0.0 {
            violations.push(Violation::NonPositiveWidth);
        }
        if self.thickness <= 0.0 {
            violations.push(Violation::NonPositiveThickness);
        }
        if self.lip_width <= 0.0 {
            violations.push(Violation::NonPositiveLipWidth);
        }
        if self.lip_drop <= 0.0 {
            violations.push(Violation::NonPositiveLipDrop);
        }
        if self.lip_width > 0.0 && self.width > 0.0 && self.lip_width >= self.width {
            violations.push(Violation::LipWiderThanSlab);
        }
        if self.edge_depth < 0.0 {
            violations.push(Violation::NegativeEdgeDepth);
        }
        if self.edge_depth > 0.0 && self.thickness > 0.0 && self.edge_depth >= self.thickness {
            violations.push(Violation::EdgeDepthExceedsThickness);
        }
        if self.quantity < 1 {
            violations.push(Violation::ZeroQuantity);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_is_valid() {
        assert!(StoneSpec::default().validate().is_ok());
    }

    #[test]
    fn test_lip_equal_to_width_reports_single_violation() {
        let spec = StoneSpec {
            width: 700.0,
            lip_width: 700.0,
            ..StoneSpec::default()
        };
        let violations = spec.validate().unwrap_err();
        assert_eq!(violations, vec![Violation::LipWiderThanSlab]);
        assert_eq!(violations[0].field(), Field::LipWidth);
    }

    #[test]
    fn test_all_violations_collected() {
        let spec = StoneSpec {
            length: 0.0,
            width: -1.0,
            thickness: 0.0,
            lip_width: 0.0,
            lip_drop: -5.0,
            edge_depth: -1.0,
            edge: EdgeTreatment::Bullnose,
            quantity: 0,
        };
        let violations = spec.validate().unwrap_err();
        assert_eq!(
            violations,
            vec![
                Violation::NonPositiveLength,
                Violation::NonPositiveWidth,
                Violation::NonPositiveThickness,
                Violation::NonPositiveLipWidth,
                Violation::NonPositiveLipDrop,
                Violation::NegativeEdgeDepth,
                Violation::ZeroQuantity,
            ]
        );
    }

    #[test]
    fn test_edge_depth_at_thickness_rejected() {
        let spec = StoneSpec {
            edge_depth: 100.0,
            ..StoneSpec::default()
        };
        let violations = spec.validate().unwrap_err();
        assert_eq!(violations, vec![Violation::EdgeDepthExceedsThickness]);

        // Just below the boundary is fine.
        let spec = StoneSpec {
            edge_depth: 99.999,
            ..StoneSpec::default()
        };
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_zero_edge_depth_is_valid() {
        let spec = StoneSpec {
            edge_depth: 0.0,
            ..StoneSpec::default()
        };
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_violation_messages_name_the_problem() {
        assert_eq!(
            Violation::LipWiderThanSlab.to_string(),
            "lip width must be less than the slab width"
        );
        assert_eq!(
            Violation::EdgeDepthExceedsThickness.to_string(),
            "edge depth must be less than the slab thickness"
        );
    }

    #[test]
    fn test_spec_from_toml() {
        let spec: StoneSpec = toml::from_str(
            r#"
            length = 1200.0
            width = 600.0
            thickness = 30.0
            lip_width = 40.0
            lip_drop = 60.0
            edge_depth = 8.0
            edge = "bullnose"
            "#,
        )
        .unwrap();
        assert_eq!(spec.edge, EdgeTreatment::Bullnose);
        assert_eq!(spec.quantity, 1);
        assert!(spec.validate().is_ok());
    }
}
