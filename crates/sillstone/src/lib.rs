#![warn(missing_docs)]

//! sillstone — exact volume and live drawings for L-profile stone solids.
//!
//! A piece is a flat slab with a lip hanging from one underside edge and
//! an optional top-edge treatment (45° chamfer or quarter-circle
//! bullnose). This crate ties the engine together into the one synchronous
//! pipeline the surrounding UI calls on every edit:
//!
//! validate → compute volume → build cross-section → project for the
//! active view.
//!
//! Nothing survives between two calls of [`evaluate`]; a new result
//! entirely supersedes the previous one.
//!
//! # Example
//!
//! ```
//! use sillstone::{evaluate, RenderOptions, StoneSpec, ViewMode};
//!
//! let spec = StoneSpec::default();
//! let result = evaluate(&spec, ViewMode::Plan, &RenderOptions::default());
//! assert!(result.violations.is_empty());
//! let volume = result.volume.unwrap();
//! assert!(volume.unit_mm3 > 0.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

mod format;
mod options;

pub mod export;

pub use format::format_volume_m3;
pub use options::{ConfigError, RenderOptions};

pub use sillstone_draft::{IsoView, PlanView, Viewport};
pub use sillstone_profile::{
    autofit_bullnose_radius, EdgeTreatment, Field, SectionProfile, StoneSpec, Violation,
};
pub use sillstone_volume::{solid_volume, VolumeBreakdown};

/// Which projection the active view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Annotated 2D cross-section.
    #[default]
    Plan,
    /// Shaded 3D isometric rendering.
    Isometric,
}

/// The drawing produced for the active view mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewArtifact {
    /// 2D plan drawing.
    Plan(PlanView),
    /// 3D isometric drawing.
    Isometric(IsoView),
}

/// Result of one full pipeline pass.
///
/// When `violations` is non-empty, `volume` and `view` are `None`: the
/// display layer shows its placeholder rather than a computed value, so an
/// invalid configuration can never masquerade as a zero-volume piece.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Invariant violations; empty for a valid parameter set.
    pub violations: Vec<Violation>,
    /// Volume breakdown, present only for valid input.
    pub volume: Option<VolumeBreakdown>,
    /// Drawing for the requested view mode, present only for valid input.
    pub view: Option<ViewArtifact>,
}

impl Evaluation {
    /// Whether the parameter set passed validation.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Run the full synchronous pipeline for one parameter set.
///
/// Validation gates everything: on any violation the volume calculator and
/// projectors are not invoked at all. Valid input flows through the volume
/// decomposition, a single cross-section build, and the projector for the
/// requested mode.
#[instrument(level = "debug", skip_all, fields(mode = ?mode, edge = ?spec.edge))]
pub fn evaluate(spec: &StoneSpec, mode: ViewMode, opts: &RenderOptions) -> Evaluation {
    if let Err(violations) = spec.validate() {
        debug!(count = violations.len(), "parameter set rejected");
        return Evaluation {
            violations,
            volume: None,
            view: None,
        };
    }

    let volume = solid_volume(spec);
    let section = SectionProfile::build(spec, opts.arc_segments);
    debug!(
        unit_mm3 = volume.unit_mm3,
        vertices = section.len(),
        "volume and cross-section computed"
    );

    let viewport = opts.viewport();
    let view = match mode {
        ViewMode::Plan => ViewArtifact::Plan(sillstone_draft::plan::project(
            &section,
            spec,
            viewport,
            opts.margin_frac,
        )),
        ViewMode::Isometric => ViewArtifact::Isometric(sillstone_draft::iso::project(
            &section,
            spec,
            viewport,
            opts.iso_extent_frac,
        )),
    };

    Evaluation {
        violations: Vec::new(),
        volume: Some(volume),
        view: Some(view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_end_to_end_chamfer_reference() {
        let result = evaluate(
            &reference_spec(EdgeTreatment::Chamfer),
            ViewMode::Plan,
            &RenderOptions::default(),
        );
        assert!(result.is_valid());

        let v = result.volume.unwrap();
        assert!((v.base_mm3 - 100_000_000.0).abs() < 1e-3);
        assert!((v.edge_removed_mm3 - 1_250_000.0).abs() < 1e-3);
        assert!((v.unit_mm3 - 98_750_000.0).abs() < 1e-3);
        assert_eq!(format_volume_m3(v.unit_mm3), "0.098750");

        let Some(ViewArtifact::Plan(plan)) = result.view else {
            panic!("expected a plan view");
        };
        assert_eq!(plan.outline.points.len(), 7);
        assert_eq!(plan.dimensions.len(), 5);
    }

    #[test]
    fn test_end_to_end_bullnose_reference() {
        let result = evaluate(
            &reference_spec(EdgeTreatment::Bullnose),
            ViewMode::Isometric,
            &RenderOptions::default(),
        );
        let v = result.volume.unwrap();
        // 2500 · (1 − π/4) · 1000
        assert!((v.edge_removed_mm3 - 536_504.59).abs() < 1.0);
        assert!((v.unit_mm3 - 99_463_495.41).abs() < 1.0);
        assert_eq!(format_volume_m3(v.unit_mm3), "0.099463");

        let Some(ViewArtifact::Isometric(iso)) = result.view else {
            panic!("expected an isometric view");
        };
        // 18 lateral faces plus the front cap.
        assert_eq!(iso.faces.len(), 19);
    }

    #[test]
    fn test_invalid_spec_suppresses_everything_downstream() {
        let spec = StoneSpec {
            lip_width: 700.0,
            ..reference_spec(EdgeTreatment::Chamfer)
        };
        let result = evaluate(&spec, ViewMode::Plan, &RenderOptions::default());
        assert_eq!(result.violations, vec![Violation::LipWiderThanSlab]);
        assert!(result.volume.is_none());
        assert!(result.view.is_none());
    }

    #[test]
    fn test_quantity_scales_total_only() {
        let spec = StoneSpec {
            quantity: 4,
            ..reference_spec(EdgeTreatment::Chamfer)
        };
        let v = evaluate(&spec, ViewMode::Plan, &RenderOptions::default())
            .volume
            .unwrap();
        assert_eq!(v.total_mm3, v.unit_mm3 * 4.0);
    }

    #[test]
    fn test_arc_segments_option_reaches_the_builder() {
        let opts = RenderOptions {
            arc_segments: 24,
            ..RenderOptions::default()
        };
        let result = evaluate(
            &reference_spec(EdgeTreatment::Bullnose),
            ViewMode::Plan,
            &opts,
        );
        let Some(ViewArtifact::Plan(plan)) = result.view else {
            panic!("expected a plan view");
        };
        assert_eq!(plan.outline.points.len(), 6 + 24);
    }
}
