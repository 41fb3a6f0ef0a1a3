#![warn(missing_docs)]

//! 2D and 3D drawing generation for the sillstone engine.
//!
//! Turns a [`sillstone_profile::SectionProfile`] into display-ready
//! primitives:
//!
//! - **Plan view** ([`plan::project`]): the cross-section scaled and
//!   centered into a viewport with dimension annotations for every input
//!   value, plus construction geometry for the edge treatment
//! - **Isometric view** ([`iso::project`]): the profile extruded along the
//!   length axis under a fixed axonometric transform, one shaded face per
//!   profile edge plus the front cap, with floating dimension labels
//!
//! All outputs are plain serde-serializable primitives with no retained
//! state; callers re-project on every parameter change.
//!
//! # Example
//!
//! ```
//! use sillstone_draft::{plan, Viewport};
//! use sillstone_profile::{SectionProfile, StoneSpec};
//!
//! let spec = StoneSpec::default();
//! let section = SectionProfile::build(&spec, 12);
//! let view = plan::project(&section, &spec, Viewport::new(800.0, 600.0), 0.12);
//! assert_eq!(view.dimensions.len(), 4);
//! ```

pub mod iso;
pub mod plan;
pub mod types;

pub use types::{
    Anchor, Arrowhead, BoundingBox2D, CircleMark, DimKind, Dimension, FacePoly, FaceTone, IsoView,
    PlanView, Point2D, PolyLine, StrokeKind, TextLabel, Viewport,
};
