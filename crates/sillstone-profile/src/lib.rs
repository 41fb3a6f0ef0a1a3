#![warn(missing_docs)]

//! Parameter set, validation and cross-section construction for the
//! sillstone engine.
//!
//! The solid being modeled is an extruded L-profile: a flat slab with a
//! narrower lip hanging from one underside edge, with an optional treatment
//! of the top-outer edge (a 45° chamfer or a quarter-circle bullnose).
//!
//! This crate provides:
//!
//! - [`StoneSpec`]: the scalar parameters describing one piece
//! - [`StoneSpec::validate`]: invariant checking that collects every
//!   violation instead of stopping at the first
//! - [`SectionProfile`]: the ordered boundary polygon of the cross-section,
//!   used by the 2D and 3D projectors (display only — never for volume)
//! - [`autofit_bullnose_radius`]: the closed-form radius that makes the
//!   bullnose arc pass through the inner lip corner
//!
//! # Example
//!
//! ```
//! use sillstone_profile::{SectionProfile, StoneSpec};
//!
//! let spec = StoneSpec::default();
//! spec.validate().unwrap();
//! let section = SectionProfile::build(&spec, 12);
//! assert!(section.points().len() >= 6);
//! ```

mod autofit;
mod section;
mod spec;

pub use autofit::autofit_bullnose_radius;
pub use section::{EdgeGeometry, SectionProfile};
pub use spec::{EdgeTreatment, Field, StoneSpec, Violation};
