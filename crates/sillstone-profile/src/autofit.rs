//! Closed-form auto-fit for the bullnose radius.

/// Radius of the bullnose arc that is tangent to the top and outer faces
/// and passes exactly through the inner lip corner.
///
/// The candidate center sits at `(W - Tr, Tr)`, one radius in from both
/// treated faces; requiring its distance to the inner corner
/// `(W - Lw, T)` to equal `Tr` gives
///
/// ```text
/// Tr² - 2(Lw + T)·Tr + (Lw² + T²) = 0
/// ```
///
/// whose smaller root is `Lw + T - √(2·Lw·T)` (the larger root puts the
/// center past the corner). The result only depends on the lip width and
/// slab thickness, not on the slab width.
///
/// Both inputs must be strictly positive; callers guard with the same
/// positivity invariants the validator enforces.
pub fn autofit_bullnose_radius(lip_width: f64, thickness: f64) -> f64 {
    debug_assert!(
        lip_width > 0.0 && thickness > 0.0,
        "autofit requires positive lip width and thickness"
    );
    lip_width + thickness - (2.0 * lip_width * thickness).sqrt()
}
