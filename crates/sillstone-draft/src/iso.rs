//! The 3D isometric projector.
//!
//! Extrudes the cross-section along the length axis under a fixed
//! axonometric transform and emits shaded face polygons plus floating
//! dimension labels. There is no depth sorting: from this one viewing
//! angle every classified face is simultaneously frontal-visible, and the
//! front cap painted last closes the silhouette.

use std::f64::consts::FRAC_PI_6;

use sillstone_math::{Point2, Tolerance, Vec2};
use sillstone_profile::{SectionProfile, StoneSpec};

use crate::types::{
    Anchor, BoundingBox2D, FacePoly, FaceTone, IsoView, Point2D, TextLabel, Viewport,
};

/// Pixel nudge applied to labels so they float clear of their edge.
const LABEL_NUDGE_PX: f64 = 14.0;

/// Classify a lateral face by the direction of its defining profile edge.
///
/// Profile coordinates are x right, y down, so "forward" along the top is
/// +x and "downward" along the outer face is +y. Edges that move both
/// right and down are the chamfer diagonal or bullnose arc samples.
fn classify_edge(delta: Vec2) -> FaceTone {
    let eps = Tolerance::DEFAULT.linear;
    let right = delta.x > eps;
    let left = delta.x < -eps;
    let down = delta.y > eps;
    let up = delta.y < -eps;

    match (right, left, down, up) {
        (true, _, false, false) => FaceTone::Top,
        (false, false, true, _) => FaceTone::OuterSide,
        (false, false, _, true) => FaceTone::InnerLip,
        (_, true, false, false) => FaceTone::Bottom,
        (true, _, true, _) => FaceTone::EdgeCut,
        _ => FaceTone::Bottom,
    }
}

/// Project the extruded profile into a shaded isometric view.
///
/// Both screen basis vectors sit 30° off horizontal; the length axis
/// recedes along the negative-X diagonal:
///
/// ```text
/// sx = (x - z)·cos 30°·s
/// sy = (x + z)·sin 30°·s + y·s
/// ```
///
/// The scale `s` maps the largest of `{W, L, T + Lh}` to `extent_frac` of
/// the viewport's smaller side, and the projected bounding box is centered
/// on the viewport.
pub fn project(
    section: &SectionProfile,
    spec: &StoneSpec,
    viewport: Viewport,
    extent_frac: f64,
) -> IsoView {
    let (cos30, sin30) = (FRAC_PI_6.cos(), FRAC_PI_6.sin());

    let largest = spec
        .width
        .max(spec.length)
        .max(spec.thickness + spec.lip_drop);
    let scale = extent_frac * viewport.width.min(viewport.height) / largest;

    let raw = |p: Point2, z: f64| {
        Point2D::new(
            (p.x - z) * cos30 * scale,
            (p.x + z) * sin30 * scale + p.y * scale,
        )
    };

    // Project both vertex rings, then center the whole drawing.
    let front_raw: Vec<Point2D> = section.points().iter().map(|p| raw(*p, 0.0)).collect();
    let back_raw: Vec<Point2D> = section
        .points()
        .iter()
        .map(|p| raw(*p, spec.length))
        .collect();

    let mut raw_bounds = BoundingBox2D::empty();
    for p in front_raw.iter().chain(back_raw.iter()) {
        raw_bounds.include_point(*p);
    }
    let center = viewport.center();
    let (dx, dy) = (
        center.x - raw_bounds.center().x,
        center.y - raw_bounds.center().y,
    );
    let shift = |p: Point2D| p.offset(dx, dy);

    let front: Vec<Point2D> = front_raw.into_iter().map(shift).collect();
    let back: Vec<Point2D> = back_raw.into_iter().map(shift).collect();

    // One quadrilateral per profile edge, spanning the front and back
    // rings; the back cap is never drawn.
    let n = section.len();
    let mut faces: Vec<FacePoly> = Vec::with_capacity(n + 1);
    for (i, (a, b)) in section.edges().enumerate() {
        let j = (i + 1) % n;
        faces.push(FacePoly {
            points: vec![front[i], front[j], back[j], back[i]],
            tone: classify_edge(b - a),
        });
    }
    faces.push(FacePoly {
        points: front.clone(),
        tone: FaceTone::FrontCap,
    });

    let mut bounds = BoundingBox2D::empty();
    for face in &faces {
        for p in &face.points {
            bounds.include_point(*p);
        }
    }

    let labels = make_labels(spec, |p, z| shift(raw(p, z)));

    IsoView {
        viewport,
        scale,
        faces,
        labels,
        bounds,
    }
}

/// Floating labels for every dimension, placed against representative
/// front-cap or extrusion edges.
fn make_labels(spec: &StoneSpec, project: impl Fn(Point2, f64) -> Point2D) -> Vec<TextLabel> {
    let w = spec.width;
    let t = spec.thickness;
    let lw = spec.lip_width;
    let lh = spec.lip_drop;

    let mut labels = vec![
        TextLabel::new(
            format!("W {w:.0}"),
            project(Point2::new(w / 2.0, 0.0), 0.0).offset(0.0, -LABEL_NUDGE_PX),
            Anchor::Middle,
        ),
        TextLabel::new(
            format!("L {:.0}", spec.length),
            project(Point2::new(0.0, 0.0), spec.length / 2.0).offset(-LABEL_NUDGE_PX, -6.0),
            Anchor::End,
        ),
        TextLabel::new(
            format!("T {t:.0}"),
            project(Point2::new(w, t / 2.0), 0.0).offset(LABEL_NUDGE_PX, 0.0),
            Anchor::Start,
        ),
        TextLabel::new(
            format!("Lh {lh:.0}"),
            project(Point2::new(w, t + lh / 2.0), 0.0).offset(LABEL_NUDGE_PX, 0.0),
            Anchor::Start,
        ),
        TextLabel::new(
            format!("Lw {lw:.0}"),
            project(Point2::new(w - lw / 2.0, t + lh), 0.0).offset(0.0, LABEL_NUDGE_PX + 4.0),
            Anchor::Middle,
        ),
    ];

    if spec.edge_depth > 0.0 {
        let tr = spec.edge_depth;
        labels.push(TextLabel::new(
            format!("Tr {tr:.0}"),
            project(Point2::new(w - tr / 2.0, tr / 2.0), 0.0).offset(LABEL_NUDGE_PX, -8.0),
            Anchor::Start,
        ));
    }

    labels
}
