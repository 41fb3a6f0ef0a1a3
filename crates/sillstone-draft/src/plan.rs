//! The 2D dimensioned plan projector.
//!
//! Maps the cross-section polygon into a scaled, centered drawing and
//! attaches one dimension annotation per input value (`W`, `T`, `Lw`,
//! `Lh`, and `Tr` when the edge treatment is drawable).

use sillstone_math::Point2;
use sillstone_profile::{EdgeGeometry, SectionProfile, StoneSpec};

use crate::types::{
    Anchor, Arrowhead, BoundingBox2D, CircleMark, DimKind, Dimension, PlanView, Point2D, PolyLine,
    StrokeKind, TextLabel, Viewport,
};

/// Pixel offset of dimension leaders from the geometry they measure.
const DIM_OFFSET_PX: f64 = 28.0;

/// Extra pixel offset of the value label beyond its leader line.
const LABEL_OFFSET_PX: f64 = 12.0;

/// Arm length of the chamfer right-angle corner marker.
const CORNER_MARK_PX: f64 = 7.0;

/// Radius of the bullnose center dot.
const CENTER_DOT_PX: f64 = 2.5;

/// Cosmetic threshold: when the treated edge projects below this many
/// pixels its annotation set is skipped. Topology is unaffected — the
/// builder already branched on `edge_depth > 0`.
const MIN_EDGE_PX: f64 = 0.5;

/// Project the cross-section into an annotated plan drawing.
///
/// The scale fits the profile's `W × (T + Lh)` bounding box into the
/// viewport minus `margin_frac` on every side, preserving aspect ratio,
/// and the result is centered on both axes.
///
/// This function has no error path: for degenerate `width` or `thickness`
/// it produces an empty view and defers to the validator having already
/// gated the caller.
pub fn project(
    section: &SectionProfile,
    spec: &StoneSpec,
    viewport: Viewport,
    margin_frac: f64,
) -> PlanView {
    if spec.width <= 0.0 || spec.thickness <= 0.0 {
        return PlanView::empty(viewport);
    }

    let bb = section.bounds();
    let usable_w = viewport.width * (1.0 - 2.0 * margin_frac);
    let usable_h = viewport.height * (1.0 - 2.0 * margin_frac);
    let scale = (usable_w / bb.width()).min(usable_h / bb.height());

    let ox = (viewport.width - bb.width() * scale) / 2.0 - bb.min.x * scale;
    let oy = (viewport.height - bb.height() * scale) / 2.0 - bb.min.y * scale;
    let map = |p: Point2| Point2D::new(ox + p.x * scale, oy + p.y * scale);

    let outline = PolyLine::closed(section.points().iter().map(|p| map(*p)).collect());

    let w = spec.width;
    let t = spec.thickness;
    let lw = spec.lip_width;
    let lh = spec.lip_drop;
    let tr = spec.edge_depth;

    let mut dimensions = vec![
        linear_dimension(
            DimKind::Width,
            map(Point2::new(0.0, 0.0)),
            map(Point2::new(w, 0.0)),
            (0.0, -1.0),
            format!("{w:.0} mm"),
        ),
        linear_dimension(
            DimKind::Thickness,
            map(Point2::new(0.0, 0.0)),
            map(Point2::new(0.0, t)),
            (-1.0, 0.0),
            format!("{t:.0} mm"),
        ),
        linear_dimension(
            DimKind::LipDrop,
            map(Point2::new(w, t)),
            map(Point2::new(w, t + lh)),
            (1.0, 0.0),
            format!("{lh:.0} mm"),
        ),
        linear_dimension(
            DimKind::LipWidth,
            map(Point2::new(w - lw, t + lh)),
            map(Point2::new(w, t + lh)),
            (0.0, 1.0),
            format!("{lw:.0} mm"),
        ),
    ];

    let mut construction = Vec::new();
    let mut circles = Vec::new();

    if tr * scale >= MIN_EDGE_PX {
        match section.edge_geometry() {
            EdgeGeometry::Sharp => {}
            EdgeGeometry::Chamfer { top, side } => {
                let corner = map(Point2::new(w, 0.0));
                let top = map(top);
                let side = map(side);

                // Dashed legs of the removed triangle, then a right-angle
                // marker tucked into the cut-off corner.
                construction.push(PolyLine::open(vec![top, corner], StrokeKind::Dashed));
                construction.push(PolyLine::open(vec![corner, side], StrokeKind::Dashed));
                construction.push(PolyLine::open(
                    vec![
                        corner.offset(-CORNER_MARK_PX, 0.0),
                        corner.offset(-CORNER_MARK_PX, CORNER_MARK_PX),
                        corner.offset(0.0, CORNER_MARK_PX),
                    ],
                    StrokeKind::Solid,
                ));

                dimensions.push(linear_dimension(
                    DimKind::EdgeDepth,
                    map(Point2::new(w, 0.0)),
                    map(Point2::new(w, tr)),
                    (1.0, 0.0),
                    format!("{tr:.0} mm"),
                ));
            }
            EdgeGeometry::Bullnose { center, radius } => {
                // Full reference circle plus its center, so the radius is
                // legible against the quarter arc actually drawn.
                circles.push(CircleMark {
                    center: map(center),
                    radius: radius * scale,
                    stroke: StrokeKind::Dashed,
                    filled: false,
                });
                circles.push(CircleMark {
                    center: map(center),
                    radius: CENTER_DOT_PX,
                    stroke: StrokeKind::Solid,
                    filled: true,
                });

                dimensions.push(radius_dimension(map(center), center, radius, scale));
            }
        }
    }

    let mut bounds = BoundingBox2D::empty();
    for p in &outline.points {
        bounds.include_point(*p);
    }
    for line in &construction {
        for p in &line.points {
            bounds.include_point(*p);
        }
    }
    for c in &circles {
        bounds.include_point(c.center.offset(-c.radius, -c.radius));
        bounds.include_point(c.center.offset(c.radius, c.radius));
    }
    for d in &dimensions {
        bounds.include_point(d.start);
        bounds.include_point(d.end);
        bounds.include_point(d.label.at);
    }

    PlanView {
        viewport,
        scale,
        outline,
        construction,
        circles,
        dimensions,
        bounds,
    }
}

/// A linear dimension: leader offset from the measured segment by
/// [`DIM_OFFSET_PX`] along `offset_dir`, outward-pointing arrowheads at
/// both ends, value label centered past the leader.
fn linear_dimension(
    measure: DimKind,
    a: Point2D,
    b: Point2D,
    offset_dir: (f64, f64),
    text: String,
) -> Dimension {
    let (ox, oy) = (offset_dir.0 * DIM_OFFSET_PX, offset_dir.1 * DIM_OFFSET_PX);
    let start = a.offset(ox, oy);
    let end = b.offset(ox, oy);

    let len = start.distance(&end).max(1e-12);
    let dir = Point2D::new((end.x - start.x) / len, (end.y - start.y) / len);

    let label_at = start.midpoint(&end).offset(
        offset_dir.0 * LABEL_OFFSET_PX,
        offset_dir.1 * LABEL_OFFSET_PX,
    );

    Dimension {
        measure,
        start,
        end,
        arrows: vec![
            Arrowhead {
                at: start,
                dir: Point2D::new(-dir.x, -dir.y),
            },
            Arrowhead { at: end, dir },
        ],
        label: TextLabel::new(text, label_at, Anchor::Middle),
    }
}

/// A radius leader from the bullnose center to the arc midpoint, single
/// arrowhead at the arc.
fn radius_dimension(
    center_px: Point2D,
    center_mm: Point2,
    radius_mm: f64,
    scale: f64,
) -> Dimension {
    // Arc midpoint is at -45°: up and to the right of the center.
    let dir = std::f64::consts::FRAC_1_SQRT_2;
    let tip_mm = Point2::new(center_mm.x + radius_mm * dir, center_mm.y - radius_mm * dir);
    let end = Point2D::new(
        center_px.x + (tip_mm.x - center_mm.x) * scale,
        center_px.y + (tip_mm.y - center_mm.y) * scale,
    );

    let label_at = center_px.midpoint(&end).offset(6.0, 8.0);

    Dimension {
        measure: DimKind::EdgeDepth,
        start: center_px,
        end,
        arrows: vec![Arrowhead {
            at: end,
            dir: Point2D::new(dir, -dir),
        }],
        label: TextLabel::new(format!("R{radius_mm:.0} mm"), label_at, Anchor::Start),
    }
}
