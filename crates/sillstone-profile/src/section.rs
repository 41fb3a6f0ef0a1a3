//! Cross-section boundary polygon construction.

use std::f64::consts::FRAC_PI_2;

use sillstone_math::{Aabb2, Point2};

use crate::{EdgeTreatment, StoneSpec};

/// Geometry of the treated top-outer corner, recorded alongside the polygon
/// so the 2D projector can draw construction geometry (reference circle,
/// chamfer legs) without re-deriving it from vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeGeometry {
    /// Untreated sharp corner.
    Sharp,
    /// Chamfer cut between the two tangent points of the removed triangle.
    Chamfer {
        /// Where the cut meets the top face.
        top: Point2,
        /// Where the cut meets the outer face.
        side: Point2,
    },
    /// Bullnose arc; the quarter circle spans from the top tangent point to
    /// the side tangent point around `center`.
    Bullnose {
        /// Arc center, one radius in from both treated faces.
        center: Point2,
        /// Arc radius.
        radius: f64,
    },
}

/// The ordered boundary polygon of the cross-section.
///
/// Vertices run clockwise as drawn (x right, y down), starting at the
/// top-inner corner `(0, 0)`; the last vertex implicitly connects back to
/// the first. The traversal order is identical across edge variants so
/// consumers can index positionally: vertex 0 is always the top-inner
/// corner and the treated corner region always follows vertex `0`'s top
/// edge.
///
/// This polygon is a display artifact. The bullnose arc is approximated by
/// straight segments; volume is always computed from the closed forms in
/// `sillstone-volume`, never from this polygon, so the discretization error
/// stays out of the physical result.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionProfile {
    points: Vec<Point2>,
    edge_geometry: EdgeGeometry,
}

impl SectionProfile {
    /// Build the boundary polygon for a validated spec.
    ///
    /// Topology branches on `edge_depth > 0` exactly — display-scale
    /// concerns (a sub-pixel cut) are the projectors' business, not this
    /// builder's. `arc_segments` is the bullnose subdivision count; it is
    /// ignored for sharp and chamfered edges.
    pub fn build(spec: &StoneSpec, arc_segments: u32) -> Self {
        let w = spec.width;
        let t = spec.thickness;
        let lw = spec.lip_width;
        let lh = spec.lip_drop;
        let tr = spec.edge_depth;

        let mut points = Vec::new();
        let mut edge_geometry = EdgeGeometry::Sharp;

        // Top edge, inner corner toward the treated outer corner.
        points.push(Point2::new(0.0, 0.0));

        if tr > 0.0 {
            match spec.edge {
                EdgeTreatment::Chamfer => {
                    let top = Point2::new(w - tr, 0.0);
                    let side = Point2::new(w, tr);
                    points.push(top);
                    points.push(side);
                    edge_geometry = EdgeGeometry::Chamfer { top, side };
                }
                EdgeTreatment::Bullnose => {
                    let center = Point2::new(w - tr, tr);
                    let n = arc_segments.max(1);
                    // Quarter arc from the top tangent point (angle -π/2)
                    // to the side tangent point (angle 0), sampled with
                    // n segments (n + 1 points).
                    for i in 0..=n {
                        let theta = -FRAC_PI_2 + FRAC_PI_2 * f64::from(i) / f64::from(n);
                        points.push(Point2::new(
                            center.x + tr * theta.cos(),
                            center.y + tr * theta.sin(),
                        ));
                    }
                    edge_geometry = EdgeGeometry::Bullnose { center, radius: tr };
                }
            }
        } else {
            points.push(Point2::new(w, 0.0));
        }

        // Outer face down to the lip bottom, then back under the lip and up
        // its inner face, then along the slab underside to the inner face.
        points.push(Point2::new(w, t + lh));
        points.push(Point2::new(w - lw, t + lh));
        points.push(Point2::new(w - lw, t));
        points.push(Point2::new(0.0, t));

        Self {
            points,
            edge_geometry,
        }
    }

    /// The boundary vertices in traversal order.
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of boundary vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has no vertices (never true for built profiles).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Geometry of the treated corner.
    pub fn edge_geometry(&self) -> EdgeGeometry {
        self.edge_geometry
    }

    /// Iterate the boundary edges as `(start, end)` pairs, including the
    /// closing edge from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Bounding box of the polygon (spans `width` × `thickness + lip_drop`).
    pub fn bounds(&self) -> Aabb2 {
        Aabb2::from_points(self.points.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(edge_depth: f64, edge: EdgeTreatment) -> StoneSpec {
        StoneSpec {
            length: 1000.0,
            width: 700.0,
            thickness: 100.0,
            lip_width: 150.0,
            lip_drop: 200.0,
            edge_depth,
            edge,
            quantity: 1,
        }
    }

    #[test]
    fn test_sharp_profile_has_six_vertices() {
        let section = SectionProfile::build(&spec(0.0, EdgeTreatment::Chamfer), 12);
        assert_eq!(section.len(), 6);
        assert_eq!(section.edge_geometry(), EdgeGeometry::Sharp);

        let p = section.points();
        assert_eq!(p[0], Point2::new(0.0, 0.0));
        assert_eq!(p[1], Point2::new(700.0, 0.0));
        assert_eq!(p[2], Point2::new(700.0, 300.0));
        assert_eq!(p[3], Point2::new(550.0, 300.0));
        assert_eq!(p[4], Point2::new(550.0, 100.0));
        assert_eq!(p[5], Point2::new(0.0, 100.0));
    }

    #[test]
    fn test_zero_depth_bullnose_matches_sharp() {
        let sharp = SectionProfile::build(&spec(0.0, EdgeTreatment::Chamfer), 12);
        let round = SectionProfile::build(&spec(0.0, EdgeTreatment::Bullnose), 12);
        assert_eq!(sharp, round);
    }

    #[test]
    fn test_chamfer_replaces_corner_with_two_vertices() {
        let section = SectionProfile::build(&spec(50.0, EdgeTreatment::Chamfer), 12);
        assert_eq!(section.len(), 7);

        let p = section.points();
        assert_eq!(p[1], Point2::new(650.0, 0.0));
        assert_eq!(p[2], Point2::new(700.0, 50.0));
        // The sharp corner itself is gone.
        assert!(!p.contains(&Point2::new(700.0, 0.0)));
    }

    #[test]
    fn test_bullnose_vertex_count_is_six_plus_segments() {
        for n in [4u32, 12, 24] {
            let section = SectionProfile::build(&spec(50.0, EdgeTreatment::Bullnose), n);
            assert_eq!(section.len(), 6 + n as usize);
        }
    }

    #[test]
    fn test_bullnose_arc_endpoints_are_tangent_points() {
        let section = SectionProfile::build(&spec(50.0, EdgeTreatment::Bullnose), 12);
        let p = section.points();

        // First arc sample sits on the top face, one radius in.
        assert!((p[1].x - 650.0).abs() < 1e-9);
        assert!(p[1].y.abs() < 1e-9);
        // Last arc sample sits on the outer face, one radius down.
        assert!((p[13].x - 700.0).abs() < 1e-9);
        assert!((p[13].y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_bullnose_samples_lie_on_circle_and_advance_monotonically() {
        let section = SectionProfile::build(&spec(50.0, EdgeTreatment::Bullnose), 12);
        let EdgeGeometry::Bullnose { center, radius } = section.edge_geometry() else {
            panic!("expected bullnose edge geometry");
        };

        let arc = &section.points()[1..=13];
        for pair in arc.windows(2) {
            // Each sampled segment moves right and down.
            assert!(pair[1].x > pair[0].x);
            assert!(pair[1].y > pair[0].y);
        }
        for p in arc {
            assert!(((*p - center).norm() - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn test_traversal_starts_at_top_inner_corner_for_all_variants() {
        for (depth, edge) in [
            (0.0, EdgeTreatment::Chamfer),
            (50.0, EdgeTreatment::Chamfer),
            (50.0, EdgeTreatment::Bullnose),
        ] {
            let section = SectionProfile::build(&spec(depth, edge), 12);
            assert_eq!(section.points()[0], Point2::new(0.0, 0.0));
            // Closing edge runs up the inner face back to the start.
            let (last_start, last_end) = section.edges().last().unwrap();
            assert_eq!(last_start, Point2::new(0.0, 100.0));
            assert_eq!(last_end, Point2::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_bounds_span_full_profile() {
        let section = SectionProfile::build(&spec(50.0, EdgeTreatment::Bullnose), 12);
        let bb = section.bounds();
        assert!((bb.width() - 700.0).abs() < 1e-9);
        assert!((bb.height() - 300.0).abs() < 1e-9);
    }
}
