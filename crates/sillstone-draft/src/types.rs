//! Drawing primitive types shared by the plan and isometric projectors.
//!
//! Everything here is a transient view artifact: recomputed from scratch on
//! every parameter change and fully owned by the projector that produced
//! it. All types serialize with serde so a frontend (or the CLI's JSON
//! dump) can consume them directly.

use serde::{Deserialize, Serialize};

/// A 2D point in screen coordinates (pixels, y down).
///
/// A custom type rather than `nalgebra::Point2` so the view artifacts
/// serialize without nalgebra's serde feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Midpoint between this point and another.
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Translate by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<sillstone_math::Point2> for Point2D {
    fn from(p: sillstone_math::Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// The pixel area a projector fits its drawing into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center of the viewport.
    pub fn center(&self) -> Point2D {
        Point2D::new(self.width / 2.0, self.height / 2.0)
    }
}

/// 2D axis-aligned bounding box over screen points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox2D {
    /// Minimum corner.
    pub min: Point2D,
    /// Maximum corner.
    pub max: Point2D,
}

impl BoundingBox2D {
    /// Create an empty bounding box.
    pub fn empty() -> Self {
        Self {
            min: Point2D::new(f64::INFINITY, f64::INFINITY),
            max: Point2D::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Expand the bounding box to include a point.
    pub fn include_point(&mut self, p: Point2D) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Width of the bounding box.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the bounding box.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center of the bounding box.
    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Check if the bounding box contains at least one point.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}

impl Default for BoundingBox2D {
    fn default() -> Self {
        Self::empty()
    }
}

/// Stroke style for outlines and construction geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeKind {
    /// Continuous stroke.
    Solid,
    /// Dashed construction stroke.
    Dashed,
}

/// An open or closed polyline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolyLine {
    /// Ordered vertices.
    pub points: Vec<Point2D>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
    /// Stroke style.
    pub stroke: StrokeKind,
}

impl PolyLine {
    /// A closed solid-stroke polyline.
    pub fn closed(points: Vec<Point2D>) -> Self {
        Self {
            points,
            closed: true,
            stroke: StrokeKind::Solid,
        }
    }

    /// An open polyline with the given stroke.
    pub fn open(points: Vec<Point2D>, stroke: StrokeKind) -> Self {
        Self {
            points,
            closed: false,
            stroke,
        }
    }
}

/// A circle, drawn as an outline (dashed reference circles, center dots).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CircleMark {
    /// Center in screen coordinates.
    pub center: Point2D,
    /// Radius in pixels.
    pub radius: f64,
    /// Stroke style.
    pub stroke: StrokeKind,
    /// Whether the circle is filled (center dots) or outlined.
    pub filled: bool,
}

/// Horizontal anchoring of a text label around its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Anchor {
    /// Text starts at the anchor point.
    Start,
    /// Text is centered on the anchor point.
    #[default]
    Middle,
    /// Text ends at the anchor point.
    End,
}

/// A floating text label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextLabel {
    /// Label text.
    pub text: String,
    /// Anchor position in screen coordinates.
    pub at: Point2D,
    /// Horizontal anchoring.
    pub anchor: Anchor,
}

impl TextLabel {
    /// Create a new label.
    pub fn new(text: impl Into<String>, at: Point2D, anchor: Anchor) -> Self {
        Self {
            text: text.into(),
            at,
            anchor,
        }
    }
}

/// An arrowhead at the end of a dimension leader.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Arrowhead {
    /// Tip position.
    pub at: Point2D,
    /// Unit direction the tip points in.
    pub dir: Point2D,
}

/// Which measurement a [`Dimension`] annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimKind {
    /// Slab width `W`.
    Width,
    /// Slab thickness `T`.
    Thickness,
    /// Lip width `Lw`.
    LipWidth,
    /// Lip drop `Lh`.
    LipDrop,
    /// Chamfer leg / bullnose radius `Tr`.
    EdgeDepth,
}

/// A dimension annotation: an offset leader line, its arrowheads, and a
/// value label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimension {
    /// The measurement being annotated.
    pub measure: DimKind,
    /// Leader line start.
    pub start: Point2D,
    /// Leader line end.
    pub end: Point2D,
    /// Arrowheads (two for linear dimensions, one for radius leaders).
    pub arrows: Vec<Arrowhead>,
    /// Value label.
    pub label: TextLabel,
}

/// Shading tone of an isometric face.
///
/// Classification is derived from the sign of the defining profile edge's
/// direction, not from a visibility computation — valid only for the fixed
/// viewing angle the projector uses. A configurable camera would need true
/// per-face normals instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceTone {
    /// Top surface of the slab.
    Top,
    /// Outer side face (slab edge and lip front).
    OuterSide,
    /// Inner lip face, dimmer.
    InnerLip,
    /// Underside faces, dim.
    Bottom,
    /// Chamfer cut or bullnose arc strip, accented.
    EdgeCut,
    /// The front cross-section cap, drawn last.
    FrontCap,
}

/// A shaded face polygon of the isometric view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacePoly {
    /// Polygon vertices in screen coordinates.
    pub points: Vec<Point2D>,
    /// Shading tone.
    pub tone: FaceTone,
}

/// The annotated 2D cross-section drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanView {
    /// Viewport the drawing was fitted to.
    pub viewport: Viewport,
    /// Millimeters-to-pixels scale factor (uniform on both axes).
    pub scale: f64,
    /// The closed profile outline.
    pub outline: PolyLine,
    /// Construction geometry (chamfer legs, corner marker).
    pub construction: Vec<PolyLine>,
    /// Reference circles and center dots (bullnose).
    pub circles: Vec<CircleMark>,
    /// Dimension annotations.
    pub dimensions: Vec<Dimension>,
    /// Bounding box over everything emitted.
    pub bounds: BoundingBox2D,
}

impl PlanView {
    /// An empty view (the projector's no-op result for degenerate input).
    pub fn empty(viewport: Viewport) -> Self {
        Self {
            viewport,
            scale: 0.0,
            outline: PolyLine::closed(Vec::new()),
            construction: Vec::new(),
            circles: Vec::new(),
            dimensions: Vec::new(),
            bounds: BoundingBox2D::empty(),
        }
    }

    /// Whether the view carries any geometry.
    pub fn is_empty(&self) -> bool {
        self.outline.points.is_empty()
    }
}

/// The shaded isometric rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsoView {
    /// Viewport the drawing was fitted to.
    pub viewport: Viewport,
    /// Millimeters-to-pixels scale factor.
    pub scale: f64,
    /// Face polygons in paint order; the front cap is always last.
    pub faces: Vec<FacePoly>,
    /// Floating dimension labels.
    pub labels: Vec<TextLabel>,
    /// Bounding box over all face polygons.
    pub bounds: BoundingBox2D,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance_and_midpoint() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.midpoint(&b), Point2D::new(1.5, 2.0));
    }

    #[test]
    fn test_bounding_box() {
        let mut bb = BoundingBox2D::empty();
        assert!(!bb.is_valid());
        bb.include_point(Point2D::new(0.0, 0.0));
        bb.include_point(Point2D::new(10.0, 5.0));
        assert!(bb.is_valid());
        assert!((bb.width() - 10.0).abs() < 1e-12);
        assert!((bb.height() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_view_artifacts_serialize() {
        let view = PlanView::empty(Viewport::new(800.0, 600.0));
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"outline\""));

        let back: PlanView = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }
}
