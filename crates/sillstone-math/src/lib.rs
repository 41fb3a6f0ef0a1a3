#![warn(missing_docs)]

//! Math types for the sillstone profile engine.
//!
//! Thin wrappers around nalgebra providing the 2D types the cross-section
//! and projection crates work in: points, vectors, an axis-aligned bounding
//! box, and tolerance constants. All lengths are in millimeters.

use nalgebra::Vector2;

/// A point in the 2D cross-section plane.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in the 2D cross-section plane.
pub type Vec2 = Vector2<f64>;

/// Axis-aligned bounding box in the cross-section plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Aabb2 {
    /// An empty box that any point will expand.
    pub fn empty() -> Self {
        Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Smallest box containing all `points`. Empty box for an empty slice.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point2>,
    {
        let mut bb = Self::empty();
        for p in points {
            bb.include(*p);
        }
        bb
    }

    /// Expand the box to include a point.
    pub fn include(&mut self, p: Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Extent along X.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center point of the box.
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Whether the box contains at least one point.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}

impl Default for Aabb2 {
    fn default() -> Self {
        Self::empty()
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in mm.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-9 mm — well below display precision).
    pub const DEFAULT: Self = Self { linear: 1e-9 };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point2, b: &Point2) -> bool {
        (a - b).norm() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_box_invalid() {
        let bb = Aabb2::empty();
        assert!(!bb.is_valid());
    }

    #[test]
    fn test_include_points() {
        let mut bb = Aabb2::empty();
        bb.include(Point2::new(1.0, 2.0));
        bb.include(Point2::new(-3.0, 5.0));
        assert!(bb.is_valid());
        assert!((bb.width() - 4.0).abs() < 1e-12);
        assert!((bb.height() - 3.0).abs() < 1e-12);
        assert!((bb.center().x - (-1.0)).abs() < 1e-12);
        assert!((bb.center().y - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_from_points() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(10.0, 4.0)];
        let bb = Aabb2::from_points(pts.iter());
        assert!((bb.width() - 10.0).abs() < 1e-12);
        assert!((bb.height() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_tolerance() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.is_zero(1e-12));
        assert!(!tol.is_zero(1e-6));
        let a = Point2::new(1.0, 1.0);
        let b = Point2::new(1.0 + 1e-12, 1.0);
        assert!(tol.points_equal(&a, &b));
    }
}
