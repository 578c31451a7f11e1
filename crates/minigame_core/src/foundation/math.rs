//! Math utilities and types
//!
//! Provides the fundamental 2D types for unit movement, collision, and
//! range queries.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Euclidean distance between two points
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).magnitude()
}

/// Axis-aligned rectangle used for unit collision bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Bottom-left corner in world space
    pub min: Vec2,

    /// Width and height
    pub size: Vec2,
}

impl Rect {
    /// Create a rectangle from its bottom-left corner and size
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Create a rectangle centered on a point
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    /// Top-right corner of the rectangle
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Check if this rectangle overlaps another
    ///
    /// Touching edges count as an overlap, matching the inclusive
    /// comparisons used by the range queries.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x <= b_max.x
            && a_max.x >= other.min.x
            && self.min.y <= b_max.y
            && a_max.y >= other.min.y
    }

    /// Check if a point lies inside the rectangle (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_relative_eq!(distance(a, b), 5.0);
        assert_relative_eq!(distance(b, a), 5.0);
        assert_relative_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        let c = Rect::new(Vec2::new(20.0, 20.0), Vec2::new(5.0, 5.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_rect_overlap_touching_edges() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));

        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_rect_centered() {
        let r = Rect::centered(Vec2::new(5.0, 5.0), Vec2::new(4.0, 2.0));
        assert_relative_eq!(r.min.x, 3.0);
        assert_relative_eq!(r.min.y, 4.0);
        assert_relative_eq!(r.center().x, 5.0);
        assert_relative_eq!(r.center().y, 5.0);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(r.contains(Vec2::new(5.0, 5.0)));
        assert!(r.contains(Vec2::new(0.0, 10.0)));
        assert!(!r.contains(Vec2::new(10.1, 5.0)));
    }
}
