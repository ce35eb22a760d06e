//! Axis-aligned bounding box over a point cloud.
//!
//! [`Bounds3`] tracks the per-axis extents of the input scan. The grid is
//! anchored at the minimum x/z corner, the vertical minimum becomes the
//! global floor reference exported with the map metadata.
//!
//! # Usage
//!
//! ```rust
//! use bhumi_map::core::{Bounds3, Point3};
//!
//! let mut bounds = Bounds3::empty();
//! bounds.expand_to_include(Point3::new(1.0, 0.2, -3.0));
//! bounds.expand_to_include(Point3::new(-2.0, 1.8, 4.0));
//!
//! assert_eq!(bounds.min, Point3::new(-2.0, 0.2, -3.0));
//! assert_eq!(bounds.width(), 3.0);
//! assert_eq!(bounds.depth(), 7.0);
//! ```

use super::point::Point3;

/// Axis-aligned bounding box in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds3 {
    /// Minimum corner (smallest x, y and z values).
    pub min: Point3,
    /// Maximum corner (largest x, y and z values).
    pub max: Point3,
}

impl Bounds3 {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (invalid) bounding box.
    ///
    /// The empty bounds has min > max, so it will expand to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Check if the bounds are empty (invalid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Compute bounds over an iterator of points.
    ///
    /// Scans the full sequence once. Returns `None` for an empty sequence,
    /// where extents are undefined.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut bounds = Bounds3::empty();
        for p in points {
            bounds.expand_to_include(p);
        }
        if bounds.is_empty() {
            None
        } else {
            Some(bounds)
        }
    }

    /// Width of the bounding box (x extent).
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Depth of the bounding box (z extent).
    #[inline]
    pub fn depth(&self) -> f32 {
        self.max.z - self.min.z
    }

    /// Vertical span of the bounding box (y extent).
    #[inline]
    pub fn vertical_span(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Size of the bounding box as a Point3 (width, vertical span, depth).
    #[inline]
    pub fn size(&self) -> Point3 {
        self.max - self.min
    }

    /// Check if a point is inside the bounding box.
    #[inline]
    pub fn contains(&self, point: Point3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Expand bounds to include a point.
    #[inline]
    pub fn expand_to_include(&mut self, point: Point3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let bounds = Bounds3::empty();
        assert!(bounds.is_empty());

        let valid = Bounds3::new(Point3::ZERO, Point3::new(1.0, 1.0, 1.0));
        assert!(!valid.is_empty());
    }

    #[test]
    fn test_expand_to_include() {
        let mut bounds = Bounds3::empty();

        bounds.expand_to_include(Point3::new(5.0, 1.0, 5.0));
        assert_eq!(bounds.min, Point3::new(5.0, 1.0, 5.0));
        assert_eq!(bounds.max, Point3::new(5.0, 1.0, 5.0));

        bounds.expand_to_include(Point3::new(0.0, 2.0, 10.0));
        assert_eq!(bounds.min, Point3::new(0.0, 1.0, 5.0));
        assert_eq!(bounds.max, Point3::new(5.0, 2.0, 10.0));
    }

    #[test]
    fn test_from_points() {
        let points = vec![
            Point3::new(1.0, 0.0, -1.0),
            Point3::new(-3.0, 2.5, 0.0),
            Point3::new(2.0, -0.5, 4.0),
        ];
        let bounds = Bounds3::from_points(points).unwrap();

        assert_eq!(bounds.min, Point3::new(-3.0, -0.5, -1.0));
        assert_eq!(bounds.max, Point3::new(2.0, 2.5, 4.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert_eq!(Bounds3::from_points(std::iter::empty()), None);
    }

    #[test]
    fn test_from_single_point() {
        let bounds = Bounds3::from_points(std::iter::once(Point3::new(2.0, 1.0, 3.0))).unwrap();

        assert_eq!(bounds.min, bounds.max);
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.depth(), 0.0);
        assert_eq!(bounds.vertical_span(), 0.0);
    }

    #[test]
    fn test_dimensions() {
        let bounds = Bounds3::new(Point3::new(1.0, 0.0, 2.0), Point3::new(5.0, 3.0, 8.0));

        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.vertical_span(), 3.0);
        assert_eq!(bounds.depth(), 6.0);
        assert_eq!(bounds.size(), Point3::new(4.0, 3.0, 6.0));
    }

    #[test]
    fn test_contains() {
        let bounds = Bounds3::new(Point3::ZERO, Point3::new(10.0, 10.0, 10.0));

        assert!(bounds.contains(Point3::new(5.0, 5.0, 5.0)));
        assert!(bounds.contains(Point3::ZERO)); // Edge
        assert!(bounds.contains(Point3::new(10.0, 10.0, 10.0))); // Edge
        assert!(!bounds.contains(Point3::new(-1.0, 5.0, 5.0)));
        assert!(!bounds.contains(Point3::new(5.0, 11.0, 5.0)));
    }
}
