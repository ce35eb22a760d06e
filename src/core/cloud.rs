//! Point cloud container.

use super::bounds::Bounds3;
use super::point::Point3;
use serde::{Deserialize, Serialize};

/// Collection of 3D points using Struct of Arrays (SoA) layout.
///
/// Instead of `Vec<Point3>` (x,y,z,x,y,z...), stores:
/// - `xs: Vec<f32>` (x,x,x...)
/// - `ys: Vec<f32>` (y,y,y...)
/// - `zs: Vec<f32>` (z,z,z...)
///
/// The aggregation pass only touches two of the three axes per decision
/// (x/z for the cell index, y for the sample), so separate coordinate
/// vectors keep those scans dense.
///
/// This is the currency every point source produces: the PLY reader fills
/// one, tests build them in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PointCloud {
    /// X coordinates in meters (SoA layout)
    pub xs: Vec<f32>,
    /// Y coordinates in meters (SoA layout, vertical axis)
    pub ys: Vec<f32>,
    /// Z coordinates in meters (SoA layout)
    pub zs: Vec<f32>,
}

impl PointCloud {
    /// Create an empty point cloud.
    pub fn new() -> Self {
        Self {
            xs: Vec::new(),
            ys: Vec::new(),
            zs: Vec::new(),
        }
    }

    /// Create a point cloud with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
            zs: Vec::with_capacity(capacity),
        }
    }

    /// Create from a vector of points (converts AoS to SoA).
    pub fn from_points(points: Vec<Point3>) -> Self {
        let n = points.len();
        let mut cloud = Self::with_capacity(n);
        for p in points {
            cloud.push(p);
        }
        cloud
    }

    /// Add a point.
    #[inline]
    pub fn push(&mut self, point: Point3) {
        self.xs.push(point.x);
        self.ys.push(point.y);
        self.zs.push(point.z);
    }

    /// Add a point by coordinates directly (faster than push).
    #[inline]
    pub fn push_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.xs.push(x);
        self.ys.push(y);
        self.zs.push(z);
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Get point at index.
    ///
    /// # Panics
    /// Panics if index is out of bounds.
    #[inline]
    pub fn point_at(&self, i: usize) -> Point3 {
        Point3::new(self.xs[i], self.ys[i], self.zs[i])
    }

    /// Iterate over points (creates Point3 on the fly).
    pub fn iter(&self) -> impl Iterator<Item = Point3> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .zip(self.zs.iter())
            .map(|((&x, &y), &z)| Point3::new(x, y, z))
    }

    /// Bounding box over all points.
    ///
    /// Full single scan; returns `None` for an empty cloud.
    pub fn bounds(&self) -> Option<Bounds3> {
        Bounds3::from_points(self.iter())
    }
}
