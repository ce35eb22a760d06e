//! Core types for the bhumi-map pipeline.
//!
//! This module provides the fundamental types the pipeline passes around:
//! - [`Point3`]: 3D world point, y-up
//! - [`PointCloud`]: SoA point container, the point-source currency
//! - [`Bounds3`]: per-axis min/max extents of a cloud

mod bounds;
mod cloud;
mod point;

pub use bounds::Bounds3;
pub use cloud::PointCloud;
pub use point::Point3;
