//! Point cloud structure.

use camscope_core::{CamscopeError, Result};
use glam::Vec3;

/// A point cloud with optional per-point colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<Vec3>,
    colors: Option<Vec<Vec3>>,
}

impl PointCloud {
    /// Creates a new point cloud.
    pub fn new(points: Vec<Vec3>) -> Self {
        Self {
            points,
            colors: None,
        }
    }

    /// Returns the number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the points.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn colors(&self) -> Option<&[Vec3]> {
        self.colors.as_deref()
    }

    /// Sets per-point colors.
    pub fn set_colors(&mut self, colors: Vec<Vec3>) -> Result<&mut Self> {
        if colors.len() != self.points.len() {
            return Err(CamscopeError::ShapeMismatch {
                what: "point cloud colors",
                expected: self.points.len(),
                actual: colors.len(),
            });
        }
        self.colors = Some(colors);
        Ok(self)
    }

    /// Axis-aligned bounds of the points, `None` when empty.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        crate::line_set::bounds(&self.points)
    }
}
