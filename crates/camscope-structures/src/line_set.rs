//! Line sets: points connected by colored edges.

use std::collections::BTreeSet;

use camscope_core::{CamscopeError, Result};
use glam::Vec3;

use crate::camera_view::{Frustum, FRUSTUM_EDGE_COUNT, FRUSTUM_POINT_COUNT};
use crate::surface_mesh::TriangleMesh;

/// A set of line segments with one color per segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSet {
    points: Vec<Vec3>,
    edges: Vec<[u32; 2]>,
    colors: Vec<Vec3>,
}

impl LineSet {
    /// Creates a line set, checking one color per edge and in-range indices.
    pub fn new(points: Vec<Vec3>, edges: Vec<[u32; 2]>, colors: Vec<Vec3>) -> Result<Self> {
        if colors.len() != edges.len() {
            return Err(CamscopeError::ShapeMismatch {
                what: "line set colors",
                expected: edges.len(),
                actual: colors.len(),
            });
        }
        if let Some(&bad) = edges.iter().flatten().find(|&&i| i as usize >= points.len()) {
            return Err(CamscopeError::ShapeMismatch {
                what: "line set edge index bound",
                expected: points.len(),
                actual: bad as usize,
            });
        }
        Ok(Self {
            points,
            edges,
            colors,
        })
    }

    /// Creates a line set where every edge has the same color.
    pub fn with_uniform_color(
        points: Vec<Vec3>,
        edges: Vec<[u32; 2]>,
        color: Vec3,
    ) -> Result<Self> {
        let colors = vec![color; edges.len()];
        Self::new(points, edges, colors)
    }

    /// Merges frustums into one line set, offsetting the edges of frustum `i` by `5 * i`.
    ///
    /// Each frustum must contribute exactly 5 points, 8 edges and 8 colors with
    /// edge indices in `0..5`; anything else is a [`CamscopeError::ShapeMismatch`].
    pub fn from_frustums(frustums: &[Frustum]) -> Result<Self> {
        let n = frustums.len();
        let mut points = Vec::with_capacity(n * FRUSTUM_POINT_COUNT);
        let mut edges = Vec::with_capacity(n * FRUSTUM_EDGE_COUNT);
        let mut colors = Vec::with_capacity(n * FRUSTUM_EDGE_COUNT);

        for (i, frustum) in frustums.iter().enumerate() {
            check_count("frustum points", FRUSTUM_POINT_COUNT, frustum.points.len())?;
            check_count("frustum edges", FRUSTUM_EDGE_COUNT, frustum.edges.len())?;
            check_count("frustum colors", FRUSTUM_EDGE_COUNT, frustum.colors.len())?;
            if let Some(&bad) = frustum
                .edges
                .iter()
                .flatten()
                .find(|&&v| v as usize >= FRUSTUM_POINT_COUNT)
            {
                return Err(CamscopeError::ShapeMismatch {
                    what: "frustum edge index bound",
                    expected: FRUSTUM_POINT_COUNT,
                    actual: bad as usize,
                });
            }

            let offset = (i * FRUSTUM_POINT_COUNT) as u32;
            points.extend_from_slice(&frustum.points);
            edges.extend(frustum.edges.iter().map(|e| [e[0] + offset, e[1] + offset]));
            colors.extend_from_slice(&frustum.colors);
        }

        Ok(Self {
            points,
            edges,
            colors,
        })
    }

    /// Wireframe of a triangle mesh: each undirected edge once, in ascending index order.
    pub fn from_triangle_mesh(mesh: &TriangleMesh, color: Vec3) -> Self {
        let mut unique = BTreeSet::new();
        for tri in mesh.faces() {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                unique.insert([a.min(b), a.max(b)]);
            }
        }
        let edges: Vec<[u32; 2]> = unique.into_iter().collect();
        let colors = vec![color; edges.len()];
        Self {
            points: mesh.vertices().to_vec(),
            edges,
            colors,
        }
    }

    /// Axis marker at `origin`: X red, Y green, Z blue, each `size` long.
    pub fn coordinate_frame(size: f32, origin: Vec3) -> Self {
        Self {
            points: vec![
                origin,
                origin + Vec3::X * size,
                origin + Vec3::Y * size,
                origin + Vec3::Z * size,
            ],
            edges: vec![[0, 1], [0, 2], [0, 3]],
            colors: vec![Vec3::X, Vec3::Y, Vec3::Z],
        }
    }

    /// Sets every edge to `color`.
    pub fn paint_uniform_color(&mut self, color: Vec3) -> &mut Self {
        self.colors.fill(color);
        self
    }

    /// Returns the number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Axis-aligned bounds of the points, `None` when empty.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        bounds(&self.points)
    }
}

fn check_count(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(CamscopeError::ShapeMismatch {
            what,
            expected,
            actual,
        })
    }
}

pub(crate) fn bounds(points: &[Vec3]) -> Option<(Vec3, Vec3)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
    )
}
