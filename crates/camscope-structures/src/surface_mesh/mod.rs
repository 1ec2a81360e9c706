//! Triangle mesh structure.

mod geometry;

use camscope_core::{CamscopeError, Result};
use glam::Vec3;

/// A triangle mesh with optional per-vertex colors.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Vec3>,
    faces: Vec<[u32; 3]>,

    // Computed geometry
    vertex_normals: Vec<Vec3>,

    vertex_colors: Option<Vec<Vec3>>,
}

impl TriangleMesh {
    /// Creates a new triangle mesh, checking that faces index existing vertices.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<[u32; 3]>) -> Result<Self> {
        if let Some(&bad) = faces.iter().flatten().find(|&&i| i as usize >= vertices.len()) {
            return Err(CamscopeError::ShapeMismatch {
                what: "mesh face index bound",
                expected: vertices.len(),
                actual: bad as usize,
            });
        }
        Ok(Self {
            vertices,
            faces,
            vertex_normals: Vec::new(),
            vertex_colors: None,
        })
    }

    /// Creates a mesh from polygon faces using fan triangulation.
    ///
    /// For a polygon with vertices [v0, v1, v2, v3, ...], creates triangles:
    /// [v0, v1, v2], [v0, v2, v3], ... Faces with fewer than three vertices are dropped.
    pub fn from_polygons(vertices: Vec<Vec3>, polygons: &[Vec<u32>]) -> Result<Self> {
        let mut faces = Vec::new();
        for poly in polygons {
            if poly.len() >= 3 {
                let v0 = poly[0];
                for i in 1..(poly.len() - 1) {
                    faces.push([v0, poly[i], poly[i + 1]]);
                }
            }
        }
        Self::new(vertices, faces)
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Vertex normals; empty until [`Self::compute_vertex_normals`] runs.
    pub fn vertex_normals(&self) -> &[Vec3] {
        &self.vertex_normals
    }

    pub fn vertex_colors(&self) -> Option<&[Vec3]> {
        self.vertex_colors.as_deref()
    }

    /// Sets per-vertex colors.
    pub fn set_vertex_colors(&mut self, colors: Vec<Vec3>) -> Result<&mut Self> {
        if colors.len() != self.vertices.len() {
            return Err(CamscopeError::ShapeMismatch {
                what: "mesh vertex colors",
                expected: self.vertices.len(),
                actual: colors.len(),
            });
        }
        self.vertex_colors = Some(colors);
        Ok(self)
    }

    /// Axis-aligned bounds of the vertices, `None` when empty.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        crate::line_set::bounds(&self.vertices)
    }
}
