//! Geometry computation methods for triangle meshes.
//!
//! - Face and vertex normals
//! - UV sphere generation

use std::f32::consts::PI;

use glam::Vec3;

use super::TriangleMesh;

impl TriangleMesh {
    /// Computes unit face normals from the winding of each triangle.
    pub fn face_normals(&self) -> Vec<Vec3> {
        self.faces
            .iter()
            .map(|f| {
                let [v0, v1, v2] = f.map(|i| self.vertices[i as usize]);
                (v1 - v0).cross(v2 - v0).normalize_or_zero()
            })
            .collect()
    }

    /// Computes vertex normals as area-weighted average of incident face normals.
    pub fn compute_vertex_normals(&mut self) -> &mut Self {
        self.vertex_normals.clear();
        self.vertex_normals.resize(self.vertices.len(), Vec3::ZERO);

        for f in &self.faces {
            let [v0, v1, v2] = f.map(|i| self.vertices[i as usize]);
            // Cross product length is twice the triangle area
            let weighted_normal = (v1 - v0).cross(v2 - v0) * 0.5;
            for &vi in f {
                self.vertex_normals[vi as usize] += weighted_normal;
            }
        }

        for normal in &mut self.vertex_normals {
            *normal = normal.normalize_or_zero();
        }
        self
    }

    /// Creates a UV sphere centered at the origin.
    ///
    /// The sphere has `resolution` latitude bands and `2 * resolution` longitude
    /// segments. Vertex 0 is the north pole (+Z), vertex 1 the south pole.
    /// `resolution` is clamped to at least 2.
    pub fn create_sphere(radius: f32, resolution: u32) -> Self {
        let res = resolution.max(2);
        let segments = 2 * res;

        let mut vertices = vec![Vec3::new(0.0, 0.0, radius), Vec3::new(0.0, 0.0, -radius)];
        for i in 1..res {
            let theta = PI * i as f32 / res as f32;
            for j in 0..segments {
                let phi = 2.0 * PI * j as f32 / segments as f32;
                vertices.push(
                    Vec3::new(theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos())
                        * radius,
                );
            }
        }

        // Ring `r` (0-based, north to south) vertex `j`
        let ring = |r: u32, j: u32| 2 + r * segments + (j % segments);
        let last_ring = res - 2;

        let mut faces = Vec::with_capacity((2 * segments * (res - 1)) as usize);
        for j in 0..segments {
            faces.push([0, ring(0, j), ring(0, j + 1)]);
            faces.push([1, ring(last_ring, j + 1), ring(last_ring, j)]);
        }
        for r in 0..last_ring {
            for j in 0..segments {
                let (a, b) = (ring(r, j), ring(r, j + 1));
                let (c, d) = (ring(r + 1, j), ring(r + 1, j + 1));
                faces.push([a, c, d]);
                faces.push([a, d, b]);
            }
        }

        Self {
            vertices,
            faces,
            vertex_normals: Vec::new(),
            vertex_colors: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineSet;

    #[test]
    fn test_sphere_counts() {
        let sphere = TriangleMesh::create_sphere(1.0, 10);
        assert_eq!(sphere.num_vertices(), 2 + 20 * 9);
        assert_eq!(sphere.num_faces(), 360);

        // Closed genus-0 surface: V - E + F = 2
        let wire = LineSet::from_triangle_mesh(&sphere, Vec3::X);
        assert_eq!(wire.num_edges(), 540);
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let sphere = TriangleMesh::create_sphere(2.5, 6);
        for v in sphere.vertices() {
            assert!((v.length() - 2.5).abs() < 1e-5);
        }
        assert_eq!(
            sphere.bounding_box().map(|(min, max)| (min.z, max.z)),
            Some((-2.5, 2.5))
        );
    }

    #[test]
    fn test_sphere_normals_point_outward() {
        let mut sphere = TriangleMesh::create_sphere(1.0, 8);
        for (normal, face) in sphere.face_normals().iter().zip(sphere.faces()) {
            let centroid = face
                .iter()
                .map(|&i| sphere.vertices()[i as usize])
                .sum::<Vec3>()
                / 3.0;
            assert!(normal.dot(centroid) > 0.0);
        }

        sphere.compute_vertex_normals();
        for (n, v) in sphere.vertex_normals().iter().zip(sphere.vertices()) {
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!(n.dot(*v) > 0.9);
        }
    }

    #[test]
    fn test_fan_triangulation() {
        let quad = TriangleMesh::from_polygons(
            vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y],
            &[vec![0, 1, 2, 3], vec![0, 1]],
        )
        .unwrap();
        assert_eq!(quad.faces(), &[[0, 1, 2], [0, 2, 3]]);

        let mut quad = quad;
        quad.compute_vertex_normals();
        assert!(quad.vertex_normals().iter().all(|&n| n == Vec3::Z));
    }

    #[test]
    fn test_face_index_bound() {
        assert!(TriangleMesh::new(vec![Vec3::ZERO], vec![[0, 0, 1]]).is_err());
    }
}
