//! Scene export as a single colored PLY file.
//!
//! All geometries are concatenated into one `vertex` element
//! (`x y z red green blue`), one `edge` element (`vertex1 vertex2 red green blue`)
//! for line sets and one `face` element (`vertex_indices`) for meshes. Point
//! clouds contribute vertices only.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use camscope_core::{CamscopeError, Result};
use glam::Vec3;
use ply_rs::ply::{
    Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType,
    ScalarType,
};
use ply_rs::writer::Writer;

use crate::scene::{Geometry, Scene};

/// Color of vertices that carry none of their own.
const DEFAULT_COLOR: Vec3 = Vec3::new(0.7, 0.7, 0.7);

/// Builds an ASCII PLY document holding every geometry of the scene.
pub fn scene_to_ply(scene: &Scene) -> Result<Ply<DefaultElement>> {
    let mut vertices = Vec::new();
    let mut edges = Vec::new();
    let mut faces = Vec::new();

    for entry in scene.iter() {
        let base = vertices.len();
        match &entry.geometry {
            Geometry::LineSet(lines) => {
                // A line-set vertex takes the color of the last edge touching it
                let mut colors = vec![DEFAULT_COLOR; lines.num_points()];
                for (edge, &color) in lines.edges().iter().zip(lines.colors()) {
                    colors[edge[0] as usize] = color;
                    colors[edge[1] as usize] = color;
                }
                for (&p, &c) in lines.points().iter().zip(&colors) {
                    vertices.push(vertex_element(p, c));
                }
                for (edge, &color) in lines.edges().iter().zip(lines.colors()) {
                    edges.push(edge_element(offset(base, edge[0])?, offset(base, edge[1])?, color));
                }
            }
            Geometry::TriangleMesh(mesh) => {
                let colors = mesh.vertex_colors();
                for (i, &p) in mesh.vertices().iter().enumerate() {
                    let c = colors.map_or(DEFAULT_COLOR, |c| c[i]);
                    vertices.push(vertex_element(p, c));
                }
                for tri in mesh.faces() {
                    let indices = tri
                        .iter()
                        .map(|&v| offset(base, v))
                        .collect::<Result<Vec<_>>>()?;
                    let mut face = DefaultElement::new();
                    face.insert("vertex_indices".to_string(), Property::ListInt(indices));
                    faces.push(face);
                }
            }
            Geometry::PointCloud(cloud) => {
                let colors = cloud.colors();
                for (i, &p) in cloud.points().iter().enumerate() {
                    let c = colors.map_or(DEFAULT_COLOR, |c| c[i]);
                    vertices.push(vertex_element(p, c));
                }
            }
        }
    }

    let mut ply = Ply::<DefaultElement>::new();
    ply.header.encoding = Encoding::Ascii;
    ply.header
        .comments
        .push("camscope-rs scene export".to_string());

    let mut vertex_def = ElementDef::new("vertex".to_string());
    for name in ["x", "y", "z"] {
        vertex_def.properties.add(scalar_def(name, ScalarType::Float));
    }
    for name in ["red", "green", "blue"] {
        vertex_def.properties.add(scalar_def(name, ScalarType::UChar));
    }
    ply.header.elements.add(vertex_def);

    let mut edge_def = ElementDef::new("edge".to_string());
    for name in ["vertex1", "vertex2"] {
        edge_def.properties.add(scalar_def(name, ScalarType::Int));
    }
    for name in ["red", "green", "blue"] {
        edge_def.properties.add(scalar_def(name, ScalarType::UChar));
    }
    ply.header.elements.add(edge_def);

    let mut face_def = ElementDef::new("face".to_string());
    face_def.properties.add(PropertyDef::new(
        "vertex_indices".to_string(),
        PropertyType::List(ScalarType::UChar, ScalarType::Int),
    ));
    ply.header.elements.add(face_def);

    ply.payload.insert("vertex".to_string(), vertices);
    ply.payload.insert("edge".to_string(), edges);
    ply.payload.insert("face".to_string(), faces);
    ply.make_consistent()
        .map_err(|e| CamscopeError::Format(format!("inconsistent PLY: {e:?}")))?;
    Ok(ply)
}

/// Writes the scene to `path` as an ASCII PLY file.
pub fn write_scene_ply(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut ply = scene_to_ply(scene)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    let written = Writer::<DefaultElement>::new().write_ply(&mut out, &mut ply)?;
    out.flush()?;
    log::info!(
        "wrote scene with {} geometries to {} ({written} bytes)",
        scene.len(),
        path.display()
    );
    Ok(())
}

fn scalar_def(name: &str, ty: ScalarType) -> PropertyDef {
    PropertyDef::new(name.to_string(), PropertyType::Scalar(ty))
}

fn offset(base: usize, index: u32) -> Result<i32> {
    i32::try_from(base + index as usize).map_err(|_| {
        CamscopeError::Format("scene too large for 32-bit PLY indices".to_string())
    })
}

fn to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn vertex_element(p: Vec3, color: Vec3) -> DefaultElement {
    let mut element = DefaultElement::new();
    element.insert("x".to_string(), Property::Float(p.x));
    element.insert("y".to_string(), Property::Float(p.y));
    element.insert("z".to_string(), Property::Float(p.z));
    insert_color(&mut element, color);
    element
}

fn edge_element(a: i32, b: i32, color: Vec3) -> DefaultElement {
    let mut element = DefaultElement::new();
    element.insert("vertex1".to_string(), Property::Int(a));
    element.insert("vertex2".to_string(), Property::Int(b));
    insert_color(&mut element, color);
    element
}

fn insert_color(element: &mut DefaultElement, color: Vec3) {
    element.insert("red".to_string(), Property::UChar(to_u8(color.x)));
    element.insert("green".to_string(), Property::UChar(to_u8(color.y)));
    element.insert("blue".to_string(), Property::UChar(to_u8(color.z)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use camscope_structures::{LineSet, PointCloud, TriangleMesh};

    #[test]
    fn test_element_counts_and_offsets() {
        let mut scene = Scene::new();
        scene.push("frame", LineSet::coordinate_frame(1.0, Vec3::ZERO));
        scene.push(
            "tri",
            TriangleMesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![[0, 1, 2]]).unwrap(),
        );
        scene.push("cloud", PointCloud::new(vec![Vec3::ONE; 2]));

        let ply = scene_to_ply(&scene).unwrap();
        assert_eq!(ply.payload["vertex"].len(), 4 + 3 + 2);
        assert_eq!(ply.payload["edge"].len(), 3);
        assert_eq!(ply.payload["face"].len(), 1);

        // Face indices are shifted past the four frame vertices
        assert_eq!(
            ply.payload["face"][0]["vertex_indices"],
            Property::ListInt(vec![4, 5, 6])
        );
        // X axis edge is red
        assert_eq!(ply.payload["edge"][0]["red"], Property::UChar(255));
        assert_eq!(ply.payload["edge"][0]["green"], Property::UChar(0));
    }
}
