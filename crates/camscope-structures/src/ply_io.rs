//! Loading meshes and point clouds from PLY files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use camscope_core::{CamscopeError, Result};
use glam::Vec3;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Ply, Property};

use crate::point_cloud::PointCloud;
use crate::surface_mesh::TriangleMesh;

/// Reads a triangle mesh (`vertex` and `face` elements) and computes its vertex normals.
///
/// Polygonal faces are fan-triangulated. Vertex colors are kept when present.
pub fn read_triangle_mesh(path: impl AsRef<Path>) -> Result<TriangleMesh> {
    let path = path.as_ref();
    let ply = parse_file(path)?;
    let (vertices, colors) = read_vertices(&ply, path)?;

    let faces = ply.payload.get("face").map(Vec::as_slice).unwrap_or_default();
    let polygons = faces
        .iter()
        .map(|face| {
            face.get("vertex_indices")
                .or_else(|| face.get("vertex_index"))
                .and_then(index_list)
                .ok_or_else(|| format_error(path, "face without a vertex index list"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut mesh = TriangleMesh::from_polygons(vertices, &polygons)?;
    if let Some(colors) = colors {
        mesh.set_vertex_colors(colors)?;
    }
    mesh.compute_vertex_normals();
    log::info!(
        "loaded mesh {} ({} vertices, {} triangles)",
        path.display(),
        mesh.num_vertices(),
        mesh.num_faces()
    );
    Ok(mesh)
}

/// Reads a point cloud from the `vertex` element of a PLY file.
pub fn read_point_cloud(path: impl AsRef<Path>) -> Result<PointCloud> {
    let path = path.as_ref();
    let ply = parse_file(path)?;
    let (points, colors) = read_vertices(&ply, path)?;

    let mut cloud = PointCloud::new(points);
    if let Some(colors) = colors {
        cloud.set_colors(colors)?;
    }
    log::info!(
        "loaded point cloud {} ({} points)",
        path.display(),
        cloud.num_points()
    );
    Ok(cloud)
}

/// Parses PLY data from any reader.
pub fn parse_ply<R: Read>(reader: &mut R) -> std::io::Result<Ply<DefaultElement>> {
    Parser::<DefaultElement>::new().read_ply(reader)
}

fn parse_file(path: &Path) -> Result<Ply<DefaultElement>> {
    let file = File::open(path).map_err(|e| CamscopeError::from_io(e, path))?;
    parse_ply(&mut BufReader::new(file)).map_err(|e| format_error(path, &e.to_string()))
}

fn format_error(path: &Path, msg: &str) -> CamscopeError {
    CamscopeError::Format(format!("{}: {msg}", path.display()))
}

type VertexData = (Vec<Vec3>, Option<Vec<Vec3>>);

fn read_vertices(ply: &Ply<DefaultElement>, path: &Path) -> Result<VertexData> {
    let elements = ply
        .payload
        .get("vertex")
        .ok_or_else(|| format_error(path, "no vertex element"))?;

    let mut positions = Vec::with_capacity(elements.len());
    let mut colors = Vec::with_capacity(elements.len());
    for element in elements {
        let coord = |name: &str| {
            element
                .get(name)
                .and_then(scalar)
                .ok_or_else(|| format_error(path, &format!("vertex without numeric '{name}'")))
        };
        positions.push(Vec3::new(coord("x")?, coord("y")?, coord("z")?));

        if let (Some(r), Some(g), Some(b)) = (
            element.get("red").and_then(color_channel),
            element.get("green").and_then(color_channel),
            element.get("blue").and_then(color_channel),
        ) {
            colors.push(Vec3::new(r, g, b));
        }
    }

    // Colors only count when every vertex has them
    let colors = (!colors.is_empty() && colors.len() == positions.len()).then_some(colors);
    Ok((positions, colors))
}

fn scalar(prop: &Property) -> Option<f32> {
    Some(match *prop {
        Property::Char(v) => f32::from(v),
        Property::UChar(v) => f32::from(v),
        Property::Short(v) => f32::from(v),
        Property::UShort(v) => f32::from(v),
        Property::Int(v) => v as f32,
        Property::UInt(v) => v as f32,
        Property::Float(v) => v,
        Property::Double(v) => v as f32,
        _ => return None,
    })
}

/// Integer channels are 8-bit; float channels are already in `[0, 1]`.
fn color_channel(prop: &Property) -> Option<f32> {
    match *prop {
        Property::UChar(v) => Some(f32::from(v) / 255.0),
        Property::Float(v) => Some(v),
        Property::Double(v) => Some(v as f32),
        _ => None,
    }
}

fn index_list(prop: &Property) -> Option<Vec<u32>> {
    match prop {
        Property::ListInt(v) => v.iter().map(|&i| u32::try_from(i).ok()).collect(),
        Property::ListUInt(v) => Some(v.clone()),
        Property::ListShort(v) => v.iter().map(|&i| u32::try_from(i).ok()).collect(),
        Property::ListUShort(v) => Some(v.iter().map(|&i| u32::from(i)).collect()),
        Property::ListChar(v) => v.iter().map(|&i| u32::try_from(i).ok()).collect(),
        Property::ListUChar(v) => Some(v.iter().map(|&i| u32::from(i)).collect()),
        _ => None,
    }
}
