//! Camera visualization: frustums per camera group, assembled into a scene.

use std::str::FromStr;

use camscope_core::{CamscopeError, CameraVisualizerConfig, GeometryConfig, Result};
use camscope_structures::{
    load_camera_dict, read_point_cloud, read_triangle_mesh, CameraDict, CameraView, Frustum,
    LineSet, TriangleMesh,
};
use glam::Vec3;

use crate::export::write_scene_ply;
use crate::scene::{Geometry, Scene};

/// Resolution of the reference sphere.
const SPHERE_RESOLUTION: u32 = 10;

/// Axis length of the coordinate-frame marker.
const COORDINATE_FRAME_SIZE: f32 = 0.5;

/// Declared type of an external geometry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Mesh,
    PointCloud,
}

impl FromStr for GeometryKind {
    type Err = CamscopeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mesh" => Ok(Self::Mesh),
            "point cloud" | "pointcloud" | "point_cloud" => Ok(Self::PointCloud),
            other => Err(CamscopeError::UnsupportedGeometryType(other.to_string())),
        }
    }
}

/// Cameras drawn in one color.
#[derive(Debug, Clone)]
pub struct CameraGroup {
    pub color: Vec3,
    pub cameras: CameraDict,
}

impl CameraGroup {
    pub fn new(color: Vec3, cameras: CameraDict) -> Self {
        Self { color, cameras }
    }

    /// Builds one frustum per camera, in file order.
    pub fn frustums(&self, frustum_length: f32) -> Result<Vec<Frustum>> {
        self.cameras
            .iter()
            .map(|(name, record)| {
                let mut view = CameraView::new(name.as_str(), *record);
                view.set_color(self.color).set_frustum_length(frustum_length);
                log::debug!("frustum for '{name}' at {}", record.position());
                view.frustum()
            })
            .collect()
    }

    /// Builds and merges the group's frustums into one line set.
    pub fn line_set(&self, frustum_length: f32) -> Result<LineSet> {
        LineSet::from_frustums(&self.frustums(frustum_length)?)
    }
}

/// Assembles the camera scene.
///
/// Order: reference sphere wireframe, coordinate frame, one line set per
/// group, then the optional external geometry. The geometry type is checked
/// before anything is built, so an unsupported type yields no scene at all.
pub fn assemble_scene(
    groups: &[CameraGroup],
    sphere_radius: f32,
    camera_size: f32,
    geometry: Option<&GeometryConfig>,
) -> Result<Scene> {
    let geometry = geometry
        .map(|g| g.kind.parse::<GeometryKind>().map(|kind| (g, kind)))
        .transpose()?;

    let mut scene = Scene::new();

    let sphere = TriangleMesh::create_sphere(sphere_radius, SPHERE_RESOLUTION);
    scene.push(
        "sphere",
        LineSet::from_triangle_mesh(&sphere, Vec3::new(1.0, 0.0, 0.0)),
    );
    scene.push(
        "coordinate frame",
        LineSet::coordinate_frame(COORDINATE_FRAME_SIZE, Vec3::ZERO),
    );

    for (i, group) in groups.iter().enumerate() {
        let cameras = group.line_set(camera_size)?;
        log::info!(
            "camera group {i}: {} cameras, {} vertices, {} edges",
            group.cameras.len(),
            cameras.num_points(),
            cameras.num_edges()
        );
        scene.push(format!("cameras {i}"), cameras);
    }

    if let Some((config, kind)) = geometry {
        let loaded: Geometry = match kind {
            GeometryKind::Mesh => read_triangle_mesh(&config.path)?.into(),
            GeometryKind::PointCloud => read_point_cloud(&config.path)?.into(),
        };
        scene.push("geometry", loaded);
    }

    Ok(scene)
}

/// Runs the camera visualizer: load camera groups, assemble, export to PLY.
pub fn visualize_cameras(config: &CameraVisualizerConfig) -> Result<Scene> {
    // Fail on a bad geometry type before touching any camera file
    if let Some(geometry) = &config.geometry {
        geometry.kind.parse::<GeometryKind>()?;
    }

    let groups = config
        .camera_groups
        .iter()
        .map(|g| -> Result<CameraGroup> {
            Ok(CameraGroup::new(g.color, load_camera_dict(&g.cameras)?))
        })
        .collect::<Result<Vec<_>>>()?;

    let scene = assemble_scene(
        &groups,
        config.sphere_radius,
        config.camera_size,
        config.geometry.as_ref(),
    )?;
    write_scene_ply(&scene, &config.output)?;
    Ok(scene)
}
