//! Configuration for the depth inspector and the camera visualizer.
//!
//! Both tools are driven by a small JSON file. Relative paths inside a config
//! are resolved against the directory that holds the config file.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CamscopeError, Result};

/// Reads and deserializes a JSON file.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    let file = File::open(path).map_err(|e| CamscopeError::from_io(e, path))?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}

fn resolve(base: &Path, path: &mut PathBuf) {
    if path.is_relative() {
        *path = base.join(&*path);
    }
}

/// A raw little-endian `u16` depth buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDepthConfig {
    /// Path of the raw file.
    pub path: PathBuf,
    /// Image shape as `[height, width]`; the file does not carry it.
    #[serde(default)]
    pub shape: Option<[u32; 2]>,
}

/// Configuration of the depth inspector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthInspectorConfig {
    /// Single-channel 16-bit depth PNG.
    pub depth_png: PathBuf,

    /// Optional raw depth buffer to summarize alongside the PNG.
    #[serde(default)]
    pub raw_depth: Option<RawDepthConfig>,

    /// Color map applied to the normalized depth.
    #[serde(default = "default_colormap")]
    pub colormap: String,

    /// Where to write the false-color image. Nothing is written when unset.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_colormap() -> String {
    "jet".to_string()
}

impl DepthInspectorConfig {
    /// Creates a config for a single depth PNG with defaults for everything else.
    pub fn new(depth_png: impl Into<PathBuf>) -> Self {
        Self {
            depth_png: depth_png.into(),
            raw_depth: None,
            colormap: default_colormap(),
            output: None,
        }
    }

    /// Loads a config from a JSON file, resolving relative paths against its directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config: Self = load_json(path)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Makes every relative path in the config relative to `base`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        resolve(base, &mut self.depth_png);
        if let Some(raw) = &mut self.raw_depth {
            resolve(base, &mut raw.path);
        }
        if let Some(output) = &mut self.output {
            resolve(base, output);
        }
    }
}

/// A group of cameras drawn in one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraGroupConfig {
    /// Frustum edge color, components in `[0, 1]`.
    pub color: Vec3,
    /// Camera dictionary JSON file.
    pub cameras: PathBuf,
}

/// External geometry to draw next to the cameras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Geometry file (PLY).
    pub path: PathBuf,
    /// Declared type: `"mesh"` or `"point cloud"`.
    #[serde(default = "default_geometry_kind")]
    pub kind: String,
}

fn default_geometry_kind() -> String {
    "mesh".to_string()
}

/// Configuration of the camera visualizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraVisualizerConfig {
    /// Camera groups, drawn in order.
    pub camera_groups: Vec<CameraGroupConfig>,

    /// Radius of the reference sphere.
    #[serde(default = "default_sphere_radius")]
    pub sphere_radius: f32,

    /// Distance from each camera to its drawn image plane.
    #[serde(default = "default_camera_size")]
    pub camera_size: f32,

    /// Optional mesh or point cloud.
    #[serde(default)]
    pub geometry: Option<GeometryConfig>,

    /// Output PLY file for the assembled scene.
    pub output: PathBuf,
}

fn default_sphere_radius() -> f32 {
    1.0
}

fn default_camera_size() -> f32 {
    0.1
}

impl CameraVisualizerConfig {
    /// Loads a config from a JSON file, resolving relative paths against its directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config: Self = load_json(path)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Makes every relative path in the config relative to `base`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for group in &mut self.camera_groups {
            resolve(base, &mut group.cameras);
        }
        if let Some(geometry) = &mut self.geometry {
            resolve(base, &mut geometry.path);
        }
        resolve(base, &mut self.output);
    }
}
