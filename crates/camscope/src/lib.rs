//! camscope-rs: depth-image inspection and camera-pose visualization.
//!
//! Two independent tools for multi-view / NeRF datasets:
//!
//! - The **depth inspector** loads a 16-bit depth PNG (and optionally a raw
//!   `u16` buffer), reports max/min/mean and renders a false-color image in
//!   which near surfaces are bright.
//! - The **camera visualizer** reads camera dictionaries (intrinsics `K`,
//!   camera-to-world `C2W`, image size), builds one view frustum per camera,
//!   merges each group into a single line set and assembles a scene with a
//!   reference sphere, a coordinate frame and an optional mesh or point cloud.
//!   The scene is exported as a colored PLY file.
//!
//! # Quick Start
//!
//! ```no_run
//! use camscope::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let config = CameraVisualizerConfig::from_file("office_cam/visualize.json")?;
//!     let scene = visualize_cameras(&config)?;
//!     println!("{} geometries written to {}", scene.len(), config.output.display());
//!
//!     Ok(())
//! }
//! ```

// Geometry code intentionally uses casts for indices and colors
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod camera_visualizer;
mod depth_inspector;
mod export;
mod scene;

pub use camera_visualizer::{assemble_scene, visualize_cameras, CameraGroup, GeometryKind};
pub use depth_inspector::{inspect_depth, visualize_depth, DepthReport};
pub use export::{scene_to_ply, write_scene_ply};
pub use scene::{Geometry, Scene, SceneEntry};

// Re-export core types
pub use camscope_core::{
    error::{CamscopeError, Result},
    options::{
        load_json, CameraGroupConfig, CameraVisualizerConfig, DepthInspectorConfig,
        GeometryConfig, RawDepthConfig,
    },
    Mat3, Mat4, Vec3, Vec4,
};

// Re-export render types
pub use camscope_render::{ColorMap, ColorMapRegistry};

// Re-export structures
pub use camscope_structures::{
    camera_frustum, load_camera_dict, read_point_cloud, read_triangle_mesh, CameraDict,
    CameraRecord, CameraView, DepthImage, DepthStats, Frustum, LineSet, PointCloud, TriangleMesh,
    DEFAULT_FRUSTUM_LENGTH,
};

/// Initializes `env_logger` from `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
