//! Structure implementations for camscope-rs.
//!
//! This crate provides the data the two pipelines operate on:
//! - Depth images and their summary statistics
//! - Camera records and view-frustum construction
//! - Line sets (frustum wireframes, sphere wireframes, axis markers)
//! - Triangle meshes and point clouds, with PLY loading

// Geometry code intentionally uses casts for indices, colors, and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod camera_view;
pub mod depth_image;
pub mod line_set;
pub mod ply_io;
pub mod point_cloud;
pub mod surface_mesh;

pub use camera_view::{
    camera_frustum, load_camera_dict, transform_points, CameraDict, CameraRecord, CameraView,
    Frustum, DEFAULT_FRUSTUM_LENGTH, FRUSTUM_EDGES, FRUSTUM_EDGE_COUNT, FRUSTUM_POINT_COUNT,
};
pub use depth_image::{DepthImage, DepthStats};
pub use line_set::LineSet;
pub use ply_io::{read_point_cloud, read_triangle_mesh};
pub use point_cloud::PointCloud;
pub use surface_mesh::TriangleMesh;
