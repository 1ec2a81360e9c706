//! Core abstractions for camscope-rs.
//!
//! This crate provides the types shared by the depth inspector and the camera visualizer:
//! - [`CamscopeError`] and the crate-wide [`Result`] alias
//! - JSON configuration structs for both pipelines (see [`options`])

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod options;

pub use error::{CamscopeError, Result};
pub use options::{
    load_json, CameraGroupConfig, CameraVisualizerConfig, DepthInspectorConfig, GeometryConfig,
    RawDepthConfig,
};

// Re-export glam types for convenience
pub use glam::{Mat3, Mat4, Vec3, Vec4};
