//! Rendering backend for camscope-rs.
//!
//! This crate turns scalar data into pictures:
//! - Color map registry (`jet`, `viridis`, `coolwarm`, ...)
//! - Depth normalization and false-color rendering
//! - Image output (PNG/JPEG)

// Image code intentionally uses casts between pixel formats
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod color_maps;
pub mod depth_render;
pub mod image_output;

pub use color_maps::{ColorMap, ColorMapRegistry};
pub use depth_render::{colorize, invert, normalize_to_u8, render_depth};
pub use image_output::save_image;
