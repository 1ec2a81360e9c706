//! Camera view frustums for visualizing camera poses.
//!
//! A frustum is a pyramid with its apex at the camera center and its base on
//! a virtual image plane `length` units in front of the camera (+Z in camera
//! space). Its size follows the camera's field of view.

mod camera_parameters;

pub use camera_parameters::*;

use camscope_core::{CamscopeError, Result};
use glam::{Mat3, Mat4, Vec3};

/// Default distance from the camera center to the drawn image plane.
pub const DEFAULT_FRUSTUM_LENGTH: f32 = 0.5;

/// Vertices per frustum: apex plus four image-plane corners.
pub const FRUSTUM_POINT_COUNT: usize = 5;

/// Edges per frustum.
pub const FRUSTUM_EDGE_COUNT: usize = 8;

/// Frustum edges: apex to each corner, then the corner loop
/// top-left, top-right, bottom-right, bottom-left.
pub const FRUSTUM_EDGES: [[u32; 2]; FRUSTUM_EDGE_COUNT] = [
    [0, 1],
    [0, 2],
    [0, 3],
    [0, 4],
    [1, 2],
    [2, 3],
    [3, 4],
    [4, 1],
];

/// Wireframe geometry of one camera.
///
/// Fields are public so frustums can be built or edited by hand; the merger in
/// [`crate::LineSet::from_frustums`] checks their shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    /// World-space vertices; index 0 is the apex.
    pub points: Vec<Vec3>,
    /// Edges as index pairs into `points`.
    pub edges: Vec<[u32; 2]>,
    /// One color per edge.
    pub colors: Vec<Vec3>,
}

/// Camera-space frustum vertices: apex, then top-left, top-right,
/// bottom-right and bottom-left corners at depth `length`.
pub fn local_frustum_points(
    img_size: [u32; 2],
    k: &Mat3,
    length: f32,
) -> Result<[Vec3; FRUSTUM_POINT_COUNT]> {
    let [height, width] = img_size;
    let (fx, fy) = (k.x_axis.x, k.y_axis.y);

    let invalid = |reason: String| CamscopeError::InvalidCamera {
        name: String::new(),
        reason,
    };
    if height == 0 || width == 0 {
        return Err(invalid(format!("image size {height}x{width}")));
    }
    if !(fx.is_finite() && fx > 0.0 && fy.is_finite() && fy > 0.0) {
        return Err(invalid(format!("focal lengths fx={fx} fy={fy}")));
    }
    if !(length.is_finite() && length > 0.0) {
        return Err(invalid(format!("frustum length {length}")));
    }

    let hfov = 2.0 * (width as f32 / (2.0 * fx)).atan();
    let vfov = 2.0 * (height as f32 / (2.0 * fy)).atan();
    let half_w = length * (hfov / 2.0).tan();
    let half_h = length * (vfov / 2.0).tan();

    Ok([
        Vec3::ZERO,
        Vec3::new(-half_w, -half_h, length),
        Vec3::new(half_w, -half_h, length),
        Vec3::new(half_w, half_h, length),
        Vec3::new(-half_w, half_h, length),
    ])
}

/// Applies a homogeneous transform to points and divides by the resulting w.
///
/// A rigid or affine transform leaves w at 1. Anything else means the matrix is
/// not a camera-to-world pose and is rejected instead of silently rescaling.
pub fn transform_points(points: &[Vec3], transform: &Mat4) -> Result<Vec<Vec3>> {
    points
        .iter()
        .map(|p| {
            let h = *transform * p.extend(1.0);
            if !h.w.is_finite() || (h.w - 1.0).abs() > 1e-6 {
                return Err(CamscopeError::MalformedTransform(h.w));
            }
            let world = h.truncate() / h.w;
            if world.is_finite() {
                Ok(world)
            } else {
                Err(CamscopeError::MalformedTransform(h.w))
            }
        })
        .collect()
}

/// Builds the world-space frustum of a camera.
///
/// `c2w` is the 3x4 camera-to-world pose, row-major; `color` is applied to all
/// eight edges.
pub fn camera_frustum(
    img_size: [u32; 2],
    k: &Mat3,
    c2w: &[[f32; 4]; 3],
    length: f32,
    color: Vec3,
) -> Result<Frustum> {
    let local = local_frustum_points(img_size, k, length)?;

    let [r0, r1, r2] = *c2w;
    let transform = Mat4::from_cols_array_2d(&[r0, r1, r2, [0.0, 0.0, 0.0, 1.0]]).transpose();
    let points = transform_points(&local, &transform)?;

    Ok(Frustum {
        points,
        edges: FRUSTUM_EDGES.to_vec(),
        colors: vec![color; FRUSTUM_EDGE_COUNT],
    })
}

/// A named camera with its drawing parameters.
#[derive(Debug, Clone)]
pub struct CameraView {
    name: String,
    record: CameraRecord,

    // Visualization parameters
    color: Vec3,
    frustum_length: f32,
}

impl CameraView {
    /// Creates a new camera view with a green frustum of the default length.
    pub fn new(name: impl Into<String>, record: CameraRecord) -> Self {
        Self {
            name: name.into(),
            record,
            color: Vec3::new(0.0, 1.0, 0.0),
            frustum_length: DEFAULT_FRUSTUM_LENGTH,
        }
    }

    /// Returns the camera name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the camera record.
    pub fn record(&self) -> &CameraRecord {
        &self.record
    }

    /// Gets the frustum color.
    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Sets the frustum color.
    pub fn set_color(&mut self, color: Vec3) -> &mut Self {
        self.color = color;
        self
    }

    /// Gets the distance from the camera center to the drawn image plane.
    pub fn frustum_length(&self) -> f32 {
        self.frustum_length
    }

    /// Sets the distance from the camera center to the drawn image plane.
    pub fn set_frustum_length(&mut self, length: f32) -> &mut Self {
        self.frustum_length = length;
        self
    }

    /// Generates the camera frustum wireframe geometry.
    pub fn frustum(&self) -> Result<Frustum> {
        camera_frustum(
            self.record.img_size,
            &self.record.intrinsics(),
            &self.record.c2w,
            self.frustum_length,
            self.color,
        )
        .map_err(|err| match err {
            CamscopeError::InvalidCamera { reason, .. } => CamscopeError::InvalidCamera {
                name: self.name.clone(),
                reason,
            },
            other => other,
        })
    }
}
