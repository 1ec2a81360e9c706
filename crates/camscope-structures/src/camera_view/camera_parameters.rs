//! Camera records (pinhole intrinsics, camera-to-world extrinsics, image size).

use std::path::Path;

use camscope_core::{load_json, Result};
use glam::{Mat3, Mat4, Vec3};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One camera as stored in a camera dictionary file.
///
/// ```json
/// { "K": [[fx, 0, cx], [0, fy, cy], [0, 0, 1]],
///   "C2W": [[r00, r01, r02, tx], [r10, r11, r12, ty], [r20, r21, r22, tz]],
///   "img_size": [H, W] }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraRecord {
    /// Intrinsic matrix, row-major.
    #[serde(rename = "K")]
    pub k: [[f32; 3]; 3],
    /// Camera-to-world transform, row-major 3x4.
    #[serde(rename = "C2W")]
    pub c2w: [[f32; 4]; 3],
    /// Image size as `[height, width]`.
    pub img_size: [u32; 2],
}

/// Camera dictionary keyed by image name, iterated in file order.
pub type CameraDict = IndexMap<String, CameraRecord>;

/// Loads a camera dictionary from a JSON file.
pub fn load_camera_dict(path: impl AsRef<Path>) -> Result<CameraDict> {
    let path = path.as_ref();
    let cameras: CameraDict = load_json(path)?;
    log::info!("loaded {} cameras from {}", cameras.len(), path.display());
    Ok(cameras)
}

impl CameraRecord {
    /// Creates a record from an intrinsic matrix, a 4x4 camera-to-world matrix and `[H, W]`.
    ///
    /// Only the top three rows of `c2w` are kept.
    pub fn new(k: Mat3, c2w: Mat4, img_size: [u32; 2]) -> Self {
        let k_rows = k.transpose().to_cols_array_2d();
        let c2w_rows = c2w.transpose().to_cols_array_2d();
        Self {
            k: k_rows,
            c2w: [c2w_rows[0], c2w_rows[1], c2w_rows[2]],
            img_size,
        }
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.img_size[0]
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.img_size[1]
    }

    /// Focal length along x (`K[0][0]`).
    pub fn fx(&self) -> f32 {
        self.k[0][0]
    }

    /// Focal length along y (`K[1][1]`).
    pub fn fy(&self) -> f32 {
        self.k[1][1]
    }

    /// Intrinsic matrix.
    pub fn intrinsics(&self) -> Mat3 {
        Mat3::from_cols_array_2d(&self.k).transpose()
    }

    /// Camera-to-world matrix with `[0, 0, 0, 1]` appended as the bottom row.
    pub fn c2w_matrix(&self) -> Mat4 {
        let [r0, r1, r2] = self.c2w;
        Mat4::from_cols_array_2d(&[r0, r1, r2, [0.0, 0.0, 0.0, 1.0]]).transpose()
    }

    /// Camera position in world space (translation column of C2W).
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.c2w[0][3], self.c2w[1][3], self.c2w[2][3])
    }

    /// Horizontal and vertical field of view in radians.
    pub fn fov_radians(&self) -> (f32, f32) {
        let hfov = 2.0 * (self.width() as f32 / (2.0 * self.fx())).atan();
        let vfov = 2.0 * (self.height() as f32 / (2.0 * self.fy())).atan();
        (hfov, vfov)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_JSON: &str = r#"{
        "K": [[500.0, 0.0, 320.0], [0.0, 400.0, 240.0], [0.0, 0.0, 1.0]],
        "C2W": [[1.0, 0.0, 0.0, 1.5], [0.0, 1.0, 0.0, -2.0], [0.0, 0.0, 1.0, 0.25]],
        "img_size": [480, 640]
    }"#;

    #[test]
    fn test_parse_record() {
        let record: CameraRecord = serde_json::from_str(RECORD_JSON).unwrap();
        assert_eq!(record.height(), 480);
        assert_eq!(record.width(), 640);
        assert_eq!(record.fx(), 500.0);
        assert_eq!(record.fy(), 400.0);
        assert_eq!(record.position(), Vec3::new(1.5, -2.0, 0.25));
        assert_eq!(record.c2w_matrix().w_axis.truncate(), record.position());
        assert_eq!(record.intrinsics().z_axis, Vec3::new(320.0, 240.0, 1.0));
    }

    #[test]
    fn test_new_matches_row_layout() {
        let record: CameraRecord = serde_json::from_str(RECORD_JSON).unwrap();
        let rebuilt = CameraRecord::new(record.intrinsics(), record.c2w_matrix(), record.img_size);
        assert_eq!(rebuilt, record);
    }

    #[test]
    fn test_fov() {
        let record = CameraRecord::new(
            Mat3::from_diagonal(Vec3::new(320.0, 240.0, 1.0)),
            Mat4::IDENTITY,
            [480, 640],
        );
        let (hfov, vfov) = record.fov_radians();
        // W / (2 fx) = 1 -> 90 degrees
        assert!((hfov - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((vfov - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_load_keeps_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cams.json");
        let json = format!(r#"{{ "frame_b.png": {RECORD_JSON}, "frame_a.png": {RECORD_JSON}, "frame_c.png": {RECORD_JSON} }}"#);
        std::fs::write(&path, json).unwrap();

        let cameras = load_camera_dict(&path).unwrap();
        let names: Vec<&str> = cameras.keys().map(String::as_str).collect();
        assert_eq!(names, ["frame_b.png", "frame_a.png", "frame_c.png"]);
    }

    #[test]
    fn test_wrong_c2w_shape_is_rejected() {
        let json = r#"{ "K": [[1,0,0],[0,1,0],[0,0,1]], "C2W": [[1,0,0],[0,1,0],[0,0,1]], "img_size": [1, 1] }"#;
        assert!(serde_json::from_str::<CameraRecord>(json).is_err());
    }
}
