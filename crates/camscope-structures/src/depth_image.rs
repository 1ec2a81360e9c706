//! Depth images: a grid of unsigned 16-bit distance samples.

use std::fmt;
use std::path::Path;

use camscope_core::{CamscopeError, Result};
use image::DynamicImage;

/// Summary statistics of a depth image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthStats {
    pub width: u32,
    pub height: u32,
    pub max: u16,
    pub min: u16,
    pub mean: f64,
    /// Sample width of the source, 8 or 16.
    pub bit_depth: u8,
}

impl fmt::Display for DepthStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) u{}  max: {}  min: {}  mean: {}",
            self.height, self.width, self.bit_depth, self.max, self.min, self.mean
        )
    }
}

/// A depth image stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthImage {
    width: u32,
    height: u32,
    values: Vec<u16>,
    bit_depth: u8,
}

impl DepthImage {
    /// Creates a depth image, checking that `values` holds `width * height` samples.
    pub fn new(width: u32, height: u32, values: Vec<u16>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(CamscopeError::ShapeMismatch {
                what: "depth sample count",
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            values,
            bit_depth: 16,
        })
    }

    /// Loads a single-channel depth PNG, keeping the full 16-bit range.
    ///
    /// 8-bit single-channel images are accepted and widened without rescaling.
    pub fn from_png(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::ImageReader::open(path)
            .map_err(|e| CamscopeError::from_io(e, path))?
            .with_guessed_format()
            .map_err(|e| CamscopeError::from_io(e, path))?
            .decode()
            .map_err(|e| CamscopeError::Format(format!("{}: {e}", path.display())))?;

        let (width, height) = (img.width(), img.height());
        let (values, bit_depth) = match img {
            DynamicImage::ImageLuma16(buf) => (buf.into_raw(), 16),
            DynamicImage::ImageLuma8(buf) => {
                (buf.into_raw().into_iter().map(u16::from).collect(), 8)
            }
            other => {
                return Err(CamscopeError::Format(format!(
                    "{}: expected a single-channel depth image, got {:?}",
                    path.display(),
                    other.color()
                )))
            }
        };
        log::debug!("loaded {width}x{height} u{bit_depth} depth png {}", path.display());
        let mut depth = Self::new(width, height, values)?;
        depth.bit_depth = bit_depth;
        Ok(depth)
    }

    /// Parses a raw buffer of little-endian `u16` samples.
    ///
    /// The buffer carries no shape; pass `[height, width]` when known. Without
    /// a shape the samples are laid out as a single row.
    pub fn from_raw_bytes(bytes: &[u8], shape: Option<[u32; 2]>) -> Result<Self> {
        if bytes.len() % 2 != 0 {
            return Err(CamscopeError::Format(format!(
                "raw depth buffer has odd length {}",
                bytes.len()
            )));
        }
        let values: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|b| u16::from_le_bytes([b[0], b[1]]))
            .collect();

        match shape {
            Some([height, width]) => Self::new(width, height, values),
            None => {
                let width = u32::try_from(values.len()).map_err(|_| {
                    CamscopeError::Format("raw depth buffer too large".to_string())
                })?;
                Self::new(width, 1, values)
            }
        }
    }

    /// Reads a raw little-endian `u16` depth file.
    pub fn from_raw_file(path: impl AsRef<Path>, shape: Option<[u32; 2]>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| CamscopeError::from_io(e, path))?;
        log::debug!("read {} bytes of raw depth from {}", bytes.len(), path.display());
        Self::from_raw_bytes(&bytes, shape)
    }

    /// Returns the image width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the samples, row-major.
    pub fn values(&self) -> &[u16] {
        &self.values
    }

    /// Sample width of the source image: 16, or 8 for a widened 8-bit PNG.
    pub fn bit_depth(&self) -> u8 {
        self.bit_depth
    }

    /// Returns the sample at column `x`, row `y`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize).checked_mul(self.width as usize)?.checked_add(x as usize)?;
        self.values.get(index).copied()
    }

    pub fn max(&self) -> Option<u16> {
        self.values.iter().copied().max()
    }

    pub fn min(&self) -> Option<u16> {
        self.values.iter().copied().min()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let sum: u64 = self.values.iter().map(|&v| u64::from(v)).sum();
        Some(sum as f64 / self.values.len() as f64)
    }

    /// Computes max, min and mean. Fails on an image without samples.
    pub fn stats(&self) -> Result<DepthStats> {
        let empty = || CamscopeError::Domain("depth image has no samples".to_string());
        Ok(DepthStats {
            width: self.width,
            height: self.height,
            max: self.max().ok_or_else(empty)?,
            min: self.min().ok_or_else(empty)?,
            mean: self.mean().ok_or_else(empty)?,
            bit_depth: self.bit_depth,
        })
    }
}
