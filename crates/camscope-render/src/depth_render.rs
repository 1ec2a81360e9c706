//! False-color rendering of depth samples.
//!
//! Depth is scaled against the image maximum into `0..=255`, inverted so that
//! near surfaces come out bright, and pushed through a color map lookup table.

use camscope_core::{CamscopeError, Result};
use image::{Rgb, RgbImage};

use crate::color_maps::ColorMap;

/// Scales each sample to `round(value / max * 255)`.
///
/// Fails with [`CamscopeError::Domain`] when `max` is zero, since the
/// normalization is undefined for an all-zero image.
pub fn normalize_to_u8(values: &[u16], max: u16) -> Result<Vec<u8>> {
    if max == 0 {
        return Err(CamscopeError::Domain(
            "cannot normalize depth with maximum 0".to_string(),
        ));
    }
    let max = f64::from(max);
    Ok(values
        .iter()
        .map(|&v| (f64::from(v) / max * 255.0).round().min(255.0) as u8)
        .collect())
}

/// Inverts 8-bit intensities in place (`255 - v`).
pub fn invert(values: &mut [u8]) {
    for v in values {
        *v = 255 - *v;
    }
}

/// Maps 8-bit intensities through `color_map` into an RGB image.
pub fn colorize(values: &[u8], width: u32, height: u32, color_map: &ColorMap) -> Result<RgbImage> {
    let expected = width as usize * height as usize;
    if values.len() != expected {
        return Err(CamscopeError::ShapeMismatch {
            what: "colorize pixel count",
            expected,
            actual: values.len(),
        });
    }

    let lut = color_map.lookup_table();
    let mut img = RgbImage::new(width, height);
    for (pixel, &v) in img.pixels_mut().zip(values) {
        *pixel = Rgb(lut[usize::from(v)]);
    }
    Ok(img)
}

/// Full depth visualization: normalize against the maximum, invert, colorize.
pub fn render_depth(
    values: &[u16],
    width: u32,
    height: u32,
    color_map: &ColorMap,
) -> Result<RgbImage> {
    let max = values.iter().copied().max().ok_or_else(|| {
        CamscopeError::Domain("cannot render an empty depth image".to_string())
    })?;
    let mut gray = normalize_to_u8(values, max)?;
    invert(&mut gray);
    log::debug!(
        "rendering {width}x{height} depth with '{}' (max {max})",
        color_map.name
    );
    colorize(&gray, width, height, color_map)
}
