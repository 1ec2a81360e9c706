//! Writing rendered images to disk.

use std::path::Path;

use camscope_core::{CamscopeError, Result};
use image::RgbImage;

/// Saves an RGB image, choosing the encoder from the file extension.
///
/// Supported extensions are `.png`, `.jpg` and `.jpeg`.
pub fn save_image(path: impl AsRef<Path>, img: &RgbImage) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let format = match extension.as_str() {
        "png" => image::ImageFormat::Png,
        "jpg" | "jpeg" => image::ImageFormat::Jpeg,
        _ => return Err(CamscopeError::UnsupportedImageFormat(extension)),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    img.save_with_format(path, format)?;
    log::info!("wrote {}", path.display());
    Ok(())
}
