//! Depth inspection: statistics and false-color rendering of a depth image.

use camscope_core::{DepthInspectorConfig, Result};
use camscope_render::{render_depth, save_image, ColorMap, ColorMapRegistry};
use camscope_structures::{DepthImage, DepthStats};
use image::RgbImage;

/// Everything the depth inspector produced.
#[derive(Debug, Clone)]
pub struct DepthReport {
    /// Statistics of the depth PNG.
    pub png: DepthStats,
    /// Statistics of the raw buffer, when one was configured.
    pub raw: Option<DepthStats>,
    /// False-color rendering of the depth PNG.
    pub image: RgbImage,
}

/// Renders a depth image: near is bright after inversion, then `color_map` is applied.
pub fn visualize_depth(depth: &DepthImage, color_map: &ColorMap) -> Result<RgbImage> {
    render_depth(depth.values(), depth.width(), depth.height(), color_map)
}

/// Runs the depth inspector: load, summarize, render and optionally save.
pub fn inspect_depth(config: &DepthInspectorConfig) -> Result<DepthReport> {
    let color_maps = ColorMapRegistry::new();
    let color_map = color_maps.require(&config.colormap)?;

    let raw = config
        .raw_depth
        .as_ref()
        .map(|raw| -> Result<DepthStats> {
            let stats = DepthImage::from_raw_file(&raw.path, raw.shape)?.stats()?;
            log::info!("raw {}: {stats}", raw.path.display());
            Ok(stats)
        })
        .transpose()?;

    let depth = DepthImage::from_png(&config.depth_png)?;
    let png = depth.stats()?;
    log::info!("png {}: {png}", config.depth_png.display());

    let image = visualize_depth(&depth, color_map)?;
    if let Some(output) = &config.output {
        save_image(output, &image)?;
    }

    Ok(DepthReport { png, raw, image })
}
