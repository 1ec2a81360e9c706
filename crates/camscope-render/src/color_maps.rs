//! Color map system.

use std::collections::HashMap;

use camscope_core::{CamscopeError, Result};
use glam::Vec3;

/// A color map for mapping scalar values to colors.
#[derive(Debug, Clone)]
pub struct ColorMap {
    /// Color map name.
    pub name: String,
    /// Color samples (evenly spaced from 0 to 1).
    pub colors: Vec<Vec3>,
}

impl ColorMap {
    /// Creates a new color map.
    pub fn new(name: impl Into<String>, colors: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Samples the color map at a given value (0 to 1).
    pub fn sample(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);

        match self.colors.len() {
            0 => Vec3::ZERO,
            1 => self.colors[0],
            len => {
                let n = len - 1;
                let idx = ((t * n as f32).floor() as usize).min(n - 1);
                let frac = t * n as f32 - idx as f32;
                self.colors[idx].lerp(self.colors[idx + 1], frac)
            }
        }
    }

    /// Builds a 256-entry RGB lookup table, entry `i` being the color at `i / 255`.
    pub fn lookup_table(&self) -> [[u8; 3]; 256] {
        let mut lut = [[0u8; 3]; 256];
        for (i, entry) in lut.iter_mut().enumerate() {
            let c = self.sample(i as f32 / 255.0) * 255.0;
            *entry = [
                c.x.round() as u8,
                c.y.round() as u8,
                c.z.round() as u8,
            ];
        }
        lut
    }
}

/// Registry for managing color maps.
#[derive(Default)]
pub struct ColorMapRegistry {
    color_maps: HashMap<String, ColorMap>,
}

impl ColorMapRegistry {
    /// Creates a new color map registry with default color maps.
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        // Jet: dark blue -> blue -> cyan -> yellow -> red -> dark red
        self.register(ColorMap::new(
            "jet",
            vec![
                Vec3::new(0.0, 0.0, 0.5),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 0.5, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(0.5, 1.0, 0.5),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(1.0, 0.5, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.5, 0.0, 0.0),
            ],
        ));

        self.register(ColorMap::new("gray", vec![Vec3::ZERO, Vec3::ONE]));

        self.register(ColorMap::new(
            "viridis",
            vec![
                Vec3::new(0.267, 0.004, 0.329),
                Vec3::new(0.282, 0.140, 0.457),
                Vec3::new(0.253, 0.265, 0.529),
                Vec3::new(0.206, 0.371, 0.553),
                Vec3::new(0.163, 0.471, 0.558),
                Vec3::new(0.127, 0.566, 0.550),
                Vec3::new(0.134, 0.658, 0.517),
                Vec3::new(0.266, 0.749, 0.440),
                Vec3::new(0.477, 0.821, 0.318),
                Vec3::new(0.741, 0.873, 0.150),
                Vec3::new(0.993, 0.906, 0.144),
            ],
        ));

        self.register(ColorMap::new(
            "coolwarm",
            vec![
                Vec3::new(0.230, 0.299, 0.754),
                Vec3::new(0.552, 0.690, 0.996),
                Vec3::new(0.866, 0.866, 0.866),
                Vec3::new(0.956, 0.604, 0.486),
                Vec3::new(0.706, 0.016, 0.150),
            ],
        ));

        self.register(ColorMap::new(
            "rainbow",
            vec![
                Vec3::new(0.5, 0.0, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
            ],
        ));
    }

    /// Registers a color map.
    pub fn register(&mut self, color_map: ColorMap) {
        self.color_maps.insert(color_map.name.clone(), color_map);
    }

    /// Gets a color map by name.
    pub fn get(&self, name: &str) -> Option<&ColorMap> {
        self.color_maps.get(name)
    }

    /// Gets a color map by name, failing with [`CamscopeError::ColorMapNotFound`].
    pub fn require(&self, name: &str) -> Result<&ColorMap> {
        self.get(name).ok_or_else(|| {
            let known: Vec<&str> = self.names().collect();
            log::warn!("unknown color map '{name}', known: {}", known.join(", "));
            CamscopeError::ColorMapNotFound(name.to_string())
        })
    }

    /// Returns all color map names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.color_maps.keys().map(String::as_str)
    }
}
