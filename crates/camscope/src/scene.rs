//! The assembled scene: an ordered list of named geometries.

use camscope_structures::{LineSet, PointCloud, TriangleMesh};
use glam::Vec3;

/// A renderable geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    LineSet(LineSet),
    TriangleMesh(TriangleMesh),
    PointCloud(PointCloud),
}

impl Geometry {
    /// Human-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LineSet(_) => "line set",
            Self::TriangleMesh(_) => "mesh",
            Self::PointCloud(_) => "point cloud",
        }
    }

    /// Axis-aligned bounds, `None` for empty geometry.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        match self {
            Self::LineSet(g) => g.bounding_box(),
            Self::TriangleMesh(g) => g.bounding_box(),
            Self::PointCloud(g) => g.bounding_box(),
        }
    }

    pub fn as_line_set(&self) -> Option<&LineSet> {
        match self {
            Self::LineSet(g) => Some(g),
            _ => None,
        }
    }
}

impl From<LineSet> for Geometry {
    fn from(g: LineSet) -> Self {
        Self::LineSet(g)
    }
}

impl From<TriangleMesh> for Geometry {
    fn from(g: TriangleMesh) -> Self {
        Self::TriangleMesh(g)
    }
}

impl From<PointCloud> for Geometry {
    fn from(g: PointCloud) -> Self {
        Self::PointCloud(g)
    }
}

/// A named scene element.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneEntry {
    pub name: String,
    pub geometry: Geometry,
}

/// Geometries in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    entries: Vec<SceneEntry>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a geometry.
    pub fn push(&mut self, name: impl Into<String>, geometry: impl Into<Geometry>) -> &mut Self {
        let entry = SceneEntry {
            name: name.into(),
            geometry: geometry.into(),
        };
        log::debug!("scene += {} '{}'", entry.geometry.kind(), entry.name);
        self.entries.push(entry);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SceneEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneEntry> {
        self.entries.iter()
    }

    /// Gets an entry by name.
    pub fn get(&self, name: &str) -> Option<&SceneEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Bounds over all geometries, `None` for an empty scene.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        self.entries
            .iter()
            .filter_map(|e| e.geometry.bounding_box())
            .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
    }
}
