//! The map being edited

use serde::{Serialize, Deserialize};
use super::Polygon;

/// A named collection of polygons
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorMap {
    /// Display name, also used to derive the file name
    pub name: String,
    #[serde(default)]
    pub polys: Vec<Polygon>,
}

impl VectorMap {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            polys: Vec::new(),
        }
    }

    /// Push an empty polygon and return its index
    pub fn new_poly(&mut self) -> usize {
        self.polys.push(Polygon::new());
        self.polys.len() - 1
    }

    /// Remove the most recently created polygon
    pub fn pop_poly(&mut self) -> Option<Polygon> {
        self.polys.pop()
    }

    pub fn poly(&self, index: usize) -> Option<&Polygon> {
        self.polys.get(index)
    }

    pub fn poly_mut(&mut self, index: usize) -> Option<&mut Polygon> {
        self.polys.get_mut(index)
    }

    /// Total vertex count across all polygons
    pub fn vertex_count(&self) -> usize {
        self.polys.iter().map(|p| p.len()).sum()
    }
}
