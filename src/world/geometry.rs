//! Polygon geometry
//!
//! Pure data with minimal behavior; drawing lives in the editor.

use serde::{Serialize, Deserialize};
use crate::math::Vec2;

/// A polygon in world space
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Vertices in placement order
    #[serde(with = "vertex_strings")]
    pub vertices: Vec<Vec2>,
    /// True once the user has finished the polygon
    #[serde(default)]
    pub closed: bool,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, pos: Vec2) {
        self.vertices.push(pos);
    }

    /// Remove the most recently placed vertex
    pub fn pop_vertex(&mut self) -> Option<Vec2> {
        self.vertices.pop()
    }

    pub fn first(&self) -> Option<Vec2> {
        self.vertices.first().copied()
    }

    pub fn last(&self) -> Option<Vec2> {
        self.vertices.last().copied()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Fewer than three vertices cannot enclose an area
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Edges between consecutive vertices, plus last -> first when closed
    pub fn edges(&self) -> Vec<(Vec2, Vec2)> {
        let mut edges: Vec<(Vec2, Vec2)> = self
            .vertices
            .windows(2)
            .map(|w| (w[0], w[1]))
            .collect();

        if self.closed && self.vertices.len() > 2 {
            if let (Some(first), Some(last)) = (self.first(), self.last()) {
                edges.push((last, first));
            }
        }

        edges
    }
}

/// Serialize vertices as "x y" strings
mod vertex_strings {
    use serde::de::Error as _;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};
    use crate::math::{Vec2, format_vec2, parse_vec2};

    pub fn serialize<S: Serializer>(vertices: &[Vec2], s: S) -> Result<S::Ok, S::Error> {
        let mut seq = s.serialize_seq(Some(vertices.len()))?;
        for v in vertices {
            seq.serialize_element(&format_vec2(*v))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Vec2>, D::Error> {
        let raw: Vec<String> = Vec::deserialize(d)?;
        raw.iter()
            .map(|s| parse_vec2(s).map_err(D::Error::custom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        let mut poly = Polygon::new();
        poly.add_vertex(Vec2::new(0.0, 0.0));
        poly.add_vertex(Vec2::new(10.0, 0.0));
        poly.add_vertex(Vec2::new(10.0, 10.0));
        poly.add_vertex(Vec2::new(0.0, 10.0));
        poly
    }

    #[test]
    fn test_open_polygon_edges() {
        let poly = square();
        assert_eq!(poly.edges().len(), 3);
    }

    #[test]
    fn test_closed_polygon_edges_wrap() {
        let mut poly = square();
        poly.closed = true;
        let edges = poly.edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Vec2::new(0.0, 10.0), Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_degenerate() {
        let mut poly = square();
        assert!(!poly.is_degenerate());
        poly.pop_vertex();
        poly.pop_vertex();
        assert!(poly.is_degenerate());
        // Closing a two-vertex polygon does not add a closing edge
        poly.closed = true;
        assert_eq!(poly.edges().len(), 1);
    }

    #[test]
    fn test_vertices_serialize_as_strings() {
        let mut poly = Polygon::new();
        poly.add_vertex(Vec2::new(1.5, -2.0));
        let s = ron::to_string(&poly).unwrap();
        assert!(s.contains("\"1.5 -2\""), "got {}", s);
    }
}
