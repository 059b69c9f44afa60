//! Editor state: the map plus the polygon currently being drawn

use macroquad::prelude::Color;
use crate::math::Vec2;
use crate::world::VectorMap;

/// Line colors used by the editor
pub mod line_color {
    use macroquad::prelude::Color;

    /// Closed polygon that cannot enclose an area
    pub const ERROR: Color = Color::new(0.8, 0.2, 0.0, 1.0);
    /// Polygon being drawn
    pub const ACTIVE: Color = Color::new(0.0, 0.6, 0.2, 1.0);
    /// Finished polygon
    pub const INACTIVE: Color = Color::new(0.0, 0.6, 0.8, 1.0);
    /// Mouse end of the guide lines
    pub const SELECTED: Color = Color::new(0.0, 1.0, 0.0, 1.0);
}

/// Layer a guide line is drawn on
///
/// `Lines` sits with the polygon edges under the vertices, `Ui` above everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Lines,
    Ui,
}

/// A preview segment drawn while a polygon is open
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    pub from: Vec2,
    pub to: Vec2,
    pub from_color: Color,
    pub to_color: Color,
    pub layer: Layer,
}

/// Polygon editing state
pub struct MapEditor {
    /// The map being edited
    pub map: VectorMap,
    /// Index of the polygon receiving clicks (None = next click starts one)
    pub open_poly: Option<usize>,
    /// Dirty flag (unsaved changes)
    pub dirty: bool,
}

impl MapEditor {
    pub fn new(map: VectorMap) -> Self {
        Self {
            map,
            open_poly: None,
            dirty: false,
        }
    }

    /// Swap in another map, nothing open
    pub fn replace_map(&mut self, map: VectorMap) {
        self.map = map;
        self.open_poly = None;
        self.dirty = false;
    }

    /// Place a vertex, starting a new polygon if none is open
    pub fn click(&mut self, pos: Vec2) {
        let idx = match self.open_poly {
            Some(idx) if idx < self.map.polys.len() => idx,
            _ => self.map.new_poly(),
        };
        self.open_poly = Some(idx);

        if let Some(poly) = self.map.poly_mut(idx) {
            poly.add_vertex(pos);
            self.dirty = true;
        }
    }

    /// Remove the last vertex of the open polygon
    pub fn undo_line(&mut self) {
        if let Some(poly) = self.open_poly.and_then(|idx| self.map.poly_mut(idx)) {
            if poly.pop_vertex().is_some() {
                self.dirty = true;
            }
        }
    }

    /// Remove the most recent polygon from the map
    pub fn undo_poly(&mut self) {
        if self.map.pop_poly().is_none() {
            return;
        }
        self.dirty = true;
        if matches!(self.open_poly, Some(idx) if idx >= self.map.polys.len()) {
            self.open_poly = None;
        }
    }

    /// Finish the open polygon; the next click starts a new one
    pub fn close_poly(&mut self) {
        let Some(idx) = self.open_poly.take() else {
            return;
        };
        self.dirty = true;

        let empty = match self.map.poly_mut(idx) {
            Some(poly) => {
                poly.closed = true;
                poly.is_empty()
            }
            None => false,
        };

        if empty {
            self.map.polys.remove(idx);
        }
    }

    /// Most recent vertex of the open polygon
    pub fn last_vertex(&self) -> Option<Vec2> {
        self.open_poly
            .and_then(|idx| self.map.poly(idx))
            .and_then(|poly| poly.last())
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_poly == Some(index)
    }

    /// Preview lines from the open polygon to the mouse (world space)
    pub fn guide_lines(&self, mouse: Vec2) -> Vec<GuideLine> {
        let mut lines = Vec::new();

        let Some(poly) = self.open_poly.and_then(|idx| self.map.poly(idx)) else {
            return lines;
        };
        let (Some(first), Some(last)) = (poly.first(), poly.last()) else {
            return lines;
        };

        lines.push(GuideLine {
            from: last,
            to: mouse,
            from_color: line_color::ACTIVE,
            to_color: line_color::SELECTED,
            layer: Layer::Ui,
        });

        if poly.len() >= 2 {
            lines.push(GuideLine {
                from: first,
                to: mouse,
                from_color: line_color::ACTIVE,
                to_color: line_color::SELECTED,
                layer: Layer::Ui,
            });
        }

        // Shape of the polygon if it were closed now
        if poly.len() > 2 {
            lines.push(GuideLine {
                from: first,
                to: last,
                from_color: line_color::ACTIVE,
                to_color: line_color::ACTIVE,
                layer: Layer::Lines,
            });
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> MapEditor {
        MapEditor::new(VectorMap::new("test"))
    }

    #[test]
    fn test_click_starts_and_extends_polygon() {
        let mut ed = editor();
        ed.click(Vec2::new(1.0, 2.0));
        ed.click(Vec2::new(3.0, 4.0));

        assert_eq!(ed.map.polys.len(), 1);
        assert_eq!(ed.open_poly, Some(0));
        assert_eq!(ed.map.polys[0].vertices, vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
    }

    #[test]
    fn test_close_then_click_starts_new_polygon() {
        let mut ed = editor();
        ed.click(Vec2::new(0.0, 0.0));
        ed.close_poly();
        assert!(ed.open_poly.is_none());
        assert!(ed.map.polys[0].closed);

        ed.click(Vec2::new(5.0, 5.0));
        assert_eq!(ed.map.polys.len(), 2);
        assert_eq!(ed.open_poly, Some(1));
        assert!(!ed.map.polys[1].closed);
    }

    #[test]
    fn test_close_empty_polygon_removes_it() {
        let mut ed = editor();
        ed.click(Vec2::new(0.0, 0.0));
        ed.undo_line();
        ed.close_poly();
        assert!(ed.map.polys.is_empty());
        assert!(ed.open_poly.is_none());
    }

    #[test]
    fn test_last_vertex() {
        let mut ed = editor();
        assert!(ed.last_vertex().is_none());
        ed.click(Vec2::new(4.0, 2.0));
        assert_eq!(ed.last_vertex(), Some(Vec2::new(4.0, 2.0)));
        ed.close_poly();
        assert!(ed.last_vertex().is_none());
    }

    #[test]
    fn test_dirty_tracking() {
        let mut ed = editor();
        ed.undo_line();
        ed.undo_poly();
        ed.close_poly();
        assert!(!ed.dirty);

        ed.click(Vec2::new(1.0, 1.0));
        assert!(ed.dirty);

        ed.replace_map(VectorMap::new("other"));
        assert!(!ed.dirty);
    }

    #[test]
    fn test_undo_line() {
        let mut ed = editor();
        ed.click(Vec2::new(0.0, 0.0));
        ed.click(Vec2::new(1.0, 0.0));
        ed.undo_line();
        assert_eq!(ed.map.polys[0].len(), 1);
        // Polygon stays open after losing vertices
        assert_eq!(ed.open_poly, Some(0));
    }

    #[test]
    fn test_undo_line_without_open_polygon_is_noop() {
        let mut ed = editor();
        ed.click(Vec2::new(0.0, 0.0));
        ed.close_poly();
        ed.undo_line();
        assert_eq!(ed.map.polys[0].len(), 1);
    }

    #[test]
    fn test_undo_poly_drops_open_polygon() {
        let mut ed = editor();
        ed.click(Vec2::new(0.0, 0.0));
        ed.close_poly();
        ed.click(Vec2::new(9.0, 9.0));

        ed.undo_poly();
        assert_eq!(ed.map.polys.len(), 1);
        assert!(ed.open_poly.is_none());

        // Next click starts a fresh polygon rather than extending the closed one
        ed.click(Vec2::new(2.0, 2.0));
        assert_eq!(ed.map.polys.len(), 2);
        assert_eq!(ed.map.polys[0].len(), 1);
    }

    #[test]
    fn test_undo_poly_on_empty_map() {
        let mut ed = editor();
        ed.undo_poly();
        assert!(ed.map.polys.is_empty());
    }

    #[test]
    fn test_guide_lines_by_vertex_count() {
        let mut ed = editor();
        let mouse = Vec2::new(50.0, 50.0);
        assert!(ed.guide_lines(mouse).is_empty());

        ed.click(Vec2::new(0.0, 0.0));
        let lines = ed.guide_lines(mouse);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to, mouse);

        ed.click(Vec2::new(10.0, 0.0));
        assert_eq!(ed.guide_lines(mouse).len(), 2);

        ed.click(Vec2::new(10.0, 10.0));
        let lines = ed.guide_lines(mouse);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].from, Vec2::new(0.0, 0.0));
        assert_eq!(lines[2].to, Vec2::new(10.0, 10.0));
        assert_eq!(lines[2].layer, Layer::Lines);
    }

    #[test]
    fn test_replace_map_clears_open_polygon() {
        let mut ed = editor();
        ed.click(Vec2::new(0.0, 0.0));
        ed.replace_map(VectorMap::new("other"));
        assert!(ed.open_poly.is_none());
        assert_eq!(ed.map.name, "other");
    }
}
