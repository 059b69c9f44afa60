//! Map drawing
//!
//! Immediate mode, so layers are drawn in order: lines, vertices, then guides.

use macroquad::prelude::*;
use crate::math::Vec2 as MapVec2;
use crate::world::Polygon;
use super::{Camera, GuideLine, Layer, MapEditor, line_color};

const LINE_THICKNESS: f32 = 1.5;
const VERTEX_SIZE: f32 = 4.0;

/// Draw every polygon plus the guide lines from the open one to `cursor` (world space)
pub fn draw_map(editor: &MapEditor, camera: &Camera, cursor: MapVec2) {
    let guides = editor.guide_lines(cursor);

    for (i, poly) in editor.map.polys.iter().enumerate() {
        draw_polygon_edges(poly, camera, polygon_color(poly, editor.is_open(i)));
    }
    draw_guides(&guides, camera, Layer::Lines);

    for (i, poly) in editor.map.polys.iter().enumerate() {
        let color = polygon_color(poly, editor.is_open(i));
        for v in &poly.vertices {
            let s = camera.world_to_screen(*v);
            let half = VERTEX_SIZE * 0.5;
            draw_rectangle(s.x - half, s.y - half, VERTEX_SIZE, VERTEX_SIZE, color);
        }
    }

    draw_guides(&guides, camera, Layer::Ui);
}

fn polygon_color(poly: &Polygon, open: bool) -> Color {
    if open {
        line_color::ACTIVE
    } else if poly.is_degenerate() {
        line_color::ERROR
    } else {
        line_color::INACTIVE
    }
}

fn draw_polygon_edges(poly: &Polygon, camera: &Camera, color: Color) {
    for (a, b) in poly.edges() {
        let a = camera.world_to_screen(a);
        let b = camera.world_to_screen(b);
        draw_line(a.x, a.y, b.x, b.y, LINE_THICKNESS, color);
    }
}

fn draw_guides(guides: &[GuideLine], camera: &Camera, layer: Layer) {
    for guide in guides.iter().filter(|g| g.layer == layer) {
        let a = camera.world_to_screen(guide.from);
        let b = camera.world_to_screen(guide.to);
        draw_gradient_line(a, b, guide.from_color, guide.to_color);
    }
}

/// Two-tone line: each half takes the color of its end
fn draw_gradient_line(a: MapVec2, b: MapVec2, from: Color, to: Color) {
    let mid = (a + b) * 0.5;
    draw_line(a.x, a.y, mid.x, mid.y, LINE_THICKNESS, from);
    draw_line(mid.x, mid.y, b.x, b.y, LINE_THICKNESS, to);
}
