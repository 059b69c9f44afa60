//! Basic UI widgets

use std::f32::consts::FRAC_PI_4;
use macroquad::prelude::*;
use crate::math::{distance_to, radians_to_cartesian};
use super::Rect;

/// Offset of the cursor tail along each axis
pub const CURSOR_OFFSET: f32 = 20.0;

/// Draw the mouse cursor as a short diagonal line fading to white
pub fn draw_mouse_cursor(x: f32, y: f32, color: Color) {
    let (dx, dy) = radians_to_cartesian(FRAC_PI_4);
    let half = distance_to(CURSOR_OFFSET, CURSOR_OFFSET) * 0.5;
    let (mx, my) = (x + dx * half, y + dy * half);
    draw_line(x, y, mx, my, 1.0, color);
    draw_line(mx, my, x + CURSOR_OFFSET, y + CURSOR_OFFSET, 1.0, WHITE);
}

/// Status bar with a left-aligned and a right-aligned label
pub fn draw_status_bar(rect: Rect, left: &str, right: &str) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, Color::from_rgba(45, 45, 50, 255));

    let font_size = 14.0;
    let text_color = Color::from_rgba(200, 200, 200, 255);
    let dims = measure_text(left, None, font_size as u16, 1.0);
    // Round to integer pixels for crisp rendering
    let text_y = (rect.y + (rect.h + dims.offset_y) * 0.5).round();
    draw_text(left, (rect.x + 6.0).round(), text_y, font_size, text_color);

    let right_dims = measure_text(right, None, font_size as u16, 1.0);
    let right_x = (rect.right() - right_dims.width - 6.0).round();
    draw_text(right, right_x, text_y, font_size, text_color);
}
