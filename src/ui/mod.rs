//! Immediate-mode UI pieces
//!
//! - Per-frame input snapshot
//! - Single-line text field
//! - Status bar and cursor widgets

mod input;
mod text_field;
mod widgets;

pub use input::*;
pub use text_field::*;
pub use widgets::*;

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Point strictly inside; points on the border are outside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.x && x < self.right() && y > self.y && y < self.bottom()
    }

    /// Grow the rect by `amount` on every side
    pub fn expand(&self, amount: f32) -> Rect {
        Rect::new(self.x - amount, self.y - amount, self.w + amount * 2.0, self.h + amount * 2.0)
    }

    /// Bottom strip of the given height
    pub fn slice_bottom(&self, height: f32) -> Rect {
        Rect::new(self.x, self.bottom() - height, self.w, height)
    }
}
