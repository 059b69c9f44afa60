//! 2D scrolling camera
//!
//! Scrolling is stored as the world position of the top-left corner of the view.

use crate::math::Vec2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.offset()
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset()
    }
}
