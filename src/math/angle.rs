//! Angle conversions
//!
//! Screen headings put 0 degrees at "up" and grow clockwise, which is
//! the math angle in degrees shifted by 90.

use std::f32::consts::PI;
use super::Vec2;

/// Unit vector pointing along `radians`
pub fn radians_to_vec2(radians: f32) -> Vec2 {
    Vec2::new(radians.cos(), radians.sin())
}

/// Same as `radians_to_vec2`, as a plain tuple
pub fn radians_to_cartesian(radians: f32) -> (f32, f32) {
    (radians.cos(), radians.sin())
}

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees / (180.0 / PI)
}

/// Math angle (radians) to screen heading (degrees)
pub fn radians_to_screen(radians: f32) -> f32 {
    radians_to_degrees(radians) + 90.0
}

/// Screen heading (degrees) back to math angle (radians)
pub fn screen_to_radians(heading: f32) -> f32 {
    degrees_to_radians(heading - 90.0)
}

/// Length of the hypotenuse with legs `a` and `b`
pub fn distance_to(a: f32, b: f32) -> f32 {
    (a * a + b * b).sqrt()
}

/// Screen heading of the segment `from -> to`, in [0, 360)
///
/// Screen y grows downward, so heading 90 points right and 180 points down.
pub fn heading(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    radians_to_screen(d.y.atan2(d.x)).rem_euclid(360.0)
}

/// Rotate `target` about `origin` onto the nearest multiple of `step` degrees,
/// keeping its distance from `origin`
pub fn snap_to_angle(origin: Vec2, target: Vec2, step: f32) -> Vec2 {
    let len = (target - origin).len();
    if len == 0.0 || step <= 0.0 {
        return target;
    }
    let snapped = (heading(origin, target) / step).round() * step;
    origin + radians_to_vec2(screen_to_radians(snapped)) * len
}
