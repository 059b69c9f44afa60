//! 2D math helpers for the map editor
//!
//! - `Vec2` with the handful of operators the editor needs
//! - Angle conversions between radians, degrees and screen headings
//! - Text helpers for vertex strings and map file names

mod vec;
mod angle;
mod text;

pub use vec::*;
pub use angle::*;
pub use text::*;
