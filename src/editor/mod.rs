//! Map Editor
//!
//! Click to place vertices of the open polygon, close it, undo:
//! - Polygon editing state (`MapEditor`)
//! - Scrolling camera
//! - Map drawing with preview guide lines

mod state;
mod camera;
mod draw;

pub use state::*;
pub use camera::*;
pub use draw::*;
