//! World module - polygon maps and their files
//!
//! - `Polygon`: an ordered vertex list, open while being drawn
//! - `VectorMap`: the named collection of polygons being edited
//! - RON map files with vertices stored as "x y" strings

mod geometry;
mod map;
mod map_file;

pub use geometry::*;
pub use map::*;
pub use map_file::*;
