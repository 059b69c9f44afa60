//! Map loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable map files.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::math::map_file_stem;
use super::VectorMap;

/// File extension for map files
pub const MAP_EXTENSION: &str = "ron";

/// Error type for map loading and saving
#[derive(Debug, Error)]
pub enum MapError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Map has no name")]
    EmptyName,
}

impl MapError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        MapError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result of opening a map by name
#[derive(Debug)]
pub struct OpenedMap {
    pub map: VectorMap,
    pub path: PathBuf,
    /// No file existed yet; the map starts empty
    pub created: bool,
}

/// Path of the file backing a map with the given name
pub fn map_path<P: AsRef<Path>>(dir: P, name: &str) -> Result<PathBuf, MapError> {
    let stem = map_file_stem(name);
    if stem.is_empty() {
        return Err(MapError::EmptyName);
    }
    Ok(dir.as_ref().join(format!("{}.{}", stem, MAP_EXTENSION)))
}

/// Load a map from a RON file
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<VectorMap, MapError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| MapError::io(path, e))?;
    load_map_from_str(&contents)
}

/// Load a map from a RON string
pub fn load_map_from_str(s: &str) -> Result<VectorMap, MapError> {
    Ok(ron::from_str(s)?)
}

/// Save a map to a RON file
pub fn save_map<P: AsRef<Path>>(map: &VectorMap, path: P) -> Result<(), MapError> {
    let path = path.as_ref();
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(map, config)?;
    fs::write(path, contents).map_err(|e| MapError::io(path, e))?;
    Ok(())
}

/// Save a map into `dir` under its own name, returning the path written
pub fn save_named<P: AsRef<Path>>(map: &VectorMap, dir: P) -> Result<PathBuf, MapError> {
    let dir = dir.as_ref();
    let path = map_path(dir, &map.name)?;
    fs::create_dir_all(dir).map_err(|e| MapError::io(dir, e))?;
    save_map(map, &path)?;
    Ok(path)
}

/// Open the map called `name` from `dir`, or start a new one if no file exists
pub fn open_map<P: AsRef<Path>>(dir: P, name: &str) -> Result<OpenedMap, MapError> {
    let name = name.trim();
    let path = map_path(dir, name)?;

    if !path.exists() {
        return Ok(OpenedMap {
            map: VectorMap::new(name),
            path,
            created: true,
        });
    }

    let mut map = load_map(&path)?;
    // Saving must go back to the file it came from
    map.name = name.to_string();
    Ok(OpenedMap {
        map,
        path,
        created: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    fn sample_map(name: &str) -> VectorMap {
        let mut map = VectorMap::new(name);
        let idx = map.new_poly();
        let poly = map.poly_mut(idx).unwrap();
        poly.add_vertex(Vec2::new(0.0, 0.0));
        poly.add_vertex(Vec2::new(64.0, 0.0));
        poly.add_vertex(Vec2::new(32.0, 48.5));
        poly.closed = true;
        map
    }

    #[test]
    fn test_map_path() {
        let path = map_path("maps", "Cave Level").unwrap();
        assert_eq!(path, Path::new("maps").join("cave_level.ron"));
        assert!(matches!(map_path("maps", "   "), Err(MapError::EmptyName)));
    }

    #[test]
    fn test_map_path_does_not_double_extension() {
        let path = map_path("maps", "Caves.RON").unwrap();
        assert_eq!(path, Path::new("maps").join("caves.ron"));
    }

    #[test]
    fn test_save_then_open() {
        let dir = tempfile::tempdir().unwrap();
        let maps_dir = dir.path().join("maps");
        let map = sample_map("Cave Level");

        let written = save_named(&map, &maps_dir).unwrap();
        assert!(written.exists());

        let opened = open_map(&maps_dir, "Cave Level").unwrap();
        assert!(!opened.created);
        assert_eq!(opened.path, written);
        assert_eq!(opened.map, map);
    }

    #[test]
    fn test_open_missing_creates_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let opened = open_map(dir.path(), "fresh").unwrap();
        assert!(opened.created);
        assert_eq!(opened.map.name, "fresh");
        assert!(opened.map.polys.is_empty());
    }

    #[test]
    fn test_save_without_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        let map = VectorMap::new("");
        assert!(matches!(save_named(&map, dir.path()), Err(MapError::EmptyName)));
    }

    #[test]
    fn test_load_rejects_bad_vertex() {
        let src = r#"(name: "bad", polys: [(vertices: ["1 2", "oops"], closed: true)])"#;
        assert!(matches!(load_map_from_str(src), Err(MapError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_non_finite_vertex() {
        let src = r#"(name: "bad", polys: [(vertices: ["NaN inf", "1 2", "3 4"])])"#;
        assert!(matches!(load_map_from_str(src), Err(MapError::Parse(_))));
    }

    #[test]
    fn test_load_accepts_hand_written_file() {
        let src = r#"(name: "hand", polys: [(vertices: ["1 2", "3 4", "5 0"])])"#;
        let map = load_map_from_str(src).unwrap();
        assert_eq!(map.polys[0].vertices[2], Vec2::new(5.0, 0.0));
        assert!(!map.polys[0].closed);
    }
}
