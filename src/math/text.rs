//! String helpers: vertex strings and file-name normalisation

use thiserror::Error;
use super::Vec2;

/// A vertex string that is not two finite numbers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid vertex {0:?}, expected \"x y\"")]
pub struct ParseVec2Error(pub String);

/// Parse a space separated "x y" pair into a vector
///
/// Tokens past the second are ignored. NaN and infinities are rejected.
pub fn parse_vec2(s: &str) -> Result<Vec2, ParseVec2Error> {
    let mut parts = s.split_whitespace();
    let mut next = || -> Result<f32, ParseVec2Error> {
        parts
            .next()
            .and_then(|p| p.parse::<f32>().ok())
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseVec2Error(s.to_string()))
    };
    let x = next()?;
    let y = next()?;
    Ok(Vec2::new(x, y))
}

/// Format a vector the way `parse_vec2` reads it
pub fn format_vec2(v: Vec2) -> String {
    format!("{} {}", v.x, v.y)
}

/// Lowercase, underscored form of a CamelCase expression
///
/// `Foo::BarBaz` becomes `foo/bar_baz`, `HTTPServer` becomes `http_server`.
pub fn underscore(s: &str) -> String {
    let chars: Vec<char> = s.replace("::", "/").chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let acronym_end = prev.is_ascii_uppercase() && next_lower;
            let word_start = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            if acronym_end || word_start {
                out.push('_');
            }
        }
        if c == '-' {
            out.push('_');
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// File stem used to store a map with the given display name
pub fn map_file_stem(name: &str) -> String {
    let stem = underscore(name.trim());
    // Lowercased already, so `.RON` is caught too
    let stem = stem.strip_suffix(".ron").unwrap_or(&stem);
    stem.chars()
        .map(|c| if c == '/' || c == '\\' || c.is_whitespace() { '_' } else { c })
        .collect()
}
