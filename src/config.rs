//! User catalog configuration.
//!
//! Reads a replacement stock catalog from `~/.config/gainmatch/catalog` so
//! the search reflects what is actually in the parts drawer without passing
//! `--catalog` every time. One value per line in engineering notation:
//!
//! ```text
//! # ~/.config/gainmatch/catalog
//! 47R
//! 330R
//! 4.7K     # the good metal-film ones
//! 68K
//! 1M
//! ```

use crate::notation::parse_resistor;
use std::path::{Path, PathBuf};

/// Return the gainmatch config directory: `~/.config/gainmatch/`.
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config").join("gainmatch"))
}

/// Load the user catalog from `~/.config/gainmatch/catalog`.
///
/// Returns `None` if the config file doesn't exist or the home directory
/// cannot be determined. Returns `Err` only on parse failures — a missing
/// file is not an error (most users won't have one initially).
pub fn load_user_catalog() -> Result<Option<Vec<f64>>, String> {
    let dir = match config_dir() {
        Some(d) => d,
        None => return Ok(None),
    };

    let path = dir.join("catalog");
    if !path.exists() {
        return Ok(None);
    }
    let catalog = load_catalog_file(&path)?;
    if catalog.is_empty() {
        // Empty file is fine — just fall back to the built-in stock list
        return Ok(None);
    }
    Ok(Some(catalog))
}

/// Read a catalog file: one value per line, `#` comments and blanks ignored.
pub fn load_catalog_file(path: &Path) -> Result<Vec<f64>, String> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading catalog at {}: {e}", path.display()))?;
    parse_catalog(&source).map_err(|e| format!("Error in catalog at {}: {e}", path.display()))
}

/// Parse catalog file contents into an ordered value list.
pub fn parse_catalog(source: &str) -> Result<Vec<f64>, String> {
    let mut values = Vec::new();
    for (lineno, line) in source.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let v = parse_resistor(line).map_err(|e| format!("line {}: {e}", lineno + 1))?;
        values.push(v);
    }
    Ok(values)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
