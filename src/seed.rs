// src/seed.rs
//! Seed graphs: the built-in curriculum plus TOML/JSON seed files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TreeError};
use crate::types::{Node, Position, Status};

/// On-disk wrapper for a seed graph.
///
/// TOML has no top-level arrays, so both formats share the same shape:
/// a single `nodes` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFile {
    pub nodes: Vec<Node>,
}

/// The built-in demo curriculum. Authored at fixed point: running
/// propagation on it changes nothing.
#[must_use]
pub fn builtin() -> Vec<Node> {
    let rows: &[(&str, &str, Status, &[&str], (f64, f64))] = &[
        ("calc1", "Calculus I", Status::Done, &[], (80.0, 60.0)),
        ("phys1", "Physics I", Status::Done, &[], (240.0, 60.0)),
        ("prog1", "Programming I", Status::Failed, &[], (400.0, 60.0)),
        ("calc2", "Calculus II", Status::Enrolled, &["calc1"], (80.0, 180.0)),
        ("phys2", "Physics II", Status::Locked, &["phys1", "calc2"], (240.0, 180.0)),
        ("prog2", "Programming II", Status::Locked, &["prog1"], (400.0, 180.0)),
        ("capstone", "Capstone Project", Status::Locked, &["phys2", "prog2"], (240.0, 300.0)),
    ];

    rows.iter()
        .map(|(id, label, status, deps, (x, y))| {
            let mut node = Node::new(id, label, *status, deps);
            node.position = Position { x: *x, y: *y };
            node
        })
        .collect()
}

/// Loads a seed node list from a `.toml` or `.json` file.
///
/// # Errors
/// Returns an error if the file cannot be read, fails to parse, or has an
/// unrecognized extension.
pub fn from_path(path: &Path) -> Result<Vec<Node>> {
    let content = fs::read_to_string(path).map_err(|source| TreeError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let seed: SeedFile = match ext.as_deref() {
        Some("toml") => toml::from_str(&content).map_err(|e| TreeError::SeedToml {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
        Some("json") => serde_json::from_str(&content).map_err(|e| TreeError::SeedJson {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
        _ => {
            return Err(TreeError::UnsupportedSeedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    Ok(seed.nodes)
}
