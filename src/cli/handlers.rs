// src/cli/handlers.rs
//! Command handlers: seed resolution plus the non-interactive commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Config;
use crate::exit::TreeExit;
use crate::render;
use crate::seed;
use crate::store::GraphStore;
use crate::types::Node;

/// Resolves the seed: `--seed` flag first, then `coursetree.toml`, then
/// the built-in curriculum.
pub fn load_seed(flag: Option<&Path>, config: &Config) -> Result<Vec<Node>> {
    let path = flag.map(Path::to_path_buf).or_else(|| config.seed.clone());
    match path {
        Some(p) => {
            seed::from_path(&p).with_context(|| format!("Failed to load seed {}", p.display()))
        }
        None => Ok(seed::builtin()),
    }
}

/// Effective plain-output setting: the flag wins, config is the fallback.
#[must_use]
pub fn plain_output(flag: bool, config: &Config) -> bool {
    flag || config.plain_output()
}

pub fn handle_show(seed_path: Option<PathBuf>, plain: bool) -> Result<TreeExit> {
    let config = Config::load();
    let store = GraphStore::new(load_seed(seed_path.as_deref(), &config)?);
    render::print_graph(store.nodes(), plain_output(plain, &config));
    Ok(TreeExit::Success)
}

pub fn handle_click(
    ids: &[String],
    seed_path: Option<PathBuf>,
    plain: bool,
    verbose: bool,
) -> Result<TreeExit> {
    let config = Config::load();
    let mut store = GraphStore::new(load_seed(seed_path.as_deref(), &config)?);
    store.set_simulation(config.simulation_enabled());

    for id in ids {
        let before = status_label(store.nodes(), id);
        store.apply_click(id);
        if verbose {
            report_click(id, before, status_label(store.nodes(), id));
        }
    }

    render::print_graph(store.nodes(), plain_output(plain, &config));
    Ok(TreeExit::Success)
}

fn status_label(nodes: &[Node], id: &str) -> Option<&'static str> {
    nodes
        .iter()
        .find(|n| n.id == id)
        .map(|n| n.status.label())
}

fn report_click(id: &str, before: Option<&str>, after: Option<&str>) {
    match (before, after) {
        (Some(b), Some(a)) if b != a => {
            println!("{} {id}: {b} -> {a}", "click".cyan());
        }
        (Some(b), Some(_)) => {
            println!("{} {id}: {b} (no change)", "click".cyan());
        }
        _ => {
            println!("{} {id}: unknown id, ignored", "click".cyan());
        }
    }
}
