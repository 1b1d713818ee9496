// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments and
// dispatches to these handlers.

pub mod graph;
pub mod menu;
pub mod places;
pub mod route;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use navigator_lib::{load_graph, Graph, TravelConfig};

/// Environment variable consulted when `--data` is not given.
pub const DATA_ENV: &str = "NAVIGATOR_DATA";

/// Matrix location used when neither `--data` nor the env var is set.
pub const DEFAULT_DATA_PATH: &str = "data/landmarks.csv";

/// Resolve the adjacency-matrix path.
///
/// Searches in the following order:
/// 1. The `--data` argument
/// 2. The `NAVIGATOR_DATA` environment variable
/// 3. `data/landmarks.csv` relative to the working directory
pub fn resolve_data_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = std::env::var_os(DATA_ENV) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_DATA_PATH)
}

/// Load the landmark graph, adding the path to any error.
pub fn load_campus(explicit: Option<&Path>, travel: &TravelConfig) -> Result<Graph> {
    let path = resolve_data_path(explicit);
    load_graph(&path, travel)
        .with_context(|| format!("failed to load landmarks from {}", path.display()))
}
