//! Adjacency-matrix loader.
//!
//! The input is a CSV table whose header row names the columns and whose first
//! column names the rows. Every nonzero cell `(row, column)` becomes an edge
//! between the two landmarks; empty and zero cells mean "no direct edge".
//!
//! ```text
//! ,Library,Great Hall,Main Gate
//! Library,0,3.5,
//! Great Hall,3.5,0,6
//! Main Gate,,6,0
//! ```
//!
//! The first header cell is a label for the row-name column and is ignored.
//! Loading either yields a complete graph or an error; a partially populated
//! graph is never returned.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::config::TravelConfig;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Node};

/// Load a landmark graph from an adjacency-matrix CSV file.
pub fn load_graph(path: &Path, travel: &TravelConfig) -> Result<Graph> {
    let file = fs::File::open(path)?;
    let graph = Graph::from_reader(file, travel)?;
    debug!(
        path = %path.display(),
        nodes = graph.len(),
        edges = graph.edge_count(),
        "loaded landmark graph"
    );
    Ok(graph)
}

impl Graph {
    /// Build a graph from adjacency-matrix CSV read from `reader`.
    ///
    /// Edge times are derived from `travel`. Every header landmark becomes a
    /// node, including landmarks without any connection.
    pub fn from_reader<R: Read>(reader: R, travel: &TravelConfig) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut records = csv_reader.records();
        let header = records.next().ok_or(Error::EmptyMatrix)??;
        let columns: Vec<String> = header.iter().skip(1).map(str::to_string).collect();
        if columns.is_empty() {
            return Err(Error::invalid(1, "header row names no landmarks"));
        }

        // Lookups are case-insensitive, so names may not differ only by case.
        let mut columns_by_key: HashMap<String, usize> = HashMap::new();
        for (index, name) in columns.iter().enumerate() {
            if name.is_empty() {
                return Err(Error::invalid(1, "header contains an empty landmark name"));
            }
            if let Some(&first) = columns_by_key.get(&name.to_lowercase()) {
                return Err(Error::invalid(
                    1,
                    format!("duplicate column '{name}' (clashes with '{}')", columns[first]),
                ));
            }
            columns_by_key.insert(name.to_lowercase(), index);
        }

        let mut graph = Graph::new();
        for name in &columns {
            graph.add_node(Node::new(name.as_str()));
        }

        let mut seen_rows = HashSet::new();
        for (offset, record) in records.enumerate() {
            let row = offset + 2;
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            if record.len() != columns.len() + 1 {
                return Err(Error::invalid(
                    row,
                    format!(
                        "expected {} cells, found {}",
                        columns.len() + 1,
                        record.len()
                    ),
                ));
            }

            let Some(&from_index) = columns_by_key.get(&record[0].to_lowercase()) else {
                return Err(Error::invalid(
                    row,
                    format!("row landmark '{}' is not a column header", &record[0]),
                ));
            };
            let from_name = columns[from_index].as_str();
            if !seen_rows.insert(from_index) {
                return Err(Error::invalid(row, format!("duplicate row '{from_name}'")));
            }

            for (to_index, cell) in record.iter().skip(1).enumerate() {
                let to_name = &columns[to_index];
                let Some(distance) = parse_cell(cell, row, to_name)? else {
                    continue;
                };
                if to_index == from_index {
                    return Err(Error::invalid(
                        row,
                        format!("nonzero distance from '{from_name}' to itself"),
                    ));
                }
                let edge = Edge::new(from_name, to_name.as_str(), distance)
                    .with_time(travel.minutes(distance));
                graph.add_edge(edge)?;
            }
        }

        Ok(graph)
    }
}

/// Parse one matrix cell. Empty and zero cells mean "no edge".
fn parse_cell(cell: &str, row: usize, column: &str) -> Result<Option<f64>> {
    if cell.is_empty() {
        return Ok(None);
    }
    let distance: f64 = cell.parse().map_err(|err| {
        Error::invalid(row, format!("invalid distance '{cell}' for '{column}': {err}"))
    })?;
    if !distance.is_finite() || distance < 0.0 {
        return Err(Error::invalid(
            row,
            format!("distance for '{column}' must be a non-negative number, got {cell}"),
        ));
    }
    if distance == 0.0 {
        return Ok(None);
    }
    Ok(Some(distance))
}
