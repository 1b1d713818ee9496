//! Graph command handler for printing the adjacency list.

use anyhow::Result;
use navigator_lib::Graph;
use serde::Serialize;

use crate::output::{render_graph, OutputFormat};
use crate::terminal::ColorPalette;

#[derive(Debug, Serialize)]
struct AdjacencyEntry<'a> {
    name: &'a str,
    neighbours: Vec<&'a str>,
}

/// Handle the graph subcommand.
pub fn handle_graph(graph: &Graph, format: OutputFormat, palette: &ColorPalette) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_graph(graph, palette)),
        OutputFormat::Json => {
            let entries = graph
                .nodes()
                .iter()
                .map(|node| {
                    let neighbours = graph
                        .neighbors(node)?
                        .iter()
                        .map(|neighbour| neighbour.name())
                        .collect();
                    Ok(AdjacencyEntry {
                        name: node.name(),
                        neighbours,
                    })
                })
                .collect::<navigator_lib::Result<Vec<_>>>()?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}
