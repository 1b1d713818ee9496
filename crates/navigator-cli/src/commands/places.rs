//! Places command handler for listing landmarks.

use anyhow::Result;
use navigator_lib::{sort_by_length, Graph};

use crate::output::{render_places, OutputFormat};
use crate::terminal::ColorPalette;

/// Landmark names ordered for menus: shortest first, ties in graph order.
pub fn menu_order(graph: &Graph) -> Vec<String> {
    let mut names = graph.node_names();
    sort_by_length(&mut names);
    names
}

/// Handle the places subcommand.
pub fn handle_places(graph: &Graph, format: OutputFormat, palette: &ColorPalette) -> Result<()> {
    let names = menu_order(graph);
    match format {
        OutputFormat::Text => {
            println!(
                "{}\n",
                palette.wrap(palette.title, format!("ALL LANDMARKS ({})", names.len()))
            );
            print!("{}", render_places(&names, palette));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
    }
    Ok(())
}
