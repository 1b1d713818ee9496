//! Interactive menu: pick a source and destination by index, then show routes.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{bail, Result};
use navigator_lib::{sort_by_length, Graph, RouteRequest, TravelConfig};

use crate::commands::places::menu_order;
use crate::commands::route::compute_plan;
use crate::output::{render_places, render_plan_text};
use crate::terminal::{path_separator, ColorPalette};

/// Options for one interactive session.
#[derive(Debug, Clone, Copy)]
pub struct MenuOptions {
    pub travel: TravelConfig,
    pub limit: usize,
}

/// Run the interactive menu against `input` and `output`.
///
/// The destination list leaves out the chosen location. Invalid selections
/// are re-prompted; running out of input before both selections are made is
/// an error.
pub fn run_menu<R, W>(
    graph: Arc<Graph>,
    options: MenuOptions,
    input: &mut R,
    output: &mut W,
    palette: &ColorPalette,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let names = menu_order(&graph);
    if names.len() < 2 {
        bail!("at least two landmarks are needed to plan a route");
    }

    writeln!(output, "{}\n", palette.wrap(palette.title, "ALL LANDMARKS"))?;
    write!(output, "{}", render_places(&names, palette))?;

    let source = prompt_index(
        input,
        output,
        palette,
        "Please select your current location (by index): ",
        names.len(),
    )?;
    let source = graph.resolve(&names[source])?.clone();

    let mut destinations: Vec<String> = graph
        .nodes_except(&source)
        .map(|node| node.name().to_string())
        .collect();
    sort_by_length(&mut destinations);

    writeln!(output, "\n{}\n", palette.wrap(palette.title, "DESTINATIONS"))?;
    write!(output, "{}", render_places(&destinations, palette))?;
    let destination = prompt_index(
        input,
        output,
        palette,
        "Select your destination (by index): ",
        destinations.len(),
    )?;
    let destination = &destinations[destination];

    writeln!(
        output,
        "Selected source: {}, destination: {}\n",
        palette.wrap(palette.name, &source),
        palette.wrap(palette.name, destination)
    )?;

    let request = RouteRequest::new(source.name(), destination.as_str()).with_limit(options.limit);
    let plan = compute_plan(graph, request, options.travel)?;
    write!(output, "{}", render_plan_text(&plan, palette, path_separator()))?;
    Ok(())
}

/// Prompt until the user enters a 1-based index in range, returning it
/// zero-based.
fn prompt_index<R, W>(
    input: &mut R,
    output: &mut W,
    palette: &ColorPalette,
    prompt: &str,
    count: usize,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "\n{}", palette.wrap(palette.prompt, prompt))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before a selection was made");
        }

        let Ok(choice) = line.trim().parse::<usize>() else {
            writeln!(
                output,
                "{}",
                palette.wrap(palette.error, "Sorry, invalid input. Please try again.")
            )?;
            continue;
        };
        if choice == 0 || choice > count {
            let message = format!("Please enter a number between 1 and {count}");
            writeln!(output, "{}", palette.wrap(palette.error, message))?;
            continue;
        }
        return Ok(choice - 1);
    }
}
