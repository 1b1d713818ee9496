//! Output formatting for route plans and landmark listings.
//!
//! Text renderers return strings so commands and tests can share them; the
//! `print_*` helpers write straight to stdout.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use navigator_lib::{Graph, Route, RoutePlan};

use crate::terminal::{supports_color, supports_unicode, ColorPalette};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Print the CLI logo banner.
///
/// Uses box-drawing characters when Unicode is supported and respects the
/// `NO_COLOR` and `TERM=dumb` conventions.
pub fn print_logo() {
    use crate::terminal::colors;

    let (cyan, yellow, reset) = if supports_color() {
        (colors::CYAN, colors::YELLOW, colors::RESET)
    } else {
        ("", "", "")
    };

    if supports_unicode() {
        println!(
            "{cyan}╭──────────────────────────────────────╮{reset}
{cyan}│{yellow}        L A N D M A R K   N A V        {cyan}│{reset}
{cyan}├──────────────────────────────────────┤{reset}
{cyan}│{yellow}            shortest walks             {cyan}│{reset}
{cyan}╰──────────────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{yellow}+--------------------------------------+
|  LANDMARK NAVIGATOR                  |
|  >> SHORTEST WALKS ON CAMPUS         |
+--------------------------------------+{reset}"
        );
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: std::time::Duration) {
    let palette = ColorPalette::detect();
    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };
    println!("\n{}Completed in {}{}", palette.gray, time_str, palette.reset);
}

fn format_meters(route: &Route) -> String {
    format!("{:.2}m", route.distance_meters)
}

fn format_minutes(route: &Route) -> String {
    format!("{:.2} min(s)", route.time_minutes)
}

/// Render a route plan as text: the optimal route followed by ranked
/// alternatives.
pub fn render_plan_text(plan: &RoutePlan, palette: &ColorPalette, separator: &str) -> String {
    let mut buffer = String::new();
    let optimal = &plan.optimal;

    let _ = writeln!(buffer, "{}", palette.wrap(palette.title, "OPTIMAL ROUTE"));
    let _ = writeln!(
        buffer,
        "Shortest Path: {}",
        palette.wrap(palette.path, optimal.joined(separator))
    );
    let _ = writeln!(
        buffer,
        "Distance: {}",
        palette.wrap(palette.distance, format_meters(optimal))
    );
    let _ = writeln!(
        buffer,
        "Time: {}",
        palette.wrap(palette.time, format_minutes(optimal))
    );

    let _ = writeln!(buffer);
    let heading = format!(
        "ALTERNATE ROUTES ({} of {})",
        plan.alternatives.len(),
        plan.total_alternatives
    );
    let _ = writeln!(buffer, "{}", palette.wrap(palette.title, heading));
    for (index, route) in plan.alternatives.iter().enumerate() {
        let _ = writeln!(
            buffer,
            "{:>3}. {},\t{}\t{}",
            index + 1,
            palette.wrap(palette.path, route.joined(separator)),
            palette.wrap(palette.distance, format_meters(route)),
            palette.wrap(palette.time, format_minutes(route))
        );
    }

    buffer
}

/// Render a route plan in JSON format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json(plan: &RoutePlan) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, plan)?;
    writeln!(stdout)?;
    Ok(())
}

/// Render a numbered landmark list, one name per line.
pub fn render_places(names: &[String], palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    for (index, name) in names.iter().enumerate() {
        let _ = writeln!(
            buffer,
            "{:>3}. {}",
            palette.wrap(palette.path, index + 1),
            palette.wrap(palette.name, name)
        );
    }
    buffer
}

/// Render the adjacency listing with a heading.
pub fn render_graph(graph: &Graph, palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{}",
        palette.wrap(palette.title, "GRAPH: ADJACENCY LIST")
    );
    let _ = writeln!(
        buffer,
        "{} landmarks, {} connections\n",
        graph.len(),
        graph.edge_count() / 2
    );
    buffer.push_str(&graph.render_adjacency());
    buffer
}
