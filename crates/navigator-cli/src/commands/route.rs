//! Route command handler for computing paths between landmarks.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use navigator_lib::{spawn_plan, Graph, RoutePlan, RouteRequest, TravelConfig};

use crate::output::{render_json, render_plan_text, OutputFormat};
use crate::terminal::{path_separator, ColorPalette};

/// Number of alternatives shown when `--limit` is not given.
pub const DEFAULT_ROUTE_LIMIT: usize = 10;

const POLL_INTERVAL: Duration = Duration::from_millis(20);
const NOTICE_AFTER: Duration = Duration::from_millis(500);

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting landmark name.
    pub from: String,
    /// Destination landmark name.
    pub to: String,
    /// Number of ranked alternatives to show.
    pub limit: usize,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(&self.from, &self.to).with_limit(self.limit)
    }
}

/// Compute a plan on a worker thread, telling the user when it takes a while.
pub fn compute_plan(graph: Arc<Graph>, request: RouteRequest, travel: TravelConfig) -> Result<RoutePlan> {
    let started = Instant::now();
    let handle = spawn_plan(graph, request, travel);
    let mut notified = false;
    while !handle.is_finished() {
        if !notified && started.elapsed() >= NOTICE_AFTER {
            eprintln!("Searching routes...");
            notified = true;
        }
        thread::sleep(POLL_INTERVAL);
    }
    Ok(handle.join()?)
}

/// Handle the route subcommand.
pub fn handle_route(
    graph: Arc<Graph>,
    args: &RouteCommandArgs,
    travel: TravelConfig,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let source = graph.resolve(&args.from)?;
    let destination = graph.resolve(&args.to)?;
    if source == destination {
        bail!("destination and current location cannot be the same ({source})");
    }

    let plan = compute_plan(Arc::clone(&graph), args.to_request(), travel)?;
    match format {
        OutputFormat::Text => print!("{}", render_plan_text(&plan, palette, path_separator())),
        OutputFormat::Json => render_json(&plan)?,
    }
    Ok(())
}
