use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use navigator_cli::commands::graph::handle_graph;
use navigator_cli::commands::menu::{run_menu, MenuOptions};
use navigator_cli::commands::places::handle_places;
use navigator_cli::commands::route::{handle_route, RouteCommandArgs, DEFAULT_ROUTE_LIMIT};
use navigator_cli::commands::load_campus;
use navigator_cli::output::{print_footer, print_logo, OutputFormat};
use navigator_cli::terminal::ColorPalette;
use navigator_lib::config::{DEFAULT_METERS_PER_MINUTE, DEFAULT_METERS_PER_UNIT};
use navigator_lib::TravelConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest walking routes between campus landmarks")]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug, Clone)]
struct GlobalOptions {
    /// Adjacency-matrix CSV describing the landmarks.
    ///
    /// Falls back to `NAVIGATOR_DATA`, then `data/landmarks.csv`.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Meters represented by one unit of matrix distance.
    #[arg(long, global = true, default_value_t = DEFAULT_METERS_PER_UNIT)]
    meters_per_unit: f64,

    /// Walking speed used to derive travel times.
    #[arg(long, global = true, default_value_t = DEFAULT_METERS_PER_MINUTE)]
    meters_per_minute: f64,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable ANSI colors even when the terminal supports them.
    #[arg(long, global = true)]
    no_color: bool,

    /// Skip the banner.
    #[arg(long, global = true)]
    no_logo: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route and ranked alternatives between two landmarks.
    Route {
        /// Starting landmark name.
        #[arg(long = "from")]
        from: String,
        /// Destination landmark name.
        #[arg(long = "to")]
        to: String,
        /// Number of ranked alternatives to show.
        #[arg(long, default_value_t = DEFAULT_ROUTE_LIMIT)]
        limit: usize,
    },
    /// List every landmark, shortest name first.
    Places,
    /// Print the adjacency list of the loaded graph.
    Graph,
    /// Pick source and destination interactively by index.
    Menu {
        /// Number of ranked alternatives to show.
        #[arg(long, default_value_t = DEFAULT_ROUTE_LIMIT)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();

    let options = &cli.global;
    let show_banner = !options.no_logo && options.format == OutputFormat::Text;
    if show_banner {
        print_logo();
    }

    let palette = if options.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };
    let travel = TravelConfig::new(options.meters_per_unit, options.meters_per_minute)
        .context("invalid travel settings")?;
    let graph = Arc::new(load_campus(options.data.as_deref(), &travel)?);

    match cli.command {
        Command::Route { from, to, limit } => {
            let args = RouteCommandArgs { from, to, limit };
            handle_route(graph, &args, travel, options.format, &palette)?;
        }
        Command::Places => handle_places(&graph, options.format, &palette)?,
        Command::Graph => handle_graph(&graph, options.format, &palette)?,
        Command::Menu { limit } => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout().lock();
            run_menu(
                graph,
                MenuOptions { travel, limit },
                &mut input,
                &mut output,
                &palette,
            )?;
        }
    }

    if show_banner {
        print_footer(started.elapsed());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
