#![forbid(unsafe_code)]

mod cmd;
mod config;
mod output;

use clap::{Parser, Subcommand};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "wg: weighted-graph analysis",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Configuration file (default: ./wgraph.toml when present).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Summarize graph structure",
        long_about = "Report node and edge counts, connectivity, cycles, coloring size and the planarity/bipartiteness heuristics.",
        after_help = "EXAMPLES:\n    wg stats roads.json\n\n    # Machine-readable output\n    wg stats roads.json --format json"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        about = "List nodes in traversal order",
        long_about = "Breadth-first or depth-first visit order from a start node. Only the start node's component is visited.",
        after_help = "EXAMPLES:\n    wg traverse roads.json --from 1\n\n    wg traverse roads.json --from 1 --order dfs"
    )]
    Traverse(cmd::traverse::TraverseArgs),

    #[command(
        about = "Shortest distances from a source",
        long_about = "Single-source shortest distances to every node. Unreachable nodes report `inf` (`null` in JSON).",
        after_help = "EXAMPLES:\n    wg distances roads.json --from 1\n\n    # Tolerate negative weights (fails on negative cycles)\n    wg distances roads.json --from 1 --engine bellman-ford"
    )]
    Distances(cmd::distances::DistancesArgs),

    #[command(
        about = "Cheapest path between two nodes",
        after_help = "EXAMPLES:\n    wg path roads.json --from 1 --to 9\n\n    wg path roads.json --from 1 --to 9 --format json"
    )]
    Path(cmd::path::PathArgs),

    #[command(
        about = "Welsh-Powell coloring",
        long_about = "Greedy degree-ordered coloring. The color count is an upper bound, not the chromatic number.",
        after_help = "EXAMPLES:\n    wg color roads.json"
    )]
    Color(cmd::color::ColorArgs),

    #[command(
        about = "Export Graphviz DOT",
        after_help = "EXAMPLES:\n    wg export roads.json --color | dot -Tsvg > roads.svg\n\n    wg export roads.json --path-from 1 --path-to 9"
    )]
    Export(cmd::export::ExportArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("WGRAPH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "wgraph_core=debug,wg=debug,info"
        } else {
            "wgraph_core=warn,wg=info,warn"
        })
    });

    let format = env::var("WGRAPH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    // Logs go to stderr so stdout stays parseable.
    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn dispatch(cli: &Cli, config: &config::WgConfig, output: OutputMode) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Stats(args) => cmd::stats::run_stats(args, output),
        Commands::Traverse(args) => cmd::traverse::run_traverse(args, output),
        Commands::Distances(args) => {
            let engine = config::resolve_engine(args.engine, config)?;
            cmd::distances::run_distances(args, engine, output)
        }
        Commands::Path(args) => {
            let engine = config::resolve_engine(args.engine, config)?;
            cmd::path::run_path(args, engine, output)
        }
        Commands::Color(args) => cmd::color::run_color(args, output),
        Commands::Export(args) => {
            let engine = config::resolve_engine(args.engine, config)?;
            cmd::export::run_export(args, engine, output)
        }
    }
}

fn fail(output: OutputMode, err: &anyhow::Error) -> ExitCode {
    // Nothing left to report to if stderr itself is gone.
    let _ = render_error(output, &CliError::from_anyhow(err));
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let working_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match config::load_config(cli.config.as_deref(), &working_dir) {
        Ok(config) => config,
        Err(err) => return fail(resolve_output_mode(cli.format, cli.json, None), &err),
    };
    debug!(?config, "configuration loaded");

    let output = resolve_output_mode(cli.format, cli.json, config.output.format.as_deref());

    match dispatch(&cli, &config, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(output, &err),
    }
}
