use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use cli::WindowArgs;

#[derive(Parser)]
#[command(name = "flowstats")]
#[command(about = "Streaks, trends, heat maps and achievements for habit flows")]
#[command(version)]
struct Cli {
    /// Working directory used to find .flowstats/config.toml (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (overrides directory lookup)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Overview across all flows: totals, per-flow rows, trends, achievements, heat map
    Overall {
        /// JSON file with the exported flows ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Detailed report for a single flow
    Flow {
        /// JSON file with the exported flows ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// ID of the flow to report on
        #[arg(long)]
        id: String,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Completion heat map for one month
    Heatmap {
        /// JSON file with the exported flows ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Initialize a new .flowstats/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,

        /// Write to ~/.flowstats/config.toml instead of the working directory
        #[arg(long)]
        global: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so JSON on stdout stays clean)
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Overall { input, window } => {
            let config = flowstats::config::Config::load(&work_dir, config_path)?;
            cli::overall::overall_command(&config, &input, &window, cli.pretty)?;
        }
        Commands::Flow { input, id, window } => {
            let config = flowstats::config::Config::load(&work_dir, config_path)?;
            cli::flow::flow_command(&config, &input, &id, &window, cli.pretty)?;
        }
        Commands::Heatmap { input, window } => {
            let config = flowstats::config::Config::load(&work_dir, config_path)?;
            cli::heatmap::heatmap_command(&config, &input, &window, cli.pretty)?;
        }
        Commands::Init { force, global } => {
            cli::init::init_command(&work_dir, config_path, force, global)?;
        }
    }

    Ok(())
}
