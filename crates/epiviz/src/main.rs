use std::path::PathBuf;

use clap::{Parser, Subcommand};
use epiviz::{AppConfig, commands, init_logging};

#[derive(Parser, Debug)]
#[command(name = "epiviz")]
#[command(about = "Turn epidemic simulation output into plot-ready figures")]
struct Args {
    /// Path to the data directory (default: ~/.epiviz/)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: <data-dir>/config.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mean compartment trajectories over time
    Trajectory {
        /// Simulation record (JSON)
        input: PathBuf,

        /// Output figure (JSON); stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave out the individual trial overlays
        #[arg(long)]
        no_trials: bool,
    },
    /// Mean cumulative infections over one or two swept parameters
    Sweep {
        /// Parametric sweep record (JSON)
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Free dimension; give once for a line, twice for a surface
        #[arg(long = "free", value_name = "DIM")]
        free: Vec<String>,

        /// Pin a dimension to a 1-based position
        #[arg(long = "fixed", value_name = "DIM=INDEX")]
        fixed: Vec<String>,
    },
    /// Incubation and infectious period densities of a strain
    Density {
        /// Strain parameters (JSON)
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Samples per curve
        #[arg(long)]
        points: Option<usize>,
    },
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".epiviz")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default(&data_dir)?,
    };

    let (figure, output) = match args.command {
        Command::Trajectory {
            input,
            output,
            no_trials,
        } => {
            if no_trials {
                config.include_trials = false;
            }
            (commands::trajectory(&input, &config)?, output)
        }
        Command::Sweep {
            input,
            output,
            free,
            fixed,
        } => {
            let mut selection = config.sweep.clone();
            if !free.is_empty() {
                selection.free = free;
            }
            for arg in &fixed {
                let (name, index) = commands::parse_fixed(arg)?;
                selection.fixed.insert(name, index);
            }
            (commands::sweep(&input, &selection, &config)?, output)
        }
        Command::Density {
            input,
            output,
            points,
        } => (commands::density(&input, points, &config)?, output),
    };

    commands::write_figure(&figure, output.as_deref())?;

    tracing::info!("Done");
    Ok(())
}
