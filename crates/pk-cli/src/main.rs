//! ProbKit CLI

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pk_engine::{dispatch, CalculationOutput, CalculationRequest};

#[derive(Parser)]
#[command(name = "probkit")]
#[command(about = "ProbKit - probability and statistics computation engine")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a calculation request
    Calc {
        /// Input request (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the result (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print a scalar result as "0.5073 (50.73%)".
        #[arg(long)]
        percent: bool,
    },

    /// Print version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Calc { input, output, percent } => cmd_calc(&input, output.as_deref(), percent),
        Commands::Version => {
            println!("probkit {}", pk_core::VERSION);
            Ok(())
        }
    }
}

fn cmd_calc(input: &Path, output: Option<&Path>, percent: bool) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading request from {}", input.display()))?;
    let request: CalculationRequest =
        serde_json::from_str(&text).context("parsing calculation request JSON")?;

    tracing::debug!(calc_type = ?request.calc_type, n_vars = request.variables.len(), "dispatching");
    let result = dispatch(&request).context("calculation failed")?;

    let json = serde_json::to_string_pretty(&result)?;
    match output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("writing result to {}", path.display()))?,
        None => println!("{json}"),
    }

    if percent {
        if let CalculationOutput::Scalar { value } = result {
            println!("{}", format_probability(value));
        }
    }
    Ok(())
}

/// Display form used by presentation layers: value plus percentage.
fn format_probability(p: f64) -> String {
    format!("{:.4} ({:.2}%)", p, p * 100.0)
}
