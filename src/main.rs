use anyhow::Result;
use app_review::report::{render, OutputFormat};
use app_review::{ReviewConfig, Reviewer};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Reviews a Python application for bugs, quality, and documentation gaps.
#[derive(Parser)]
#[command(name = "review", author, version, about, long_about = None)]
struct Cli {
    /// Root directory of the application to review.
    path: PathBuf,

    /// Output format.
    #[arg(value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Python interpreter used to check whether optional modules are installed.
    #[arg(long, default_value = "python3")]
    python: String,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("app_review=debug")
    } else {
        EnvFilter::new("app_review=warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    debug!("Logging initialized (verbose={})", cli.verbose);

    let config = ReviewConfig {
        python_interpreter: cli.python,
        ..ReviewConfig::default()
    };
    let reviewer = Reviewer::new(config);
    let result = reviewer.review(&cli.path);

    println!("{}", render(&result, cli.format)?);
    Ok(())
}
