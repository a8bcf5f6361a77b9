use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "qualifier", bin_name = "qualifier", version)]
#[command(
    about = "Collect quotes, as typed, uwu-ified or in pig latin",
    long_about = None
)]
pub struct Cli {
    /// Command lines to run, e.g. 'quote uwu "hello"' or 'quote list'.
    /// Reads one command per line from stdin when omitted.
    pub commands: Vec<String>,

    /// Directory containing config.json
    #[arg(short, long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

const LOG_LEVEL_VAR: &str = "QUALIFIER_LOG_LEVEL";

/// Level comes from `QUALIFIER_LOG_LEVEL` (default `warn`); `--verbose` forces debug.
fn log_filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_LEVEL_VAR)
        .from_env_lossy();
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

/// Logs go to stderr so list output on stdout stays clean.
pub fn init_tracing_subscriber(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
