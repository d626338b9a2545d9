use clap::Parser;
use std::path::PathBuf;

/// Simulated fake-news detector running entirely in the terminal.
#[derive(Parser, Debug, Default)]
#[command(version)]
pub struct Cli {
    /// Optional news text to prefill the input.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// TOML file overriding the built-in keyword lists.
    #[arg(long = "keywords", value_name = "FILE")]
    pub keywords: Option<PathBuf>,

    /// Enable debug logging to the session log file.
    #[clap(long = "debug", short = 'd', default_value_t = false)]
    pub debug: bool,
}
