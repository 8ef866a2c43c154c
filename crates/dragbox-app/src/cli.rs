use std::path::PathBuf;

use clap::Parser;

/// dragbox: replay a scripted pointer scenario against draggable,
/// resizable panels and print the events they emit.
#[derive(Parser, Debug)]
#[command(name = "dragbox", version, about)]
pub struct Args {
    /// Scenario file (JSON). Runs the built-in demo when omitted.
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
