//! Rustem CLI binary.

use std::io::Write;
use std::process;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use rustem::cli::args::*;
use rustem::cli::commands::*;

fn main() {
    // Parse command line arguments using clap
    let args = RustemArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .parse_env("RUSTEM_LOG")
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: RustemArgs) -> anyhow::Result<()> {
    let command = match &args.command {
        Command::Analyze(_) => "analyze",
        Command::Stopwords(_) => "stopwords",
    };
    execute_command(args).with_context(|| format!("'{command}' failed"))
}
