use clap::Parser;
use console::style;
use treesync::config::Cli;
use treesync::ui::{format_summary, logging};
use treesync::Config;

fn main() -> anyhow::Result<()> {
    // Malformed arguments exit here with usage and a non-zero status.
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: failed to initialise logging: {}", e);
    }

    // Echoed for any -m, including 0 which disables the override.
    if let Some(mode) = cli.mode {
        println!("Saw mode {:o}", mode);
    }

    let config = Config::try_from(cli)?;

    // A failed sync is reported, but the process still exits normally.
    match treesync::sync(&config) {
        Ok(stats) => {
            if config.verbose {
                println!("{}", format_summary(&stats));
            }
        }
        Err(e) => {
            eprintln!("{} copying directory: {}", style("Error").red().bold(), e);
        }
    }

    Ok(())
}
