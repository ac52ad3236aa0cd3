use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use master_mold::binary::{find_all, SearchPath};
use master_mold::config::{default_search_dirs, load_config};
use master_mold::display::print_binary_paths;
use master_mold::logger;
use master_mold::process::{detect_invocation, Invocation};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mm-list-binaries", version, about = "List available master-mold subcommands")]
struct Cli {
    /// Config file to use instead of the default locations
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);
    info!("Running mm-list-binaries subcommand");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), &default_search_dirs())
        .context("Error loading configuration")?;

    let binaries = find_all(&config.expanded_base_dir(), &SearchPath::from_env())
        .context("Failed to find binaries")?;
    print_binary_paths(&binaries)?;

    match detect_invocation() {
        Invocation::Unknown => warn!("Failed to determine if running as subcommand"),
        known => println!("\n{}", known),
    }
    Ok(())
}
