use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{error, info};
use master_mold::binary::SearchPath;
use master_mold::cli::{Cli, Dispatch, LIST_HINT, USAGE};
use master_mold::config::{default_search_dirs, load_config};
use master_mold::handlers::register_builtins;
use master_mold::logger;
use master_mold::registry::{Registry, SubcommandExecutor};
use master_mold::runner::{ignore_interrupts, Runner};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);
    info!("Starting master-mold");

    match run(&cli) {
        Ok(()) => {
            info!("Command completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let Some((name, args)) = cli.command.as_ref().and_then(Dispatch::split) else {
        println!("{}", USAGE);
        println!("{}", LIST_HINT);
        bail!("no command specified");
    };

    let config = load_config(cli.config.as_deref(), &default_search_dirs())
        .context("Error loading configuration")?;

    let search_path = SearchPath::from_env();
    let executor = SubcommandExecutor::new(
        config.base_dir.clone(),
        search_path.clone(),
        Runner::new(config.timeout()),
    );
    let registry = register_builtins(Registry::builder(), &config, &search_path)
        .build(Some(Box::new(executor)));

    ignore_interrupts();
    registry.execute(name, args)?;
    Ok(())
}
