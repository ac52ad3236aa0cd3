use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use log::{error, info};
use master_mold::logger;
use master_mold::workitems::template::{generate_template_file, DEFAULT_TEMPLATE_FILE_NAME};
use master_mold::workitems::{group_by_type, read_fields, to_patches};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "mm-azure-devops",
    version,
    about = "Manage Azure DevOps work item files"
)]
struct Cli {
    /// Log more (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work item files
    #[command(subcommand)]
    WorkItems(WorkItemCommands),
}

#[derive(Subcommand)]
enum WorkItemCommands {
    /// Generate a template JSON file for describing a work item
    Template {
        /// Where to write the template
        #[arg(short, long, default_value = DEFAULT_TEMPLATE_FILE_NAME)]
        output: PathBuf,
    },

    /// Show the JSON-patch document a work item file turns into
    Preview {
        /// Path to the JSON file containing work item fields
        #[arg(long = "json", value_name = "FILE")]
        json: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);
    info!("Starting Azure DevOps subcommand");

    let result = match cli.command {
        Commands::WorkItems(WorkItemCommands::Template { output }) => handle_template(&output),
        Commands::WorkItems(WorkItemCommands::Preview { json }) => handle_preview(&json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn handle_template(output: &Path) -> Result<()> {
    info!("Generating work item template");
    let written = generate_template_file(output).context("Failed to generate template")?;

    println!("{} Template file created: {}", "✔".green(), written.display());
    println!("Edit this file and use it with the 'preview' command to check the result.");
    Ok(())
}

fn handle_preview(json: &Path) -> Result<()> {
    let fields = read_fields(json).context("Failed to read work items from file")?;

    for (kind, fields) in group_by_type(fields) {
        let document = serde_json::to_string_pretty(&to_patches(&fields))
            .context("Failed to render patch document")?;
        println!("{} {}", "Work item type:".bold(), kind.cyan());
        println!("{}", document);
    }
    Ok(())
}
