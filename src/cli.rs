use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub const USAGE: &str = "Usage: master-mold <command> [options]";
pub const LIST_HINT: &str = "Run 'master-mold list-binaries' to see available commands";

#[derive(Parser, Debug)]
#[command(
    name = "master-mold",
    version,
    about = "Master Mold: runs mm-* subcommand binaries",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Config file to use instead of the default locations
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Dispatch>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Any name: a built-in command or an mm-<name> binary
    #[command(external_subcommand)]
    External(Vec<String>),
}

impl Dispatch {
    /// The command name and the untouched arguments that follow it.
    pub fn split(&self) -> Option<(&str, &[String])> {
        let Dispatch::External(words) = self;
        words.split_first().map(|(name, rest)| (name.as_str(), rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_after_the_name_is_passed_through() {
        let cli =
            Cli::try_parse_from(["master-mold", "-v", "deploy", "--force", "-v", "prod"]).unwrap();
        assert_eq!(cli.verbose, 1);

        let dispatch = cli.command.unwrap();
        let (name, args) = dispatch.split().unwrap();
        assert_eq!(name, "deploy");
        assert_eq!(args, ["--force", "-v", "prod"]);
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::try_parse_from(["master-mold"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_config_flag() {
        let cli =
            Cli::try_parse_from(["master-mold", "--config", "/tmp/c.toml", "list-binaries"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(
            cli.command,
            Some(Dispatch::External(vec!["list-binaries".to_string()]))
        );
    }
}
