//! CLI argument parsing for promptgen

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pg")]
#[command(author, version, about = "Expand prompt templates and publish them as commands", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing template/ (overrides config)
    #[arg(long, global = true)]
    pub tool_root: Option<PathBuf>,

    /// Directory containing prompt/ and generated_prompt/ (overrides config)
    #[arg(long, global = true)]
    pub work_root: Option<PathBuf>,

    /// Publishing destination (overrides config)
    #[arg(long = "dest", global = true)]
    pub destination: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand prompt/ into generated_prompt/
    Generate,

    /// Copy generated_prompt/ into the destination under normalized names
    Publish,

    /// Generate, then publish
    Run,

    /// Print the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides_after_subcommand() {
        let cli = Cli::try_parse_from(["pg", "generate", "--tool-root", "/t", "--dest", "/d", "-v"]).unwrap();
        assert!(matches!(cli.command, Command::Generate));
        assert_eq!(cli.tool_root, Some(PathBuf::from("/t")));
        assert_eq!(cli.destination, Some(PathBuf::from("/d")));
        assert!(cli.verbose);
        assert!(cli.work_root.is_none());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["pg"]).is_err());
    }
}
