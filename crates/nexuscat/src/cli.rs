//! Command-line arguments

use crate::logging::LogLevel;
use clap::Parser;
use nexus_common::OutputFormat;
use std::path::PathBuf;

const VERSION: &str = env!("NEXUSCAT_VERSION");

#[derive(Parser, Debug)]
#[command(name = "nexuscat")]
#[command(about = "List Nexus Mods categories for Baldur's Gate 3", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    /// Config file (default: ~/.config/nexuscat/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print categories as a JSON array instead of a table
    #[arg(long)]
    pub json: bool,

    /// Log request details to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Verbose
        } else if self.quiet {
            LogLevel::Quiet
        } else {
            LogLevel::Normal
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args() {
        let cli = Cli::try_parse_from(["nexuscat"]).unwrap();
        assert!(cli.config.is_none());
        assert_eq!(cli.log_level(), LogLevel::Normal);
        assert_eq!(cli.output_format(), OutputFormat::Table);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["nexuscat", "--json", "-v", "--config", "/tmp/c.toml"])
            .unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Json);
        assert_eq!(cli.log_level(), LogLevel::Verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["nexuscat", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_rejects_positional_args() {
        assert!(Cli::try_parse_from(["nexuscat", "skyrim"]).is_err());
    }
}
