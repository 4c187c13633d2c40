//! Command-line arguments of the `polybft` binary.
//!
//! `clap` parses the command-line parameters into the `Args` structure.

use clap::{Parser, Subcommand};

use crate::cmd::inspect::InspectCmd;
use crate::logging::{LogFormat, LogLevel};

#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Log level (default: `info`)
    #[arg(long, global = true, value_name = "LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Log format (default: `plaintext`)
    #[arg(long, global = true, value_name = "LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Print the PolyBFT configuration of a genesis document
    Inspect(InspectCmd),
}

impl Args {
    pub fn new() -> Args {
        Args::parse()
    }

    pub fn get_log_level_or_default(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn get_log_format_or_default(&self) -> LogFormat {
        self.log_format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn args_struct() {
        let args = Args::parse_from([
            "test",
            "--log-level",
            "warn",
            "--log-format",
            "json",
            "inspect",
            "--genesis",
            "genesis.json",
        ]);
        assert_eq!(args.log_level, Some(LogLevel::Warn));
        assert_eq!(args.log_format, Some(LogFormat::Json));

        let Commands::Inspect(cmd) = &args.command;
        assert_eq!(cmd.genesis, Path::new("genesis.json"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::parse_from([
            "test",
            "inspect",
            "--genesis",
            "genesis.json",
            "--log-level",
            "trace",
        ]);
        assert_eq!(args.log_level, Some(LogLevel::Trace));
        assert_eq!(args.log_format, None);
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["test", "inspect", "--genesis", "genesis.json"]);
        assert_eq!(args.get_log_level_or_default(), LogLevel::Info);
        assert_eq!(args.get_log_format_or_default(), LogFormat::Plaintext);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let result = Args::try_parse_from([
            "test",
            "--log-level",
            "verbose",
            "inspect",
            "--genesis",
            "genesis.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn genesis_is_required() {
        assert!(Args::try_parse_from(["test", "inspect"]).is_err());
    }
}
