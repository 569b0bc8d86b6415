//! CLI argument structures
//!
//! This module defines the command-line interface of `proposal-recap`: the
//! top-level structure and one subcommand per report.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Summarize academic proposal payloads per department
#[derive(Parser, Debug)]
#[command(name = "proposal-recap")]
#[command(about = "proposal-recap - Per-department funding, activity and indicator summaries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv and above for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (TOML or YAML) layered over the global and project files
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the summaries of one workflow stage
    #[command(name = "summarize")]
    Summarize {
        /// Proposal document (JSON), or `-` for stdin
        input: PathBuf,

        /// Stage to summarize (activity-planning, fund-disbursement, fund-usage-report, indicator-report)
        #[arg(short, long)]
        stage: String,

        /// Evaluation instant for activity states (defaults to now)
        #[arg(long, value_name = "TIMESTAMP")]
        now: Option<String>,

        /// Output format (overrides configuration)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List every activity of the planning proposals
    #[command(name = "activities")]
    Activities {
        /// Proposal document (JSON), or `-` for stdin
        input: PathBuf,

        /// Only this department (id, or name when the department has no id)
        #[arg(short, long)]
        department: Option<String>,

        /// Evaluation instant for activity states (defaults to now)
        #[arg(long, value_name = "TIMESTAMP")]
        now: Option<String>,

        /// Output format (overrides configuration)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show a department's tables as decoded lines (JSON)
    #[command(name = "inspect")]
    Inspect {
        /// Proposal document (JSON), or `-` for stdin
        input: PathBuf,

        /// Department id, or name when the department has no id
        #[arg(short, long)]
        department: String,
    },

    /// Format an amount in Rupiah
    #[command(name = "rupiah")]
    Rupiah {
        /// Amount, digits with optional separators
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_lists_commands() {
        let help = Cli::command().render_help().to_string();
        for command in ["summarize", "activities", "inspect", "rupiah"] {
            assert!(help.contains(command), "missing {command}");
        }
        assert!(help.contains("-vv and above for trace"));
    }

    #[test]
    fn test_parse_summarize() {
        let cli = Cli::try_parse_from([
            "proposal-recap",
            "-vv",
            "summarize",
            "data.json",
            "--stage",
            "iku",
            "--format",
            "csv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Summarize { input, stage, now, format } => {
                assert_eq!(input, PathBuf::from("data.json"));
                assert_eq!(stage, "iku");
                assert!(now.is_none());
                assert_eq!(format, Some(OutputFormat::Csv));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rupiah_accepts_negative_amounts() {
        let cli = Cli::try_parse_from(["proposal-recap", "rupiah", "-1500"]).unwrap();
        assert!(matches!(cli.command, Commands::Rupiah { amount } if amount == "-1500"));
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from([
            "proposal-recap",
            "inspect",
            "-",
            "--department",
            "ti",
            "--config",
            "ci.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
    }
}
