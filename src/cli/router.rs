//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::cli::args::Commands;
use crate::cli::commands::*;
use crate::config::RecapConfig;
use anyhow::Result;
use std::io::Write;

/// Execute a CLI command, writing its report to `out`
pub fn execute_command(command: Commands, config: &RecapConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Summarize {
            input,
            stage,
            now,
            format,
        } => run_summarize_command(&input, &stage, now.as_deref(), format, config, out),
        Commands::Activities {
            input,
            department,
            now,
            format,
        } => run_activities_command(
            &input,
            department.as_deref(),
            now.as_deref(),
            format,
            config,
            out,
        ),
        Commands::Inspect { input, department } => {
            run_inspect_command(&input, &department, config, out)
        }
        Commands::Rupiah { amount } => run_rupiah_command(&amount, out),
    }
}
