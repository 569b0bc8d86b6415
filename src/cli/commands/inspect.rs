use super::load_proposals;
use crate::config::RecapConfig;
use crate::report::{inspect_department, render_json};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Execute `proposal-recap inspect`
pub fn run_inspect_command(
    input: &Path,
    department: &str,
    config: &RecapConfig,
    out: &mut impl Write,
) -> Result<()> {
    let proposals = load_proposals(input, config)?;
    let inspected = inspect_department(&proposals, department);

    if inspected.is_empty() {
        warn!(department, "No proposals for department");
    }
    info!(department, proposals = inspected.len(), "Inspected department");

    render_json(&inspected, config.pretty, out).context("Failed to render inspection")
}
