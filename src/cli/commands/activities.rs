use super::{evaluation_instant, load_proposals};
use crate::aggregate::all_activity_summaries;
use crate::config::{OutputFormat, RecapConfig};
use crate::report::render;
use crate::summary::StageSummary;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Execute `proposal-recap activities`
pub fn run_activities_command(
    input: &Path,
    department: Option<&str>,
    now: Option<&str>,
    format: Option<OutputFormat>,
    config: &RecapConfig,
    out: &mut impl Write,
) -> Result<()> {
    let now = evaluation_instant(now, config)?;
    let mut proposals = load_proposals(input, config)?;

    if let Some(department) = department {
        proposals.retain(|p| {
            p.department.id == department
                || (p.department.id.is_empty() && p.department.name == department)
        });
    }

    let summaries: Vec<StageSummary> = all_activity_summaries(&proposals, now)
        .into_iter()
        .map(StageSummary::Activity)
        .collect();
    info!(activities = summaries.len(), %now, "Listed activities");
    render(
        &summaries,
        format.unwrap_or(config.output),
        config.pretty,
        out,
    )
    .context("Failed to render activities")
}
