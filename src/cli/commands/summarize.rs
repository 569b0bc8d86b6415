use super::{evaluation_instant, load_proposals};
use crate::config::{OutputFormat, RecapConfig};
use crate::error::{ErrorCode, RecapError};
use crate::proposal::Stage;
use crate::report::render;
use crate::summary::summarize;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Execute `proposal-recap summarize`
pub fn run_summarize_command(
    input: &Path,
    stage: &str,
    now: Option<&str>,
    format: Option<OutputFormat>,
    config: &RecapConfig,
    out: &mut impl Write,
) -> Result<()> {
    let stage = Stage::parse(stage);
    if !stage.is_known() {
        let known = Stage::KNOWN
            .iter()
            .map(Stage::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(RecapError::input_with_code(
            ErrorCode::INPUT_UNKNOWN_STAGE,
            format!("Unknown stage '{stage}', expected one of {known}"),
            None,
        )
        .into());
    }

    let now = evaluation_instant(now, config)?;
    let proposals = load_proposals(input, config)?;
    let summaries = summarize(&proposals, &stage, now);

    info!(stage = %stage, summaries = summaries.len(), %now, "Summarized proposals");
    render(
        &summaries,
        format.unwrap_or(config.output),
        config.pretty,
        out,
    )
    .context("Failed to render summaries")
}
