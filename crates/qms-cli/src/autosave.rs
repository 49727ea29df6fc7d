//! # Autosave CLI: Debounced draft saving from stdin.
//!
//! Each line read from stdin is appended to the draft and restarts the
//! quiet-period timer. When stdin closes the draft is flushed with an
//! immediate save, so nothing typed is lost.
//!
//! ```bash
//! tail -f notes.txt | qms autosave --output draft.json --delay-ms 2000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use qms_autosave::{AutoSave, AutoSaveConfig, AutoSaveStatus};

use crate::config::CliConfig;
use crate::print_json;

/// Autosave subcommand arguments.
#[derive(Args, Debug)]
pub struct AutosaveArgs {
    /// File the draft is saved to (JSON).
    #[arg(long)]
    pub output: PathBuf,

    /// Quiet period before a save; defaults to QMS_AUTOSAVE_DELAY_MS.
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// The saved document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub lines: Vec<String>,
}

async fn write_draft(path: &Path, draft: &Draft) -> std::io::Result<()> {
    let bytes = serde_json::to_vec_pretty(draft)?;
    tokio::fs::write(path, bytes).await
}

/// Feed `input` line by line into a debounced saver writing to `output`,
/// then flush. Returns the final save status.
pub async fn autosave_lines<R>(input: R, output: PathBuf, delay: Duration) -> Result<AutoSaveStatus>
where
    R: AsyncBufRead + Unpin,
{
    let target = output.clone();
    let autosave = AutoSave::new(AutoSaveConfig::with_delay(delay), move |draft: Draft| {
        let target = target.clone();
        async move { write_draft(&target, &draft).await }
    })?;

    let mut draft = Draft::default();
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        draft.lines.push(line);
        autosave.observe(draft.clone());
    }

    autosave
        .save_now()
        .await
        .with_context(|| format!("failed to save draft to {}", output.display()))?;
    autosave.shutdown();
    Ok(autosave.status())
}

/// Execute the autosave subcommand.
pub fn run_autosave(args: &AutosaveArgs, config: &CliConfig) -> Result<u8> {
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or(config.autosave_delay);
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let status = runtime.block_on(autosave_lines(
        tokio::io::BufReader::new(tokio::io::stdin()),
        args.output.clone(),
        delay,
    ))?;
    print_json(&status)?;
    Ok(0)
}
