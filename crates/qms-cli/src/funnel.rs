//! # Funnel CLI: Build a drill-down path and inspect it.
//!
//! ```bash
//! qms funnel --level site:lyon:LYO:Lyon --level process:risk:PR-07:'Gestion des risques'
//! qms funnel --level site:lyon --level process:risk --back
//! qms funnel --level site:lyon --level process:risk --jump-stage site
//! ```
//!
//! Levels are pushed in the order given, so the usual narrowing rules
//! apply: each level must be narrower than the previous one.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use qms_core::DrillLevelKind;
use qms_state::{DrillLevel, DrillPath, DrillScope, FunnelStage};

use crate::print_json;

/// Funnel subcommand arguments.
#[derive(Args, Debug)]
pub struct FunnelArgs {
    /// A level as `kind:id[:value[:display]]`. Repeatable, widest first.
    #[arg(long = "level", value_parser = parse_level)]
    pub levels: Vec<DrillLevel>,

    /// Go back one level after building the path.
    #[arg(long)]
    pub back: bool,

    /// Jump to a funnel stage (name or index) after building the path.
    #[arg(long)]
    pub jump_stage: Option<FunnelStage>,
}

/// Parse `kind:id[:value[:display]]`. `value` defaults to the id and
/// `display` to the value; the display part may itself contain colons.
pub fn parse_level(raw: &str) -> Result<DrillLevel, String> {
    let mut parts = raw.splitn(4, ':');
    let kind: DrillLevelKind = parts
        .next()
        .unwrap_or_default()
        .parse()
        .map_err(|e| format!("{e}"))?;
    let id = parts
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| format!("level {raw:?} has no id (expected kind:id[:value[:display]])"))?;
    let value = parts.next().filter(|v| !v.is_empty()).unwrap_or(id);
    let display = parts.next().filter(|d| !d.is_empty()).unwrap_or(value);
    Ok(DrillLevel::new(kind, id, value, display))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FunnelReport<'a> {
    breadcrumb: Vec<&'a str>,
    stage: FunnelStage,
    scope: DrillScope,
    levels: &'a DrillPath,
}

/// Apply the arguments to an empty path.
pub fn build_path(args: &FunnelArgs) -> Result<DrillPath> {
    let mut path = DrillPath::new();
    for level in &args.levels {
        path.push(level.clone())
            .with_context(|| format!("cannot drill into {} {:?}", level.kind, level.id))?;
    }
    if args.back {
        path.pop().context("cannot go back from the root view")?;
    }
    if let Some(stage) = args.jump_stage {
        path.jump_to_stage(stage)
            .with_context(|| format!("cannot jump to stage {stage}"))?;
    }
    Ok(path)
}

/// Execute the funnel subcommand.
pub fn run_funnel(args: &FunnelArgs) -> Result<u8> {
    let path = build_path(args)?;
    tracing::debug!(%path, "funnel path built");
    print_json(&FunnelReport {
        breadcrumb: path.breadcrumb(),
        stage: path.current_stage(),
        scope: path.scope(),
        levels: &path,
    })?;
    Ok(0)
}
