//! # qms CLI entry point
//!
//! Parses command-line arguments, loads configuration from the
//! environment, installs logging, and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use qms_cli::autosave::{run_autosave, AutosaveArgs};
use qms_cli::config::{CliConfig, LogFormat};
use qms_cli::documents::{run_documents, DocumentsArgs};
use qms_cli::filters::{run_filters, FiltersArgs};
use qms_cli::funnel::{run_funnel, FunnelArgs};
use qms_cli::prefs::{run_prefs, PrefsArgs};

/// QMS audit workbench toolkit.
///
/// Shareable filter URLs, drill-down funnels, mandatory document lookup,
/// draft autosave and user preferences for the audit dashboards.
#[derive(Parser, Debug)]
#[command(name = "qms", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read or rewrite dashboard filter URLs.
    Filters(FiltersArgs),

    /// Build a drill-down path and show its stage and scope.
    Funnel(FunnelArgs),

    /// List the mandatory documents for a process and referential.
    Documents(DocumentsArgs),

    /// Debounce-save a draft read from stdin.
    Autosave(AutosaveArgs),

    /// Show or update user preferences.
    Prefs(PrefsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = CliConfig::from_env();

    let json = cli.log_json
        || config
            .as_ref()
            .is_ok_and(|c| c.log_format == LogFormat::Json);
    init_tracing(cli.verbose, json);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };
    tracing::debug!(?config, "qms CLI starting");

    let result = match &cli.command {
        Commands::Filters(args) => run_filters(args, &config),
        Commands::Funnel(args) => run_funnel(args),
        Commands::Documents(args) => run_documents(args),
        Commands::Autosave(args) => run_autosave(args, &config),
        Commands::Prefs(args) => run_prefs(args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Verbosity flags win over `RUST_LOG`; without them `RUST_LOG` applies,
/// falling back to `warn`.
fn init_tracing(verbose: u8, json: bool) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_filters_show() {
        let cli = Cli::try_parse_from(["qms", "filters", "show", "?status=open"]).unwrap();
        assert!(matches!(cli.command, Commands::Filters(_)));
    }

    #[test]
    fn cli_parse_filters_set_lists_and_clear() {
        let cli = Cli::try_parse_from([
            "qms",
            "filters",
            "set",
            "https://qms.example/dashboard",
            "--site",
            "lyon,paris",
            "--status",
            "",
            "--clear",
        ])
        .unwrap();
        let Commands::Filters(args) = cli.command else {
            panic!("expected filters");
        };
        let qms_cli::filters::FiltersCommand::Set { changes, clear, .. } = args.command else {
            panic!("expected set");
        };
        assert!(clear);
        assert_eq!(changes.sites, Some(vec!["lyon".to_string(), "paris".to_string()]));
        assert_eq!(changes.status.as_deref(), Some(""));
        assert_eq!(changes.search, None);
    }

    #[test]
    fn cli_parse_funnel_levels() {
        let cli = Cli::try_parse_from([
            "qms",
            "funnel",
            "--level",
            "site:lyon:LYO:Lyon",
            "--level",
            "process:risk",
            "--jump-stage",
            "site",
        ])
        .unwrap();
        let Commands::Funnel(args) = cli.command else {
            panic!("expected funnel");
        };
        assert_eq!(args.levels.len(), 2);
        assert_eq!(args.levels[0].display_value, "Lyon");
        assert_eq!(args.jump_stage, Some(qms_state::FunnelStage::Site));
    }

    #[test]
    fn cli_parse_rejects_bad_level() {
        assert!(Cli::try_parse_from(["qms", "funnel", "--level", "galaxy:m31"]).is_err());
    }

    #[test]
    fn cli_parse_documents() {
        let cli = Cli::try_parse_from([
            "qms",
            "documents",
            "--process",
            "Gestion des risques",
            "--referential",
            "ISO 13485",
            "--detailed",
        ])
        .unwrap();
        let Commands::Documents(args) = cli.command else {
            panic!("expected documents");
        };
        assert!(args.detailed);
        assert_eq!(args.referential.as_deref(), Some("ISO 13485"));
        assert!(args.table.is_none());
    }

    #[test]
    fn cli_parse_prefs_set_locale() {
        let cli = Cli::try_parse_from(["qms", "-v", "prefs", "set", "--locale", "en"]).unwrap();
        assert_eq!(cli.verbose, 1);
        let Commands::Prefs(args) = cli.command else {
            panic!("expected prefs");
        };
        assert!(matches!(
            args.command,
            qms_cli::prefs::PrefsCommand::Set {
                locale: Some(qms_cli::prefs::Locale::En),
                ..
            }
        ));
    }

    #[test]
    fn cli_parse_autosave_requires_output() {
        assert!(Cli::try_parse_from(["qms", "autosave"]).is_err());
        let cli =
            Cli::try_parse_from(["qms", "autosave", "--output", "d.json", "--delay-ms", "250"]).unwrap();
        let Commands::Autosave(args) = cli.command else {
            panic!("expected autosave");
        };
        assert_eq!(args.delay_ms, Some(250));
    }
}
