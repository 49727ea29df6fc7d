//! # Documents CLI: Mandatory documents for an audit question.
//!
//! ```bash
//! qms documents --process 'Gestion des risques' --referential 'ISO 13485'
//! qms documents --referential 'ISO 9001' --detailed
//! qms documents --process Achats --table ./site-documents.yaml
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use qms_pack::{DocumentResolver, DocumentSource, MappingTable};

use crate::print_json;

/// Documents subcommand arguments.
#[derive(Args, Debug, Default)]
pub struct DocumentsArgs {
    /// Process name; omitted matches every process.
    #[arg(long)]
    pub process: Option<String>,

    /// Referential name; omitted matches every referential.
    #[arg(long)]
    pub referential: Option<String>,

    /// Question id, recorded in logs only.
    #[arg(long)]
    pub question: Option<String>,

    /// YAML document table to use instead of the built-in one.
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// List the matching table rows with their article references.
    #[arg(long)]
    pub detailed: bool,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DocumentsReport<'a> {
    Documents { documents: Vec<String> },
    Detailed { sources: Vec<DocumentSource<'a>> },
}

/// Resolve against `table`.
pub fn resolve<'a>(args: &DocumentsArgs, table: &'a MappingTable) -> DocumentsReport<'a> {
    let resolver = DocumentResolver::new(table);
    let process = args.process.as_deref();
    let referential = args.referential.as_deref();
    if args.detailed {
        DocumentsReport::Detailed {
            sources: resolver.resolve_detailed(process, referential),
        }
    } else {
        DocumentsReport::Documents {
            documents: resolver.resolve(args.question.as_deref(), process, referential),
        }
    }
}

/// Execute the documents subcommand.
pub fn run_documents(args: &DocumentsArgs) -> Result<u8> {
    let loaded;
    let table = match &args.table {
        Some(path) => {
            loaded = MappingTable::from_yaml_file(path)
                .with_context(|| format!("failed to load document table {}", path.display()))?;
            &loaded
        }
        None => MappingTable::builtin(),
    };
    print_json(&resolve(args, table))?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_report_lists_documents() {
        let args = DocumentsArgs {
            process: Some("Gestion des risques".to_string()),
            referential: Some("ISO 13485".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(resolve(&args, MappingTable::builtin())).unwrap();
        assert_eq!(json["documents"][0], "Plan de Gestion des Risques");
        assert_eq!(json["documents"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn detailed_report_carries_articles() {
        let args = DocumentsArgs {
            process: Some("Vigilance".to_string()),
            referential: Some("MDR".to_string()),
            detailed: true,
            ..Default::default()
        };
        let json = serde_json::to_value(resolve(&args, MappingTable::builtin())).unwrap();
        let sources = json["sources"].as_array().unwrap();
        assert_eq!(sources.len(), 2);
        // The referential-wide row applies to every process.
        assert!(sources[0].get("processName").is_none());
        assert_eq!(
            sources[1],
            serde_json::json!({
                "processName": "Vigilance",
                "referentialName": "MDR (UE) 2017/745",
                "articleReference": "Art. 87",
                "documents": ["Procédure de Vigilance", "Registre des Incidents"]
            })
        );
    }
}
