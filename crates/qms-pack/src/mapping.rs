//! # Question → Document Mappings
//!
//! A [`QuestionDocumentMapping`] names the documents an auditee must
//! produce for a process under a referential. Any of the three keys may be
//! absent; an absent key matches every query.
//!
//! The built-in table is assembled from one submodule per referential and
//! built once per process. Deployments with their own document
//! requirements load a replacement table from YAML:
//!
//! ```yaml
//! mappings:
//!   - processName: Gestion des risques
//!     referentialName: ISO 13485
//!     articleReference: "7.1"
//!     requiredDocuments:
//!       - Plan de Gestion des Risques
//! ```

use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{PackError, PackResult};

mod cross;
mod iso13485;
mod iso9001;
mod mdr;

/// One row of the document table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDocumentMapping {
    /// Carried for provenance; lookups never filter on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referential_name: Option<String>,
    /// Clause or article of the referential, e.g. "7.1" or "Art. 61".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_reference: Option<String>,
    pub required_documents: Vec<String>,
}

impl QuestionDocumentMapping {
    fn entry(
        process: Option<&str>,
        referential: Option<&str>,
        article: Option<&str>,
        documents: &[&str],
    ) -> Self {
        Self {
            question_id: None,
            process_name: process.map(str::to_string),
            referential_name: referential.map(str::to_string),
            article_reference: article.map(str::to_string),
            required_documents: documents.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn with_question(mut self, question_id: &str) -> Self {
        self.question_id = Some(question_id.to_string());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MappingFile {
    Wrapped { mappings: Vec<QuestionDocumentMapping> },
    Bare(Vec<QuestionDocumentMapping>),
}

/// An ordered document table. Order is significant: resolved documents
/// come out in table order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MappingTable {
    entries: Vec<QuestionDocumentMapping>,
}

static BUILTIN: OnceLock<MappingTable> = OnceLock::new();

impl MappingTable {
    /// Build a table from entries, in order.
    pub fn new(entries: Vec<QuestionDocumentMapping>) -> Self {
        Self { entries }
    }

    /// The built-in ISO 9001 / ISO 13485 / MDR table (French labels).
    pub fn builtin() -> &'static MappingTable {
        BUILTIN.get_or_init(|| {
            let mut entries = iso9001::mappings();
            entries.extend(iso13485::mappings());
            entries.extend(mdr::mappings());
            entries.extend(cross::mappings());
            tracing::debug!(entries = entries.len(), "built-in document table loaded");
            MappingTable { entries }
        })
    }

    /// Parse a table from YAML text: either a bare list of mappings or a
    /// document with a top-level `mappings` list.
    pub fn from_yaml_str(content: &str) -> PackResult<Self> {
        let file: MappingFile = serde_yaml::from_str(content)?;
        Self::validated(file)
    }

    /// Load a table from a YAML file.
    pub fn from_yaml_file(path: &Path) -> PackResult<Self> {
        if !path.exists() {
            return Err(PackError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let file: MappingFile =
            serde_yaml::from_str(&content).map_err(|source| PackError::YamlParse {
                path: path.to_path_buf(),
                source,
            })?;
        let table = Self::validated(file)?;
        tracing::info!(path = %path.display(), entries = table.len(), "document table loaded");
        Ok(table)
    }

    fn validated(file: MappingFile) -> PackResult<Self> {
        let entries = match file {
            MappingFile::Wrapped { mappings } => mappings,
            MappingFile::Bare(mappings) => mappings,
        };
        for (index, entry) in entries.iter().enumerate() {
            if entry.required_documents.is_empty() {
                return Err(PackError::Validation(format!(
                    "mapping {index} lists no required documents"
                )));
            }
            if entry.required_documents.iter().any(|d| d.trim().is_empty()) {
                return Err(PackError::Validation(format!(
                    "mapping {index} has a blank document name"
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[QuestionDocumentMapping] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct referential names, in table order.
    pub fn referentials(&self) -> Vec<&str> {
        distinct(self.entries.iter().filter_map(|e| e.referential_name.as_deref()))
    }

    /// Distinct process names, in table order.
    pub fn processes(&self) -> Vec<&str> {
        distinct(self.entries.iter().filter_map(|e| e.process_name.as_deref()))
    }
}

fn distinct<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for name in names {
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}
