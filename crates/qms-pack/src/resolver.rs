//! # Mandatory Document Resolver
//!
//! ```text
//! resolve(question?, process?, referential?)
//!   for entry in table (in order):
//!     process matches?      absent on either side, or substring either way
//!     referential matches?  same rule
//!     ──▶ append entry.required_documents
//!   drop repeats, keep first occurrence
//! ```
//!
//! The question identifier is accepted for call-site symmetry with the
//! questionnaire but never narrows the result.

use std::collections::HashSet;

use serde::Serialize;

use crate::mapping::{MappingTable, QuestionDocumentMapping};

/// One matched table row, for callers that show where a document
/// requirement comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSource<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referential_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_reference: Option<&'a str>,
    pub documents: &'a [String],
}

/// Looks up required documents in a [`MappingTable`].
#[derive(Debug, Clone, Copy)]
pub struct DocumentResolver<'a> {
    table: &'a MappingTable,
}

impl DocumentResolver<'static> {
    /// A resolver over the built-in table.
    pub fn builtin() -> Self {
        Self::new(MappingTable::builtin())
    }
}

impl<'a> DocumentResolver<'a> {
    pub fn new(table: &'a MappingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a MappingTable {
        self.table
    }

    /// Documents required for the process/referential pair, deduplicated
    /// in table order. Absent or empty arguments match everything.
    pub fn resolve(
        &self,
        question_id: Option<&str>,
        process_name: Option<&str>,
        referential_name: Option<&str>,
    ) -> Vec<String> {
        let mut seen = HashSet::new();
        let documents: Vec<String> = self
            .matching(process_name, referential_name)
            .flat_map(|entry| entry.required_documents.iter())
            .filter(|doc| seen.insert(doc.as_str()))
            .cloned()
            .collect();
        tracing::debug!(
            question_id,
            process_name,
            referential_name,
            documents = documents.len(),
            "resolved required documents"
        );
        documents
    }

    /// The matching rows themselves, in table order, without deduplication.
    pub fn resolve_detailed(
        &self,
        process_name: Option<&str>,
        referential_name: Option<&str>,
    ) -> Vec<DocumentSource<'a>> {
        self.matching(process_name, referential_name)
            .map(|entry| DocumentSource {
                process_name: entry.process_name.as_deref(),
                referential_name: entry.referential_name.as_deref(),
                article_reference: entry.article_reference.as_deref(),
                documents: &entry.required_documents,
            })
            .collect()
    }

    fn matching(
        &self,
        process_name: Option<&str>,
        referential_name: Option<&str>,
    ) -> impl Iterator<Item = &'a QuestionDocumentMapping> {
        let process = normalized(process_name);
        let referential = normalized(referential_name);
        let table = self.table;
        table.entries().iter().filter(move |entry| {
            loosely_matches(entry.process_name.as_deref(), process.as_deref())
                && loosely_matches(entry.referential_name.as_deref(), referential.as_deref())
        })
    }
}

fn normalized(name: Option<&str>) -> Option<String> {
    name.filter(|n| !n.is_empty()).map(str::to_lowercase)
}

/// `query` is already lowercased.
fn loosely_matches(entry: Option<&str>, query: Option<&str>) -> bool {
    match (entry.filter(|e| !e.is_empty()), query) {
        (Some(entry), Some(query)) => {
            let entry = entry.to_lowercase();
            entry.contains(query) || query.contains(entry.as_str())
        }
        _ => true,
    }
}
