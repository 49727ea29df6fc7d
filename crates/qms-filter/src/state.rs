//! The dashboard filter record.

use serde::{Deserialize, Serialize};

use qms_core::FilterDate;

/// Every filter a dashboard can carry. No field is required; an absent
/// field (or an empty list) means "unfiltered" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Named reporting period (e.g. `30d`, `ytd`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<FilterDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<FilterDate>,
    /// Written comma-joined, so an id containing `,` reads back as several
    /// ids. The same holds for `process_ids` and `referential_ids`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub site_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub process_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub referential_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Free-text search box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl FilterState {
    /// Number of dimensions that actually filter something.
    ///
    /// Feeds the "N filters" badge next to the filter bar. Empty strings
    /// count as unfiltered, matching what gets written to the URL.
    pub fn active_filter_count(&self) -> usize {
        let texts = [&self.period, &self.audit_type, &self.status, &self.search];
        let lists = [&self.site_ids, &self.process_ids, &self.referential_ids];
        texts.iter().filter(|t| non_empty(t).is_some()).count()
            + [&self.start_date, &self.end_date]
                .iter()
                .filter(|d| d.as_ref().is_some_and(|d| !d.to_query_value().is_empty()))
                .count()
            + lists
                .iter()
                .filter(|l| l.iter().any(|id| !id.is_empty()))
                .count()
    }

    /// Whether no dimension is filtered.
    pub fn is_empty(&self) -> bool {
        self.active_filter_count() == 0
    }
}

/// `Some(s)` only for a present, non-empty string.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
