//! Query-string codec for [`FilterState`].

use std::collections::HashSet;

use url::form_urlencoded;

use qms_core::FilterDate;

use crate::state::{non_empty, FilterState};

pub const PERIOD: &str = "period";
pub const START_DATE: &str = "startDate";
pub const END_DATE: &str = "endDate";
pub const SITE_IDS: &str = "siteIds";
pub const PROCESS_IDS: &str = "processIds";
pub const REFERENTIAL_IDS: &str = "referentialIds";
pub const AUDIT_TYPE: &str = "auditType";
pub const STATUS: &str = "status";
pub const SEARCH: &str = "search";

/// Reserved keys, in the order they are written.
pub const RESERVED_KEYS: [&str; 9] = [
    PERIOD,
    START_DATE,
    END_DATE,
    SITE_IDS,
    PROCESS_IDS,
    REFERENTIAL_IDS,
    AUDIT_TYPE,
    STATUS,
    SEARCH,
];

const LIST_SEPARATOR: char = ',';

/// Overlay the recognized keys of `query` onto `defaults`.
///
/// A leading `?` is tolerated. Keys with an empty value are treated as
/// absent; when a key repeats, the first occurrence wins. Never fails.
pub fn parse_query(query: &str, defaults: &FilterState) -> FilterState {
    let mut state = defaults.clone();
    let mut seen = HashSet::new();
    let raw = query.strip_prefix('?').unwrap_or(query);

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        if value.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        match &*key {
            PERIOD => state.period = Some(value.into_owned()),
            START_DATE => state.start_date = Some(FilterDate::parse(&value)),
            END_DATE => state.end_date = Some(FilterDate::parse(&value)),
            SITE_IDS => state.site_ids = split_list(&value),
            PROCESS_IDS => state.process_ids = split_list(&value),
            REFERENTIAL_IDS => state.referential_ids = split_list(&value),
            AUDIT_TYPE => state.audit_type = Some(value.into_owned()),
            STATUS => state.status = Some(value.into_owned()),
            SEARCH => state.search = Some(value.into_owned()),
            other => tracing::trace!(key = other, "ignoring unrecognized query key"),
        }
    }
    state
}

/// Serialize every non-empty field of `state` into a fresh query string
/// (no leading `?`). Returns an empty string for an unfiltered state.
pub fn to_query(state: &FilterState) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());

    if let Some(period) = non_empty(&state.period) {
        out.append_pair(PERIOD, period);
    }
    for (key, date) in [(START_DATE, &state.start_date), (END_DATE, &state.end_date)] {
        let value = date.as_ref().map(FilterDate::to_query_value).unwrap_or_default();
        if !value.is_empty() {
            out.append_pair(key, &value);
        }
    }
    for (key, ids) in [
        (SITE_IDS, &state.site_ids),
        (PROCESS_IDS, &state.process_ids),
        (REFERENTIAL_IDS, &state.referential_ids),
    ] {
        let joined = join_list(ids);
        if !joined.is_empty() {
            out.append_pair(key, &joined);
        }
    }
    for (key, value) in [
        (AUDIT_TYPE, &state.audit_type),
        (STATUS, &state.status),
        (SEARCH, &state.search),
    ] {
        if let Some(v) = non_empty(value) {
            out.append_pair(key, v);
        }
    }

    out.finish()
}

/// Empty ids are dropped on both sides, so `a,,b` reads as two ids.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(LIST_SEPARATOR)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_list(ids: &[String]) -> String {
    ids.iter()
        .filter(|id| !id.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
