//! The address-bar seam.
//!
//! A [`FilterSession`](crate::FilterSession) reads the query string once at
//! start-up and replaces it on every update, without navigating. Anything
//! that can do those two things (a browser location, a test double, a
//! CLI argument) implements [`AddressBar`].

use thiserror::Error;
use url::Url;

/// Errors building an address bar.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The starting URL did not parse.
    #[error("invalid URL {input:?}: {source}")]
    InvalidUrl {
        input: String,
        source: url::ParseError,
    },
}

/// Read and replace the query string of the current location.
pub trait AddressBar {
    /// The full current URL.
    fn href(&self) -> String;

    /// The current query string, without the leading `?`.
    fn query(&self) -> String;

    /// Replace the query string in place (history-replace, no navigation).
    /// An empty `query` removes the `?` entirely.
    fn replace_query(&mut self, query: &str);
}

/// An [`AddressBar`] over an owned [`Url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryAddressBar {
    url: Url,
    replacements: usize,
}

impl MemoryAddressBar {
    /// Start at `url`.
    pub fn new(url: Url) -> Self {
        Self { url, replacements: 0 }
    }

    /// Parse `input` and start there.
    pub fn parse(input: &str) -> Result<Self, FilterError> {
        let url = Url::parse(input).map_err(|source| FilterError::InvalidUrl {
            input: input.to_string(),
            source,
        })?;
        Ok(Self::new(url))
    }

    /// The current URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// How many times the query has been replaced.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl AddressBar for MemoryAddressBar {
    fn href(&self) -> String {
        self.url.as_str().to_string()
    }

    fn query(&self) -> String {
        self.url.query().unwrap_or_default().to_string()
    }

    fn replace_query(&mut self, query: &str) {
        if query.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.set_query(Some(query));
        }
        self.replacements += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_relative() {
        let err = MemoryAddressBar::parse("/dashboard?x=1").unwrap_err();
        assert!(err.to_string().contains("/dashboard"));
    }

    #[test]
    fn replace_keeps_path_and_fragment() {
        let mut bar = MemoryAddressBar::parse("https://qms.example/audits?old=1#findings").unwrap();
        bar.replace_query("status=open");
        assert_eq!(bar.href(), "https://qms.example/audits?status=open#findings");
        assert_eq!(bar.replacements(), 1);
    }

    #[test]
    fn empty_replace_drops_question_mark() {
        let mut bar = MemoryAddressBar::parse("https://qms.example/audits?status=open").unwrap();
        bar.replace_query("");
        assert_eq!(bar.href(), "https://qms.example/audits");
        assert_eq!(bar.query(), "");
    }
}
