//! Navigation targets: a path plus its query string.
//!
//! URL format: `/path/to/page?key=value&other=1` (the `#fragment` is dropped).

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped in query keys and values.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Characters escaped in path params when building URLs.
pub(crate) const PATH_ENCODE_SET: &AsciiSet = &QUERY_ENCODE_SET.remove(b'@').remove(b':');

/// Decode a percent-encoded URL component, replacing invalid UTF-8.
pub(crate) fn decode(component: &str) -> String {
    percent_decode_str(component).decode_utf8_lossy().into_owned()
}

// ============================================================================
// Query
// ============================================================================

/// Ordered, multi-valued query string.
///
/// Keys may repeat (`?tag=a&tag=b`); [`Query::get`] returns the first value,
/// [`Query::get_all`] every value in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string, with or without the leading `?`.
    ///
    /// `+` decodes to a space; a key without `=` gets an empty value.
    pub fn parse(raw: &str) -> Self {
        let pairs = raw
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (
                    decode(&key.replace('+', " ")),
                    decode(&value.replace('+', " ")),
                )
            })
            .collect();
        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in order of appearance.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Append a key/value pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                utf8_percent_encode(key, QUERY_ENCODE_SET),
                utf8_percent_encode(value, QUERY_ENCODE_SET)
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Location
// ============================================================================

/// A navigation target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// Absolute, still percent-encoded path.
    pub path: String,
    /// Decoded query parameters.
    pub query: Query,
}

impl Location {
    /// Parse `path?query#hash` into a location.
    ///
    /// Never fails: an empty path becomes `/` and a relative path is
    /// treated as rooted.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.split('#').next().unwrap_or_default();
        let (path, query) = raw.split_once('?').unwrap_or((raw, ""));

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self {
            path,
            query: Query::parse(query),
        }
    }

    /// Copy of this location with a different query.
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        Ok(())
    }
}
