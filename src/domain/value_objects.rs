use crate::domain::errors::{HurlError, Result};
use hyper::body::Bytes;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

const DEFAULT_METHOD: &str = "GET";

/// HTTP method exactly as the user typed it.
///
/// Nothing is validated here: an arbitrary token like `PURGE` is kept as is,
/// and a malformed one is only rejected when the request is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method(String);

impl Method {
    /// Creates a method, falling back to `GET` when `raw` is empty.
    pub fn new(raw: &str) -> Self {
        if raw.is_empty() {
            Self::default()
        } else {
            Method(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Method {
    fn default() -> Self {
        Method(DEFAULT_METHOD.to_string())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request headers keyed by name. Names are case-insensitive, so inserting
/// `accept` after `Accept` replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(HashMap<String, String>);

impl Headers {
    /// Merges a comma-separated list of `Key: Value` pairs.
    ///
    /// Each pair is split at its first colon only, so values may contain
    /// colons themselves. Pairs without any colon are dropped.
    pub fn merge_raw(&mut self, raw: &str) {
        for pair in raw.split(',') {
            match pair.split_once(':') {
                Some((key, value)) => self.insert(key.trim(), value.trim()),
                None => debug!(pair, "dropping header pair without a colon"),
            }
        }
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_ascii_lowercase(), value.to_string());
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Where the request body comes from: `@path` names a file, anything else
/// is the body itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource<'a> {
    Inline(&'a str),
    File(&'a Path),
}

impl<'a> DataSource<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.strip_prefix('@') {
            Some(path) => DataSource::File(Path::new(path)),
            None => DataSource::Inline(raw),
        }
    }

    /// Produces the final body bytes, reading the file for `@path` sources.
    /// File contents are taken verbatim, whatever their encoding.
    pub fn resolve(self) -> Result<Bytes> {
        match self {
            DataSource::Inline(data) => Ok(Bytes::copy_from_slice(data.as_bytes())),
            DataSource::File(path) => {
                debug!(path = %path.display(), "reading request body from file");
                fs::read(path)
                    .map(Bytes::from)
                    .map_err(|source| HurlError::FileRead {
                        path: path.to_path_buf(),
                        source,
                    })
            }
        }
    }
}
