use crate::domain::value_objects::{Headers, Method};
use hyper::StatusCode;
use hyper::body::Bytes;
use std::fmt;
use std::path::PathBuf;

/// A fully resolved outbound request, built once per run and consumed once.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    /// Raw bytes to send; empty means no body.
    pub body: Bytes,
    pub headers: Headers,
    /// Absent means the response goes to stdout.
    pub output_path: Option<PathBuf>,
}

/// Represents an HTTP response
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Where the response body ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    File(PathBuf),
    Stdout,
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::File(path) => write!(f, "{}", path.display()),
            Sink::Stdout => f.write_str("stdout"),
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub status: StatusCode,
    pub sink: Sink,
    pub bytes: usize,
}
