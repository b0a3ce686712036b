use crate::domain::entities::Sink;
use crate::domain::errors::{HurlError, Result};
use colored::Colorize;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tracing::debug;

const STDOUT_LABEL: &str = "Response data:";

/// How a body printed to stdout is rendered. File output is always raw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    #[default]
    Raw,
    /// Pretty-print and colour bodies that parse as JSON.
    Pretty,
}

/// Routes the response body to `output_path` when given, otherwise to `out`.
pub fn deliver<W: Write + ?Sized>(
    body: &[u8],
    output_path: Option<&Path>,
    style: OutputStyle,
    out: &mut W,
) -> Result<Sink> {
    match output_path {
        Some(path) => {
            save_response_body(path, body)?;
            writeln!(out, "Response data saved to {}", path.display())?;
            Ok(Sink::File(path.to_path_buf()))
        }
        None => {
            print_response_body(body, style, out)?;
            Ok(Sink::Stdout)
        }
    }
}

fn save_response_body(path: &Path, body: &[u8]) -> Result<()> {
    debug!(path = %path.display(), bytes = body.len(), "writing response body");
    std::fs::write(path, body).map_err(|source| HurlError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn print_response_body<W: Write + ?Sized>(body: &[u8], style: OutputStyle, out: &mut W) -> Result<()> {
    if style == OutputStyle::Pretty {
        if let Ok(json) = serde_json::from_slice::<Value>(body) {
            // Serializing a freshly parsed Value cannot fail.
            let pretty = serde_json::to_string_pretty(&json).unwrap_or_default();
            writeln!(out, "{STDOUT_LABEL} {}", pretty.green())?;
            return Ok(());
        }
    }
    write!(out, "{STDOUT_LABEL} ")?;
    out.write_all(body)?;
    out.write_all(b"\n")?;
    Ok(())
}
