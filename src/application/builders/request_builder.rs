use crate::domain::entities::RequestDescriptor;
use crate::domain::errors::{HurlError, Result};
use crate::domain::value_objects::{DataSource, Headers, Method};
use std::path::PathBuf;
use tracing::debug;

/// Assembles a [`RequestDescriptor`] from raw command-line strings.
///
/// The setters only record input. All checks and the `@file` read happen in
/// [`RequestBuilder::build`], where a missing URL is reported before any
/// file is touched.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: Headers,
    data: String,
    output: Option<PathBuf>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: &str) -> Self {
        self.method = Method::new(method);
        self
    }

    pub fn url(mut self, raw_url: &str) -> Self {
        self.url = raw_url.to_string();
        self
    }

    /// Each entry is a comma-separated `Key: Value` list; later keys win.
    pub fn headers<S: AsRef<str>>(mut self, raw_headers: &[S]) -> Self {
        for raw in raw_headers {
            self.headers.merge_raw(raw.as_ref());
        }
        self
    }

    pub fn data(mut self, raw_data: &str) -> Self {
        self.data = raw_data.to_string();
        self
    }

    pub fn output(mut self, raw_output: Option<&str>) -> Self {
        self.output = raw_output.filter(|p| !p.is_empty()).map(PathBuf::from);
        self
    }

    pub fn build(self) -> Result<RequestDescriptor> {
        if self.url.is_empty() {
            return Err(HurlError::MissingUrl);
        }

        let body = DataSource::parse(&self.data).resolve()?;

        debug!(
            method = %self.method,
            url = %self.url,
            headers = self.headers.len(),
            body_len = body.len(),
            "built request descriptor"
        );

        Ok(RequestDescriptor {
            method: self.method,
            url: self.url,
            body,
            headers: self.headers,
            output_path: self.output,
        })
    }
}
