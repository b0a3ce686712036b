use crate::domain::entities::{Delivery, RequestDescriptor, Response};
use crate::domain::errors::Result;
use crate::infrastructure::output::{self, OutputStyle};
use async_trait::async_trait;
use std::io::Write;
use tracing::info;

/// Trait for HTTP clients to enable mocking and dependency inversion
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Builds, submits and fully drains one request.
    async fn send(&self, descriptor: &RequestDescriptor) -> Result<Response>;
}

/// Runs a built descriptor through the injected client and delivers the
/// response body to its sink.
pub struct HttpRequestService {
    http_client: Box<dyn HttpClient>,
}

impl HttpRequestService {
    pub fn new(http_client: Box<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Sends the request without touching any sink.
    pub async fn send_request(&self, descriptor: &RequestDescriptor) -> Result<Response> {
        self.http_client.send(descriptor).await
    }

    /// Sends the request, then writes the body to the output file or to `out`.
    ///
    /// The status code is reported back but never treated as a failure.
    pub async fn execute<W: Write + ?Sized>(
        &self,
        descriptor: RequestDescriptor,
        style: OutputStyle,
        out: &mut W,
    ) -> Result<Delivery> {
        let response = self.send_request(&descriptor).await?;
        info!(status = %response.status, bytes = response.body.len(), "response received");

        let sink = output::deliver(&response.body, descriptor.output_path.as_deref(), style, out)?;

        Ok(Delivery {
            status: response.status,
            sink,
            bytes: response.body.len(),
        })
    }
}
