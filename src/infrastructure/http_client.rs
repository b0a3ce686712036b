use crate::application::services::{HttpClient, HttpRequestService};
use crate::domain::entities::{RequestDescriptor, Response};
use crate::domain::errors::{HurlError, Result};
use crate::domain::value_objects::{Headers, Method as DomainMethod};

use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::header::{HeaderMap, HeaderName, HeaderValue};
use hyper::{Method, Request as HyperRequest, Uri};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use tracing::debug;

/// Infrastructure implementation of HttpClient using Hyper
/// This is a low-level HTTP transport that the application service uses
pub struct HyperHttpClient {
    client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl HyperHttpClient {
    /// Default-configured client: no timeout and no retry. The legacy client
    /// does not follow redirects, so a 3xx is returned as the response.
    pub fn new() -> Self {
        let connector = HttpsConnector::new();
        let client = Client::builder(TokioExecutor::new())
            .build::<HttpsConnector<HttpConnector>, Full<Bytes>>(connector);
        Self { client }
    }

    /// Creates a configured HTTP request service using this client
    pub fn create_request_service(self) -> HttpRequestService {
        HttpRequestService::new(Box::new(self))
    }
}

impl Default for HyperHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for HyperHttpClient {
    async fn send(&self, descriptor: &RequestDescriptor) -> Result<Response> {
        let hyper_request = RequestAdapter::to_hyper_request(descriptor)?;
        let hyper_response = self.execute_http_request(hyper_request).await?;
        ResponseAdapter::to_domain_response(hyper_response).await
    }
}

impl HyperHttpClient {
    async fn execute_http_request(
        &self,
        request: HyperRequest<Full<Bytes>>,
    ) -> Result<hyper::Response<Incoming>> {
        debug!(method = %request.method(), uri = %request.uri(), "sending request");
        self.client
            .request(request)
            .await
            .map_err(|e| HurlError::Transport(transport_message(&e)))
    }
}

/// Flattens the error chain; the legacy client's top-level message alone
/// ("client error (Connect)") hides the actual cause.
fn transport_message(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Adapter for converting domain requests to Hyper requests
struct RequestAdapter;

impl RequestAdapter {
    fn to_hyper_request(descriptor: &RequestDescriptor) -> Result<HyperRequest<Full<Bytes>>> {
        let method = MethodAdapter::to_hyper_method(&descriptor.method)?;
        let uri = UriAdapter::to_hyper_uri(&descriptor.url)?;
        let body = BodyAdapter::to_hyper_body(&descriptor.body);

        let mut request = HyperRequest::builder()
            .method(method)
            .uri(uri)
            .body(body)
            .map_err(|e| HurlError::RequestBuild(e.to_string()))?;

        HeaderAdapter::apply(request.headers_mut(), &descriptor.headers)?;
        Ok(request)
    }
}

/// Adapter for converting domain responses from Hyper responses
struct ResponseAdapter;

impl ResponseAdapter {
    async fn to_domain_response(hyper_response: hyper::Response<Incoming>) -> Result<Response> {
        let status = hyper_response.status();
        let body = Self::extract_response_body(hyper_response).await?;

        Ok(Response { status, body })
    }

    async fn extract_response_body(response: hyper::Response<Incoming>) -> Result<Bytes> {
        let collected = response
            .into_body()
            .collect()
            .await
            .map_err(|e| HurlError::ResponseRead(e.to_string()))?;
        Ok(collected.to_bytes())
    }
}

/// Adapter for converting domain HTTP methods to Hyper methods
struct MethodAdapter;

impl MethodAdapter {
    fn to_hyper_method(domain_method: &DomainMethod) -> Result<Method> {
        Method::from_bytes(domain_method.as_str().as_bytes()).map_err(|e| {
            HurlError::RequestBuild(format!("invalid method '{domain_method}': {e}"))
        })
    }
}

/// Adapter for converting domain URLs to Hyper URIs
struct UriAdapter;

impl UriAdapter {
    fn to_hyper_uri(raw_url: &str) -> Result<Uri> {
        raw_url
            .parse::<Uri>()
            .map_err(|e| HurlError::RequestBuild(format!("invalid URL '{raw_url}': {e}")))
    }
}

/// Adapter for converting domain request bodies to Hyper bodies
struct BodyAdapter;

impl BodyAdapter {
    fn to_hyper_body(body: &Bytes) -> Full<Bytes> {
        Full::new(body.clone())
    }
}

/// Adapter for handling HTTP headers
struct HeaderAdapter;

impl HeaderAdapter {
    /// Sets every header, replacing any value already present for the name.
    fn apply(target: &mut HeaderMap, headers: &Headers) -> Result<()> {
        for (key, value) in headers.iter() {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| HurlError::RequestBuild(format!("invalid header name '{key}': {e}")))?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                HurlError::RequestBuild(format!("invalid value for header '{key}': {e}"))
            })?;
            target.insert(name, value);
        }
        Ok(())
    }
}
