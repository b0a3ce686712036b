use crate::application::builders::request_builder::RequestBuilder;
use crate::application::services::HttpRequestService;
use crate::infrastructure::output::OutputStyle;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::Write;

/// CLI configuration for Hurl
#[derive(Parser, Debug)]
#[command(
    name = "hurl",
    version = "0.1.0",
    author = "Anthony Lombardi <me@t0nylombardi.com>"
)]
#[command(about = "Hurl: send one HTTP request, print or save the response", long_about = None)]
pub struct Cli {
    /// Target URL
    pub url: Option<String>,

    /// HTTP method; any token is accepted
    #[arg(short = 'X', long = "request", default_value = "GET")]
    pub method: String,

    /// Comma-separated 'Key: Value' pairs; may be repeated
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Request body, or @path to read it from a file
    #[arg(short = 'd', long = "data", default_value = "")]
    pub data: String,

    /// Write the response body to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the response status and debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Pretty-print JSON bodies written to stdout
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    pub async fn run<W: Write>(&self, request_service: &HttpRequestService, out: &mut W) -> Result<()> {
        let descriptor = RequestBuilder::new()
            .method(&self.method)
            .url(self.url.as_deref().unwrap_or_default())
            .headers(self.headers.as_slice())
            .data(&self.data)
            .output(self.output.as_deref())
            .build()?;

        let style = if self.pretty {
            OutputStyle::Pretty
        } else {
            OutputStyle::Raw
        };

        let delivery = request_service.execute(descriptor, style, out).await?;

        if self.verbose {
            let status = format!(
                "Status: {} ({} bytes to {})",
                delivery.status, delivery.bytes, delivery.sink
            );
            eprintln!("{}", status.cyan());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::MockHttpClient;
    use crate::domain::entities::Response;
    use crate::domain::errors::HurlError;
    use hyper::StatusCode;
    use hyper::body::Bytes;

    fn never_called() -> HttpRequestService {
        let mut client = MockHttpClient::new();
        client.expect_send().times(0);
        HttpRequestService::new(Box::new(client))
    }

    fn hurl_error(err: anyhow::Error) -> HurlError {
        err.downcast::<HurlError>().expect("a HurlError")
    }

    #[test]
    fn parses_curl_style_flags() {
        let cli = Cli::try_parse_from([
            "hurl",
            "-X",
            "POST",
            "-d",
            "@body.json",
            "-H",
            "A: 1, B: 2",
            "-o",
            "out.bin",
            "http://example.com",
        ])
        .unwrap();

        assert_eq!(cli.url.as_deref(), Some("http://example.com"));
        assert_eq!(cli.method, "POST");
        assert_eq!(cli.data, "@body.json");
        assert_eq!(cli.headers, vec!["A: 1, B: 2".to_string()]);
        assert_eq!(cli.output.as_deref(), Some("out.bin"));
        assert!(!cli.verbose);
    }

    #[test]
    fn defaults_to_get_with_no_body() {
        let cli = Cli::try_parse_from(["hurl", "http://example.com"]).unwrap();
        assert_eq!(cli.method, "GET");
        assert_eq!(cli.data, "");
        assert!(cli.headers.is_empty());
        assert_eq!(cli.output, None);
        assert_eq!(cli.log_level(), "warn");
    }

    #[tokio::test]
    async fn missing_url_never_reaches_transport() {
        let cli = Cli::try_parse_from(["hurl", "-d", "@does-not-exist.txt"]).unwrap();
        let mut out = Vec::new();

        let err = cli.run(&never_called(), &mut out).await.unwrap_err();

        assert!(matches!(hurl_error(err), HurlError::MissingUrl));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn empty_url_never_reaches_transport() {
        let cli = Cli::try_parse_from(["hurl", ""]).unwrap();
        let err = cli.run(&never_called(), &mut Vec::new()).await.unwrap_err();
        assert!(matches!(hurl_error(err), HurlError::MissingUrl));
    }

    #[tokio::test]
    async fn unreadable_data_file_never_reaches_transport() {
        let dir = tempfile::tempdir().unwrap();
        let data = format!("@{}", dir.path().join("absent").display());
        let cli = Cli::try_parse_from(["hurl", "-d", &data, "http://example.com"]).unwrap();

        let err = cli.run(&never_called(), &mut Vec::new()).await.unwrap_err();

        assert!(matches!(hurl_error(err), HurlError::FileRead { .. }));
    }

    #[tokio::test]
    async fn prints_response_to_stdout() {
        let mut client = MockHttpClient::new();
        client
            .expect_send()
            .withf(|d| d.url == "http://example.com" && d.method.as_str() == "GET")
            .times(1)
            .returning(|_| {
                Ok(Response {
                    status: StatusCode::OK,
                    body: Bytes::from_static(b"pong"),
                })
            });
        let service = HttpRequestService::new(Box::new(client));
        let cli = Cli::try_parse_from(["hurl", "http://example.com"]).unwrap();
        let mut out = Vec::new();

        cli.run(&service, &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Response data: pong\n");
    }

    #[tokio::test]
    async fn verbose_run_still_writes_body_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        let mut client = MockHttpClient::new();
        client.expect_send().times(1).returning(|_| {
            Ok(Response {
                status: StatusCode::OK,
                body: Bytes::from_static(&[0x01, 0xff]),
            })
        });
        let service = HttpRequestService::new(Box::new(client));
        let cli = Cli::try_parse_from([
            "hurl",
            "-v",
            "-o",
            path.to_str().unwrap(),
            "http://example.com",
        ])
        .unwrap();
        let mut out = Vec::new();

        cli.run(&service, &mut out).await.unwrap();

        assert_eq!(cli.log_level(), "debug");
        assert_eq!(std::fs::read(&path).unwrap(), [0x01, 0xff]);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Response data saved to {}\n", path.display())
        );
    }
}
