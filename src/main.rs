mod application;
mod domain;
mod infrastructure;
mod presentation;

use crate::infrastructure::http_client::HyperHttpClient;
use crate::infrastructure::telemetry;
use crate::presentation::cli::Cli;
use clap::Parser;
use colored::Colorize;

/// Hurl: a tiny curl-style HTTP client
///
/// Builds one request from `-X`, `-d`, `-H` and the positional URL, sends it,
/// and prints the response body or saves it with `-o`. Any failure exits
/// with status 1.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    telemetry::init(cli.log_level());

    let request_service = HyperHttpClient::new().create_request_service();
    let mut stdout = std::io::stdout().lock();

    if let Err(err) = cli.run(&request_service, &mut stdout).await {
        eprintln!("{} {}", "Error:".red(), err);
        std::process::exit(1);
    }
}
