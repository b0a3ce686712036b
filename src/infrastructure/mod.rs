pub mod http_client;
pub mod output;
pub mod telemetry;
