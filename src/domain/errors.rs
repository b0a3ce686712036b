use std::io;
use std::path::PathBuf;

/// Result type alias over [`HurlError`].
pub type Result<T> = std::result::Result<T, HurlError>;

/// Every way a single hurl run can fail. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum HurlError {
    /// The positional URL was absent or empty.
    #[error("URL is required")]
    MissingUrl,

    /// The `@file` body source could not be read.
    #[error("error reading file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Method, URL or a header could not be turned into a request.
    #[error("error creating request: {0}")]
    RequestBuild(String),

    /// DNS, connect or protocol failure while submitting the request.
    #[error("error making request: {0}")]
    Transport(String),

    /// The response body could not be drained.
    #[error("error reading response: {0}")]
    ResponseRead(String),

    /// The output file could not be written.
    #[error("error writing to file {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard output rejected the write.
    #[error("error writing to stdout: {0}")]
    Stdout(#[from] io::Error),
}
