#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed for prefix {prefix}: {source}")]
    HttpRequest {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: HTTP {status} for prefix {prefix}, check the API and try again")]
    HttpStatus { prefix: String, status: u16 },

    #[error("Malformed range record '{line}': {reason}")]
    MalformedRecord { line: String, reason: &'static str },

    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to read password: {0}")]
    Prompt(#[from] std::io::Error),
}
