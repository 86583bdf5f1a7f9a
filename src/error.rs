use thiserror::Error;

/// Failure kinds for a ticker fetch. Each variant maps to one stage of the
/// request: building the URL, talking to the server, draining the body, and
/// decoding the payload.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to build request URL: {0}")]
    UrlBuild(String),
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),
    #[error("failed to decode ticker response: {0}")]
    Decode(#[from] serde_json::Error),
}
