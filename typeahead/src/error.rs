use thiserror::Error;

use crate::client::ClientError;

/// Why a search cycle produced no results to show. Always rendered, never
/// propagated past the widget.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(#[from] ClientError),

    #[error("search service answered with status {0}")]
    Status(u16),

    #[error("response is not valid JSON: {0}")]
    Json(String),

    #[error("unexpected response shape: {0}")]
    Shape(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint url {url:?}: {source}")]
    Endpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
