use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use typeahead_api::response::{SearchEnvelope, SearchResponse};

use crate::client::SearchClient;
use crate::error::SearchError;
use crate::proto::http::Response;
use crate::query::search_url;

/// Result of one search cycle, as handed to the render step.
#[derive(Debug)]
pub enum SearchOutcome {
    Found(SearchResponse),
    /// Zero docs. `raw` is the whole body, kept for the diagnostics dump.
    Empty { num_found: u64, raw: Value },
    Failed(SearchError),
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchOutcome::Empty { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SearchOutcome::Failed(_))
    }
}

/// Issue one GET for `raw_query` against `endpoint`. Never fails: transport,
/// status and decoding problems all come back as `SearchOutcome::Failed`.
pub async fn search(client: &SearchClient, endpoint: &Url, raw_query: &str) -> SearchOutcome {
    let url = search_url(endpoint, raw_query);
    debug!(target: "typeahead::search", "GET {}", url);
    let outcome = match client.get(&url).await {
        Ok(resp) => classify(resp),
        Err(e) => SearchOutcome::Failed(e.into()),
    };
    if let SearchOutcome::Failed(e) = &outcome {
        warn!(target: "typeahead::search", query = raw_query, "search failed: {e}");
    }
    outcome
}

pub fn classify(resp: Response) -> SearchOutcome {
    if !resp.status().is_success() {
        return SearchOutcome::Failed(SearchError::Status(resp.code));
    }
    let raw: Value = match serde_json::from_slice(&resp.body) {
        Ok(v) => v,
        Err(e) => return SearchOutcome::Failed(SearchError::Json(e.to_string())),
    };
    let envelope: SearchEnvelope = match serde_json::from_value(raw.clone()) {
        Ok(env) => env,
        Err(e) => return SearchOutcome::Failed(SearchError::Shape(e.to_string())),
    };
    let response = envelope.response;
    if response.is_empty() {
        SearchOutcome::Empty {
            num_found: response.num_found,
            raw,
        }
    } else {
        SearchOutcome::Found(response)
    }
}
