use std::time::Duration;

use url::Url;

use crate::error::ConfigError;
use crate::query::endpoint_url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8983/solr/";
pub const DEFAULT_CORE: &str = "movies";
pub const DEFAULT_HANDLER: &str = "suggest_topic";

#[derive(Clone, Debug)]
pub struct WidgetConfig {
    /// Inputs whose normalized length does not exceed this clear the display.
    pub min_query_length: usize, // 2
    pub debounce: Duration, // 350ms
    pub endpoint: Url,
    /// Dump the raw JSON when nothing matched.
    pub show_diagnostics: bool, // true
    /// Append the numFound footer under the results.
    pub show_found_count: bool, // true
    /// None: wait for the search service as long as it takes.
    pub request_timeout: Option<Duration>, // None
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            min_query_length: 2,
            debounce: Duration::from_millis(350),
            endpoint: default_endpoint(),
            show_diagnostics: true,
            show_found_count: true,
            request_timeout: None,
        }
    }
}

fn default_endpoint() -> Url {
    endpoint_url(DEFAULT_BASE_URL, DEFAULT_CORE, DEFAULT_HANDLER).expect("default endpoint")
}

impl WidgetConfig {
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self { endpoint, ..Self::default() }
    }

    /// - TYPEAHEAD_ENDPOINT (optional; full handler url, wins over the three below)
    /// - TYPEAHEAD_BASE_URL (default http://localhost:8983/solr/)
    /// - TYPEAHEAD_CORE (default movies)
    /// - TYPEAHEAD_HANDLER (default suggest_topic)
    /// - TYPEAHEAD_MIN_QUERY_LEN (default 2)
    /// - TYPEAHEAD_DEBOUNCE_MS (default 350)
    /// - TYPEAHEAD_SHOW_DIAGNOSTICS (bool, default true)
    /// - TYPEAHEAD_SHOW_FOUND_COUNT (bool, default true)
    /// - TYPEAHEAD_TIMEOUT_MS (optional; 0 means no timeout)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        cfg.endpoint = match non_empty_env("TYPEAHEAD_ENDPOINT") {
            Some(raw) => Url::parse(&raw).map_err(|source| ConfigError::Endpoint {
                url: raw.clone(),
                source,
            })?,
            None => {
                let base = non_empty_env("TYPEAHEAD_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
                let core =
                    non_empty_env("TYPEAHEAD_CORE").unwrap_or_else(|| DEFAULT_CORE.to_string());
                let handler = non_empty_env("TYPEAHEAD_HANDLER")
                    .unwrap_or_else(|| DEFAULT_HANDLER.to_string());
                endpoint_url(&base, &core, &handler)
                    .map_err(|source| ConfigError::Endpoint { url: base, source })?
            }
        };

        cfg.min_query_length = parse_env_usize("TYPEAHEAD_MIN_QUERY_LEN", cfg.min_query_length);
        cfg.debounce = Duration::from_millis(parse_env_u64(
            "TYPEAHEAD_DEBOUNCE_MS",
            cfg.debounce.as_millis() as u64,
        ));
        cfg.show_diagnostics = parse_env_bool("TYPEAHEAD_SHOW_DIAGNOSTICS", cfg.show_diagnostics);
        cfg.show_found_count = parse_env_bool("TYPEAHEAD_SHOW_FOUND_COUNT", cfg.show_found_count);
        cfg.request_timeout = std::env::var("TYPEAHEAD_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis);

        Ok(cfg)
    }

    /// Effective settings paired with the variable controlling each, in a
    /// stable order for startup logging.
    pub fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("TYPEAHEAD_ENDPOINT", self.endpoint.to_string()),
            ("TYPEAHEAD_MIN_QUERY_LEN", self.min_query_length.to_string()),
            ("TYPEAHEAD_DEBOUNCE_MS", self.debounce.as_millis().to_string()),
            ("TYPEAHEAD_SHOW_DIAGNOSTICS", self.show_diagnostics.to_string()),
            ("TYPEAHEAD_SHOW_FOUND_COUNT", self.show_found_count.to_string()),
            (
                "TYPEAHEAD_TIMEOUT_MS",
                self.request_timeout
                    .map(|d| d.as_millis().to_string())
                    .unwrap_or_else(|| "<none>".to_string()),
            ),
        ]
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| {
            let s = s.trim().to_ascii_lowercase();
            matches!(s.as_str(), "1" | "true" | "yes" | "on")
        })
        .unwrap_or(default)
}
