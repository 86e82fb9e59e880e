use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Bytes left untouched in a query parameter value (RFC 3986 unreserved).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Lowercased, trimmed form of the raw input, used only to decide whether
/// the input is long enough to search for.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True when the normalized input is longer than `min_len` characters.
/// Inputs at or below the threshold clear the display instead of searching.
pub fn is_searchable(raw: &str, min_len: usize) -> bool {
    normalize(raw).chars().count() > min_len
}

pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Append `q=<raw>` to `endpoint`, percent-encoding the raw text.
/// Existing query parameters on the endpoint are preserved.
pub fn search_url(endpoint: &Url, raw: &str) -> Url {
    let mut url = endpoint.clone();
    let q = format!("q={}", encode_query_value(raw));
    let query = match endpoint.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{q}"),
        _ => q,
    };
    url.set_query(Some(&query));
    url
}

/// Compose `{base}/{core}/{handler}`. The base gets a trailing slash first so
/// that joining never drops its last path segment.
pub fn endpoint_url(base: &str, core: &str, handler: &str) -> Result<Url, url::ParseError> {
    let base = base.trim();
    let base = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    };
    let core = core.trim().trim_matches('/');
    let handler = handler.trim().trim_matches('/');
    Url::parse(&base)?.join(&format!("{core}/{handler}"))
}
