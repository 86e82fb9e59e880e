use crate::{limits::enforce_max_message_size, status::StatusCode};

pub const USER_AGENT: &str = concat!("typeahead/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    /// Origin-form target: path plus optional `?query`.
    pub target: String,
    pub headers: Vec<(String, String)>,
}

impl Request {
    /// A GET asking for JSON on a connection that closes after the response.
    pub fn get(host: &str, target: &str) -> Self {
        Self {
            method: "GET".to_string(),
            target: target.to_string(),
            headers: vec![
                ("host".to_string(), host.to_string()),
                ("accept".to_string(), "application/json".to_string()),
                ("user-agent".to_string(), USER_AGENT.to_string()),
                ("connection".to_string(), "close".to_string()),
            ],
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn path(&self) -> &str {
        self.target.split_once('?').map(|(p, _)| p).unwrap_or(&self.target)
    }

    pub fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, q)| q)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = format!("{} {} HTTP/1.1\r\n", self.method, self.target).into_bytes();
        for (k, v) in &self.headers {
            out.extend_from_slice(k.as_bytes());
            out.extend_from_slice(b": ");
            out.extend_from_slice(v.as_bytes());
            out.extend_from_slice(b"\r\n");
        }
        out.extend_from_slice(b"\r\n");
        out
    }
}

/// Parse a request head (start line plus headers) while enforcing the
/// message size limit. Returns a StatusCode error on violations.
pub fn parse_request(raw: &[u8]) -> Result<Request, StatusCode> {
    if enforce_max_message_size(raw.len()).is_err() {
        return Err(StatusCode::Other(413));
    }
    let text = std::str::from_utf8(raw).map_err(|_| StatusCode::BadRequest)?;
    let mut lines = text.split("\r\n");
    let line = lines.next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("");
    if method.is_empty() || target.is_empty() {
        return Err(StatusCode::BadRequest);
    }
    let mut headers = Vec::new();
    for line in lines {
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
        }
    }
    Ok(Request { method: method.to_string(), target: target.to_string(), headers })
}
