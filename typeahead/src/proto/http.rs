use memchr::{memchr, memmem::Finder};
use tokio::io::{AsyncRead, AsyncReadExt};
use typeahead_api::limits::{enforce_max_message_size, MAX_MESSAGE_BYTES};
use typeahead_api::status::StatusCode;

use crate::client::ClientError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub code: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

enum BodyFraming {
    Length(usize),
    Chunked,
    UntilClose,
}

/// Read one HTTP/1.x response. The body is delimited by content-length,
/// chunked transfer-encoding, or end of stream, in that order of preference.
pub async fn read_response<S>(stream: &mut S, chunk: usize) -> Result<Response, ClientError>
where
    S: AsyncRead + Unpin + ?Sized,
{
    // Read headers up to CRLFCRLF with total cap
    let mut buf: Vec<u8> = Vec::with_capacity(4096);
    let mut tmp = vec![0u8; chunk.max(1)];
    let finder = Finder::new(b"\r\n\r\n");
    let mut search_from: usize = 0;
    let header_end;
    loop {
        let n = stream.read(&mut tmp).await.map_err(|_| ClientError::Io)?;
        if n == 0 {
            return Err(ClientError::Connection);
        }
        let before_len = buf.len();
        buf.extend_from_slice(&tmp[..n]);
        if buf.len() > MAX_MESSAGE_BYTES {
            return Err(ClientError::TooLarge);
        }
        // only rescan the tail, with overlap for a split terminator
        let start = search_from.saturating_sub(3);
        if let Some(rel) = finder.find(&buf[start..]) {
            header_end = start + rel;
            break;
        }
        search_from = before_len + n;
    }

    let (head, rest) = buf.split_at(header_end + 4);
    let head_str = std::str::from_utf8(head).map_err(|_| ClientError::InvalidMessage)?;
    let mut lines = head_str.split("\r\n");
    let status = lines.next().unwrap_or("");
    let mut sp = status.split_whitespace();
    let proto = sp.next().unwrap_or("");
    if !proto.starts_with("HTTP/") {
        return Err(ClientError::InvalidMessage);
    }
    let code = sp
        .next()
        .and_then(|c| c.parse::<u16>().ok())
        .ok_or(ClientError::InvalidMessage)?;

    let mut headers: Vec<(String, String)> = Vec::new();
    let mut framing = BodyFraming::UntilClose;
    for line in lines {
        if line.is_empty() {
            continue;
        }
        let Some(idx) = memchr(b':', line.as_bytes()) else {
            continue;
        };
        let (name_raw, value_raw) = line.split_at(idx);
        let name = name_raw.trim().to_ascii_lowercase();
        let value = value_raw[1..].trim().to_string();
        if name == "transfer-encoding" && value.to_ascii_lowercase().contains("chunked") {
            framing = BodyFraming::Chunked;
        } else if name == "content-length" && !matches!(framing, BodyFraming::Chunked) {
            let n = value.parse::<usize>().map_err(|_| ClientError::InvalidMessage)?;
            framing = BodyFraming::Length(n);
        }
        headers.push((name, value));
    }

    let head_len = header_end + 4;
    let mut body = rest.to_vec();
    match framing {
        BodyFraming::Length(len) => {
            enforce_max_message_size(head_len.saturating_add(len))
                .map_err(|_| ClientError::TooLarge)?;
            read_until(stream, &mut body, head_len, Some(len)).await?;
            if body.len() < len {
                return Err(ClientError::Connection);
            }
            body.truncate(len);
        }
        BodyFraming::Chunked => {
            read_until(stream, &mut body, head_len, None).await?;
            body = decode_chunked(&body)?;
        }
        BodyFraming::UntilClose => {
            read_until(stream, &mut body, head_len, None).await?;
        }
    }

    Ok(Response { code, headers, body })
}

/// Append to `body` until `want` bytes are present or the peer closes.
async fn read_until<S>(
    stream: &mut S,
    body: &mut Vec<u8>,
    head_len: usize,
    want: Option<usize>,
) -> Result<(), ClientError>
where
    S: AsyncRead + Unpin + ?Sized,
{
    let mut chunk = [0u8; 4096];
    while want.map_or(true, |w| body.len() < w) {
        let n = stream.read(&mut chunk).await.map_err(|_| ClientError::Io)?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
        enforce_max_message_size(head_len + body.len()).map_err(|_| ClientError::TooLarge)?;
    }
    Ok(())
}

/// Decode a complete chunked body. Chunk extensions and trailers are ignored.
pub fn decode_chunked(raw: &[u8]) -> Result<Vec<u8>, ClientError> {
    let crlf = Finder::new(b"\r\n");
    let mut out = Vec::with_capacity(raw.len());
    let mut pos = 0usize;
    loop {
        let line_len = crlf.find(&raw[pos..]).ok_or(ClientError::InvalidMessage)?;
        let line = std::str::from_utf8(&raw[pos..pos + line_len])
            .map_err(|_| ClientError::InvalidMessage)?;
        let size_hex = line.split(';').next().unwrap_or("").trim();
        let size =
            usize::from_str_radix(size_hex, 16).map_err(|_| ClientError::InvalidMessage)?;
        pos += line_len + 2;
        if size == 0 {
            return Ok(out);
        }
        let Some((end, stop)) = pos
            .checked_add(size)
            .and_then(|end| Some((end, end.checked_add(2)?)))
            .filter(|&(_, stop)| stop <= raw.len())
        else {
            return Err(ClientError::InvalidMessage);
        };
        if &raw[end..stop] != b"\r\n" {
            return Err(ClientError::InvalidMessage);
        }
        out.extend_from_slice(&raw[pos..end]);
        pos = stop;
    }
}
