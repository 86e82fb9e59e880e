use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use url::Url;

use typeahead_api::request::Request;

use crate::proto::http::{read_response, Response};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("unsupported url scheme {0:?}")]
    UnsupportedScheme(String),
    #[error("url has no host")]
    MissingHost,
    #[error("could not connect to search service")]
    Connection,
    #[error("search service timed out")]
    Timeout,
    #[error("i/o error while talking to search service")]
    Io,
    #[error("malformed http response")]
    InvalidMessage,
    #[error("response exceeds size limit")]
    TooLarge,
}

pub trait IoStream: AsyncRead + AsyncWrite + Unpin + Send {}
impl<T: AsyncRead + AsyncWrite + Unpin + Send> IoStream for T {}
pub type DynStream = Pin<Box<dyn IoStream>>;

pub type ConnectFuture =
    Pin<Box<dyn std::future::Future<Output = Result<DynStream, ClientError>> + Send>>;

pub type ConnectorFn = dyn Fn(&str, u16) -> ConnectFuture + Send + Sync;

/// One-shot HTTP/1.1 GET client. Every request opens a fresh connection
/// through the connector; nothing is retried.
#[derive(Clone)]
pub struct SearchClient {
    connector: Arc<ConnectorFn>,
    pub req_timeout: Option<Duration>,
    pub header_read_chunk: usize,
}

impl SearchClient {
    pub fn new_with_connector(connector: Arc<ConnectorFn>) -> Self {
        Self {
            connector,
            req_timeout: None,
            header_read_chunk: 2048,
        }
    }

    /// Plain TCP connector.
    pub fn new_tcp() -> Self {
        let connector: Arc<ConnectorFn> = Arc::new(|host: &str, port: u16| -> ConnectFuture {
            let host = host.to_string();
            Box::pin(async move {
                let tcp = tokio::net::TcpStream::connect((host.as_str(), port))
                    .await
                    .map_err(|_| ClientError::Connection)?;
                let _ = tcp.set_nodelay(true);
                Ok::<DynStream, ClientError>(Box::pin(tcp))
            })
        });
        Self::new_with_connector(connector)
    }

    pub fn with_timeout(mut self, req_timeout: Option<Duration>) -> Self {
        self.req_timeout = req_timeout;
        self
    }

    pub async fn get(&self, url: &Url) -> Result<Response, ClientError> {
        match self.req_timeout {
            Some(limit) => timeout(limit, self.get_once(url))
                .await
                .map_err(|_| ClientError::Timeout)?,
            None => self.get_once(url).await,
        }
    }

    async fn get_once(&self, url: &Url) -> Result<Response, ClientError> {
        if url.scheme() != "http" {
            return Err(ClientError::UnsupportedScheme(url.scheme().to_string()));
        }
        let host = url.host_str().ok_or(ClientError::MissingHost)?;
        let port = url.port_or_known_default().unwrap_or(80);
        let target = format!(
            "{}{}",
            url.path(),
            url.query().map(|q| format!("?{}", q)).unwrap_or_default()
        );
        let host_header = match url.port() {
            Some(p) => format!("{host}:{p}"),
            None => host.to_string(),
        };

        let mut stream = (self.connector)(host, port).await?;

        let req = Request::get(&host_header, &target);
        stream
            .write_all(&req.to_bytes())
            .await
            .map_err(|_| ClientError::Io)?;
        stream.flush().await.map_err(|_| ClientError::Io)?;

        let resp = read_response(&mut stream, self.header_read_chunk).await?;
        tracing::debug!(
            target: "typeahead::client",
            code = resp.code,
            bytes = resp.body.len(),
            "response from {}",
            url.path()
        );
        Ok(resp)
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new_tcp()
    }
}
