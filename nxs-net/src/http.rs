use std::path::Path;
use std::time::Duration;

use futures::StreamExt;
use nxs_common::config::{Config, Credentials};
use nxs_common::error::{NxsError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_LENGTH, USER_AGENT};
use reqwest::{Body, Client, Method, RequestBuilder, Response, StatusCode};
use tokio::fs::File as TokioFile;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;
use tracing::{debug, error};

use crate::transport::{Payload, Transport};
use crate::validation::validate_url;

const REQUEST_TIMEOUT_SECS: u64 = 300;
const CONNECT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT_STRING: &str = "nxs artifact sync (Rust)";

/// [`Transport`] over HTTP(S) with optional basic auth.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    credentials: Option<Credentials>,
}

impl HttpTransport {
    pub fn new(credentials: Option<Credentials>) -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
            credentials,
        })
    }

    /// Builds a transport using the configured credentials. Fails when auth is
    /// enabled but no credentials are configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.credentials()?)
    }

    fn request(&self, method: Method, url: &str) -> Result<RequestBuilder> {
        validate_url(url)?;
        let mut builder = self.client.request(method, url);
        if let Some(creds) = &self.credentials {
            builder = builder.basic_auth(&creds.username, creds.password.as_deref());
        }
        Ok(builder)
    }

    async fn send(&self, builder: RequestBuilder, method: &Method, url: &str) -> Result<Response> {
        let response = builder.send().await.map_err(|e| {
            debug!("HTTP {method} request failed for {url}: {e}");
            NxsError::HttpError(format!("HTTP {method} request failed for {url}: {e}"))
        })?;
        debug!("Received HTTP status: {} for {} {}", response.status(), method, url);
        Ok(response)
    }
}

fn build_http_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| NxsError::HttpError(format!("Failed to build HTTP client: {e}")))
}

/// Turns a non-success status into an error carrying the response body.
async fn error_for_status(response: Response, method: &Method, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read response body".to_string());
    error!("HTTP error {} for {} {}: {}", status, method, url, body_text);
    Err(NxsError::HttpError(format!(
        "HTTP error {status} for URL {url}: {}",
        body_text.trim()
    )))
}

impl Transport for HttpTransport {
    async fn exists(&self, url: &str) -> Result<bool> {
        let method = Method::HEAD;
        let builder = self.request(method.clone(), url)?;
        let response = self.send(builder, &method, url).await?;
        Ok(response.status().is_success())
    }

    async fn get(&self, url: &str) -> Result<Option<Vec<u8>>> {
        let method = Method::GET;
        let builder = self.request(method.clone(), url)?;
        let response = self.send(builder, &method, url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("{} not found", url);
            return Ok(None);
        }
        let response = error_for_status(response, &method, url).await?;
        let content = response
            .bytes()
            .await
            .map_err(|e| NxsError::HttpError(format!("Failed to read response body bytes: {e}")))?;
        Ok(Some(content.to_vec()))
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let method = Method::GET;
        let builder = self.request(method.clone(), url)?;
        let response = self.send(builder, &method, url).await?;
        let response = error_for_status(response, &method, url).await?;

        let mut out = TokioFile::create(dest).await.map_err(|e| {
            NxsError::IoError(format!("Failed to create {}: {}", dest.display(), e))
        })?;
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|e| {
                NxsError::HttpError(format!("Failed to read response body from {url}: {e}"))
            })?;
            out.write_all(&bytes).await.map_err(|e| {
                NxsError::IoError(format!(
                    "Failed to write download stream to {}: {}",
                    dest.display(),
                    e
                ))
            })?;
            written += bytes.len() as u64;
        }
        out.flush().await?;
        debug!("Wrote {} bytes from {} to {}", written, url, dest.display());
        Ok(())
    }

    async fn put(&self, url: &str, payload: Payload<'_>) -> Result<()> {
        let method = Method::PUT;
        let builder = self.request(method.clone(), url)?;
        let builder = match payload {
            Payload::Bytes(bytes) => builder.body(bytes.to_vec()),
            Payload::File(path) => {
                let file = TokioFile::open(path).await.map_err(|e| {
                    NxsError::IoError(format!("Failed to open {}: {}", path.display(), e))
                })?;
                let len = file.metadata().await?.len();
                debug!("Streaming {} ({} bytes) to {}", path.display(), len, url);
                builder
                    .header(CONTENT_LENGTH, len)
                    .body(Body::wrap_stream(ReaderStream::new(file)))
            }
        };
        let response = self.send(builder, &method, url).await?;
        error_for_status(response, &method, url).await?;
        Ok(())
    }

    async fn delete(&self, url: &str) -> Result<()> {
        let method = Method::DELETE;
        let builder = self.request(method.clone(), url)?;
        let response = self.send(builder, &method, url).await?;
        error_for_status(response, &method, url).await?;
        Ok(())
    }
}
