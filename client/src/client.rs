//! Paperdesk API client implementation

use crate::error::ApiError;
use futures::StreamExt;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Port the paperdesk API server listens on.
pub const DEFAULT_PORT: u16 = 4000;

/// File name used when saving a dataset download.
pub const DOWNLOAD_FILE_NAME: &str = "tune.jsonl";

/// Environment variable naming the API host.
pub const API_HOST_VAR: &str = "PAPERDESK_API_HOST";

/// Paperdesk API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for `host`, applying the fixed
    /// `http://<host>:4000/api` convention.
    #[must_use]
    pub fn new(host: &str) -> Self {
        Self::with_base_url(format!("http://{host}:{DEFAULT_PORT}/api"))
    }

    /// Create a new client with the host taken from `PAPERDESK_API_HOST`,
    /// falling back to `localhost`.
    #[must_use]
    pub fn from_env() -> Self {
        let host = std::env::var(API_HOST_VAR).unwrap_or_else(|_| "localhost".to_string());
        Self::new(&host)
    }

    /// Create a new client with an explicit URL prefix, bypassing the
    /// host/port convention. Intended for tests against a stub server.
    #[must_use]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// The URL prefix requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET request with no query string.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success statuses, or bodies
    /// that fail to decode.
    pub async fn get<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        self.get_inner(path, None::<&()>).await
    }

    /// Issue a GET request with `query` URL-encoded into the request.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success statuses, or bodies
    /// that fail to decode.
    pub async fn get_with<Q, R>(&self, path: &str, query: &Q) -> Result<R, ApiError>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.get_inner(path, Some(query)).await
    }

    async fn get_inner<Q, R>(&self, path: &str, query: Option<&Q>) -> Result<R, ApiError>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut request = self.client.get(format!("{}/{path}", self.base_url));
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::decode(response).await
    }

    /// Issue a POST request with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success statuses, or bodies
    /// that fail to decode.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}/{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<R>(response: reqwest::Response) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        match response.status() {
            StatusCode::OK => response
                .json::<R>()
                .await
                .map_err(|e| ApiError::DecodeFailed(e.to_string())),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::Status {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }

    /// Stream a GET response into `dir`, saving it as `tune.jsonl`.
    ///
    /// The body is written chunk by chunk, so exports larger than memory are
    /// fine. Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success statuses, or stream
    /// and filesystem failures while writing.
    pub async fn download_to_dir<Q>(
        &self,
        path: &str,
        query: &Q,
        dir: &Path,
    ) -> Result<PathBuf, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let response = self
            .client
            .get(format!("{}/{path}", self.base_url))
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let target = dir.join(DOWNLOAD_FILE_NAME);
        let mut file = tokio::fs::File::create(&target)
            .await
            .map_err(|e| ApiError::DownloadFailed(e.to_string()))?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|e| ApiError::DownloadFailed(e.to_string()))?;
            file.write_all(&bytes)
                .await
                .map_err(|e| ApiError::DownloadFailed(e.to_string()))?;
        }
        file.flush()
            .await
            .map_err(|e| ApiError::DownloadFailed(e.to_string()))?;

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_host_convention() {
        let client = ApiClient::new("localhost");
        assert_eq!(client.base_url, "http://localhost:4000/api");
    }

    #[test]
    fn test_with_base_url_is_verbatim() {
        let client = ApiClient::with_base_url("http://127.0.0.1:9000".to_string());
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
    }
}
