use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::HttpError;

/// One JSON request to the platform API.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            bearer: None,
            body: None,
        }
    }

    #[must_use]
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Transport seam: the client traits talk to this, tests substitute their
/// own implementation.
#[async_trait]
pub trait BaseHttpClient: Send + Sync {
    async fn request_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, HttpError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[async_trait]
impl BaseHttpClient for ReqwestHttpClient {
    async fn request_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, HttpError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending api request");
        let mut builder = self.client.request(request.method, request.url);
        if let Some(token) = request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(Into::into)
        } else {
            let message = response.text().await.unwrap_or_default();
            tracing::debug!(%status, "api request failed");
            Err(HttpError::Status(status, message))
        }
    }
}
