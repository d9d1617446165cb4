use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, InternalError};
use crate::http::{ApiRequest, BaseHttpClient};

#[derive(Debug)]
pub struct Config {
    pub base_url: ApiUrl,
}

impl Config {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: ApiUrl { url: base_url },
        }
    }
}

#[derive(Debug)]
pub struct ApiUrl {
    pub url: Url,
}

impl ApiUrl {
    pub fn for_api(&self, api_path: &str) -> Result<Url, InternalError> {
        self.url.join("api/")?.join(api_path).map_err(Into::into)
    }
}

#[async_trait]
pub trait BaseClient {
    type Http: BaseHttpClient;

    fn get_http_client(&self) -> &Self::Http;

    fn get_config(&self) -> &Config;

    async fn api_request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, Error> {
        let url = self.get_config().base_url.for_api(path)?;
        let mut request = ApiRequest::new(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(self.get_http_client().request_json(request).await?)
    }
}

#[async_trait]
pub trait SecureClient: BaseClient + Sync {
    /// Bearer token of the signed-in user, usually sourced from the local
    /// session document. `None` means signed out.
    fn auth_token(&self) -> Option<String>;

    async fn api_authenticated_request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, Error> {
        let token = self.auth_token().ok_or(Error::NotAuthenticated)?;
        let url = self.get_config().base_url.for_api(path)?;
        let mut request = ApiRequest::new(method, url).bearer(token);
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(self.get_http_client().request_json(request).await?)
    }
}
