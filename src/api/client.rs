//! JSON client for the remote dashboard API.

use super::{ApiConfig, ApiError};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

/// Thin JSON client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Client`] if the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url().to_owned(),
            token: config.token().map(str::to_owned),
        })
    }

    /// Returns the absolute URL for an API path such as `/tasks/42`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetches a resource, mapping `404 Not Found` to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, any other non-success
    /// status, or an undecodable body.
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        let url = self.url(path);
        match self.execute(self.http.get(&url), &url).await {
            Ok(value) => Ok(Some(value)),
            Err(ApiError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Fetches a resource with query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// undecodable body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        self.execute(self.http.get(&url).query(query), &url).await
    }

    /// Sends a JSON body with `POST`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// undecodable body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        self.execute(self.http.post(&url).json(body), &url).await
    }

    /// Sends a JSON body with `PATCH`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// undecodable body.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        self.execute(self.http.patch(&url).json(body), &url).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        let authorized = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        tracing::debug!(url, "sending API request");

        let transport = |source| ApiError::Transport {
            url: url.to_owned(),
            source,
        };
        let response = authorized.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "API returned an error status");
            return Err(ApiError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.to_owned(),
            source,
        })
    }
}
