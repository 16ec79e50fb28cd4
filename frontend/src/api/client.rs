use reqwest::{header::AUTHORIZATION, Client, Method, RequestBuilder, Response};
use serde::Serialize;

use crate::{
    api::{multipart::FormPayload, types::*},
    config,
    state::token_store::TokenStore,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    tokens: TokenStore,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            tokens: TokenStore::detect(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::new()
        }
    }

    pub fn with_tokens(mut self, tokens: TokenStore) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn tokens(&self) -> TokenStore {
        self.tokens.clone()
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.token() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder, fallback: &str) -> Result<Envelope, ApiError> {
        let response = builder.send().await.map_err(|e| {
            log::warn!("Request failed: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })?;
        Self::map_envelope_response(response, fallback).await
    }

    async fn map_envelope_response(response: Response, fallback: &str) -> Result<Envelope, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to read response: {}", e)))?;
        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(Envelope::default());
            }
            return serde_json::from_str(&body)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)));
        }
        let error = match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(details) => {
                let message = details
                    .get("message")
                    .or_else(|| details.get("error"))
                    .and_then(|m| m.as_str())
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or(fallback)
                    .to_string();
                ApiError::from_status(status.as_u16(), message).with_details(details)
            }
            Err(_) => ApiError::from_status(status.as_u16(), fallback),
        };
        if error.is_unauthorized() {
            log::warn!("Backend rejected the session token ({})", status);
        }
        Err(error)
    }

    pub(crate) async fn get_envelope(
        &self,
        path: &str,
        query: &[(String, String)],
        fallback: &str,
    ) -> Result<Envelope, ApiError> {
        let url = self.endpoint(path).await;
        let builder = self.authorize(self.http_client().get(url).query(query));
        self.execute(builder, fallback).await
    }

    pub(crate) async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<Envelope, ApiError> {
        let url = self.endpoint(path).await;
        let builder = self.authorize(self.http_client().request(method, url).json(body));
        self.execute(builder, fallback).await
    }

    pub(crate) async fn send_multipart(
        &self,
        method: Method,
        path: &str,
        payload: FormPayload,
        fallback: &str,
    ) -> Result<Envelope, ApiError> {
        let form = payload.into_form()?;
        let url = self.endpoint(path).await;
        let builder = self.authorize(self.http_client().request(method, url).multipart(form));
        self.execute(builder, fallback).await
    }

    /// Multipart request sent without the bearer header.
    pub(crate) async fn send_public_multipart(
        &self,
        path: &str,
        payload: FormPayload,
        fallback: &str,
    ) -> Result<Envelope, ApiError> {
        let form = payload.into_form()?;
        let url = self.endpoint(path).await;
        self.execute(self.http_client().post(url).multipart(form), fallback)
            .await
    }

    pub(crate) async fn send_public_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<Envelope, ApiError> {
        let url = self.endpoint(path).await;
        self.execute(self.http_client().post(url).json(body), fallback)
            .await
    }

    pub(crate) async fn delete_resource(&self, path: &str, fallback: &str) -> Result<Envelope, ApiError> {
        let url = self.endpoint(path).await;
        let builder = self.authorize(self.http_client().delete(url));
        self.execute(builder, fallback).await
    }
}
