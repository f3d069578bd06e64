//! REST Client
//!
//! Typed wrappers around the `/api/*` endpoints, organized by domain.

mod categories;
mod chat;
mod goals;
mod stats;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use goalboard_core::schema;
use goalboard_core::ApiError;

use crate::config::{self, ApiConfig, CSRF_HEADER};

/// Endpoint client shared through context
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path)).send().await.map_err(transport)?;
        let (status, body) = read_body(response).await?;
        schema::decode(status, &body)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(u16, String), ApiError> {
        let request = with_csrf(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = request.send().await.map_err(transport)?;
        read_body(response).await
    }

    /// POST without a body, for id-addressed mutations
    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = with_csrf(Request::post(&self.url(path)))
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read_body(response).await?;
        schema::decode_mutation(status, &body)
    }
}

fn with_csrf(builder: RequestBuilder) -> RequestBuilder {
    match config::csrf_token() {
        Some(token) => builder.header(CSRF_HEADER, &token),
        None => {
            log::warn!("[Api] No {} meta tag; sending request without token", config::CSRF_META);
            builder
        }
    }
}

async fn read_body(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    Ok((status, body))
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}
