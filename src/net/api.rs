//! REST API helpers for the whiteboard backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying
//! `Authorization: Bearer <token>`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Pages talk to the backend through the [`CanvasApi`] trait so the dashboard
//! orchestration in `state::dashboard` can be exercised against an in-memory
//! backend in tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{Canvas, UserProfile};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use crate::config::ApiConfig;
#[cfg(feature = "hydrate")]
use super::types::{CreateCanvasRequest, ProfileEnvelope, ShareCanvasRequest};

pub const PROFILE_PATH: &str = "/api/users/profile";
pub const CANVAS_COLLECTION_PATH: &str = "/api/canvas";

/// Remote operations the dashboard needs from the backend.
#[async_trait(?Send)]
pub trait CanvasApi {
    /// `GET /api/users/profile`.
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError>;
    /// `GET /api/canvas`.
    async fn list_canvases(&self, token: &str) -> Result<Vec<Canvas>, ApiError>;
    /// `POST /api/canvas` with `{ name }`. The created document is discarded.
    async fn create_canvas(&self, token: &str, name: &str) -> Result<(), ApiError>;
    /// `PUT /api/canvas/share/{id}` with `{ shared_with }`.
    async fn share_canvas(&self, token: &str, canvas_id: &str, email: &str) -> Result<(), ApiError>;
    /// `DELETE /api/canvas/{id}`.
    async fn delete_canvas(&self, token: &str, canvas_id: &str) -> Result<(), ApiError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn canvas_endpoint(canvas_id: &str) -> String {
    format!("{CANVAS_COLLECTION_PATH}/{canvas_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn share_endpoint(canvas_id: &str) -> String {
    format!("{CANVAS_COLLECTION_PATH}/share/{canvas_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
/// Extract a non-empty `message` from an error response body.
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
}

/// [`CanvasApi`] backed by browser `fetch` through `gloo-net`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer_header, server_message};

    pub(super) fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder
            .header("Authorization", &bearer_header(token))
            .header("Accept", "application/json")
    }

    /// Send `request` and turn non-2xx statuses into [`ApiError::Rejected`].
    pub(super) async fn dispatch(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let message = resp.text().await.ok().and_then(|body| server_message(&body));
        Err(ApiError::Rejected { status, message })
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Success bodies we ignore must still be JSON.
    pub(super) async fn expect_json(resp: Response) -> Result<(), ApiError> {
        decode::<serde_json::Value>(resp).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl CanvasApi for HttpApi {
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(PROFILE_PATH);
            let builder = transport::authorized(gloo_net::http::Request::get(&url), token);
            let resp = transport::dispatch(builder.build()).await?;
            let envelope: ProfileEnvelope = transport::decode(resp).await?;
            Ok(envelope.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn list_canvases(&self, token: &str) -> Result<Vec<Canvas>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(CANVAS_COLLECTION_PATH);
            let builder = transport::authorized(gloo_net::http::Request::get(&url), token);
            let resp = transport::dispatch(builder.build()).await?;
            transport::decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    async fn create_canvas(&self, token: &str, name: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(CANVAS_COLLECTION_PATH);
            let builder = transport::authorized(gloo_net::http::Request::post(&url), token);
            let resp = transport::dispatch(builder.json(&CreateCanvasRequest { name })).await?;
            transport::expect_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, name);
            Err(ApiError::Unavailable)
        }
    }

    async fn share_canvas(&self, token: &str, canvas_id: &str, email: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(&share_endpoint(canvas_id));
            let builder = transport::authorized(gloo_net::http::Request::put(&url), token);
            let body = ShareCanvasRequest { shared_with: email };
            let resp = transport::dispatch(builder.json(&body)).await?;
            transport::expect_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, canvas_id, email);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_canvas(&self, token: &str, canvas_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(&canvas_endpoint(canvas_id));
            let builder = transport::authorized(gloo_net::http::Request::delete(&url), token);
            let resp = transport::dispatch(builder.build()).await?;
            transport::expect_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, canvas_id);
            Err(ApiError::Unavailable)
        }
    }
}
