// SPDX-License-Identifier: MPL-2.0
//! Gemini REST adapter implementing the [`EditGateway`] port trait.
//!
//! Edits are `POST {endpoint}/v1beta/models/{model}:generateContent` calls
//! carrying each image as an inline part followed by the instruction text.
//! The connection check fetches the metadata of a lightweight model.
//!
//! [`EditGateway`]: crate::application::port::EditGateway

pub mod wire;

use crate::application::port::{EditGateway, EditRequest, GatewayError, InlineImage};
use crate::config::{GatewayConfig, API_KEY_ENV_VARS};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::{Client, Response};
use std::sync::Arc;
use wire::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

const USER_AGENT: &str = concat!("PhotoPro/", env!("CARGO_PKG_VERSION"));

/// Returns the first non-empty API key found in [`API_KEY_ENV_VARS`].
#[must_use]
pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

#[derive(Debug)]
struct Endpoints {
    generate: String,
    check: String,
}

/// Gateway backed by the Generative Language REST API.
#[derive(Debug, Clone)]
pub struct GeminiGateway {
    client: Client,
    endpoints: Arc<Endpoints>,
    api_key: Option<Arc<str>>,
}

impl GeminiGateway {
    /// Builds a gateway from config and an optional key.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Network`] if the HTTP client cannot be built
    /// (e.g. TLS backend initialisation failure).
    pub fn new(config: &GatewayConfig, api_key: Option<String>) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let base = config.endpoint();
        let endpoints = Endpoints {
            generate: format!("{base}/v1beta/models/{}:generateContent", config.model()),
            check: format!("{base}/v1beta/models/{}", config.check_model()),
        };

        Ok(Self {
            client,
            endpoints: Arc::new(endpoints),
            api_key: api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty())
                .map(Arc::from),
        })
    }

    /// Builds a gateway using the key found in the environment.
    ///
    /// # Errors
    ///
    /// See [`GeminiGateway::new`].
    pub fn from_env(config: &GatewayConfig) -> Result<Self, GatewayError> {
        Self::new(config, api_key_from_env())
    }
}

impl EditGateway for GeminiGateway {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn execute(&self, request: EditRequest) -> BoxFuture<'static, Result<InlineImage, GatewayError>> {
        let client = self.client.clone();
        let endpoints = Arc::clone(&self.endpoints);
        let api_key = self.api_key.clone();

        async move {
            let key = api_key.ok_or(GatewayError::MissingCredential)?;
            let body = GenerateContentRequest::image_edit(
                request
                    .images()
                    .map(|img| (img.mime_type.as_str(), img.data.as_str())),
                &request.instruction,
            );

            let response = client
                .post(&endpoints.generate)
                .header(API_KEY_HEADER, &*key)
                .json(&body)
                .send()
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "gateway request failed");
                    GatewayError::Network(e.to_string())
                })?;
            let response = ensure_success(response).await?;

            let payload: GenerateContentResponse = response.json().await.map_err(|e| {
                tracing::error!(error = %e, "gateway response is not valid JSON");
                GatewayError::InvalidPayload(e.to_string())
            })?;

            let blob = payload.into_first_image().ok_or_else(|| {
                tracing::warn!("gateway response carried no image part");
                GatewayError::NoImageInResponse
            })?;
            Ok(InlineImage {
                mime_type: blob.mime_type,
                data: blob.data,
            })
        }
        .boxed()
    }

    fn check_connection(&self) -> BoxFuture<'static, Result<(), GatewayError>> {
        let client = self.client.clone();
        let endpoints = Arc::clone(&self.endpoints);
        let api_key = self.api_key.clone();

        async move {
            let key = api_key.ok_or(GatewayError::MissingCredential)?;
            let response = client
                .get(&endpoints.check)
                .header(API_KEY_HEADER, &*key)
                .send()
                .await
                .map_err(|e| GatewayError::Network(e.to_string()))?;
            ensure_success(response).await?;
            Ok(())
        }
        .boxed()
    }
}

/// Maps non-success statuses to [`GatewayError::Remote`], extracting the
/// service's error message when the body carries one.
async fn ensure_success(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .ok()
        .and_then(|envelope| envelope.error.message.or(envelope.error.status));
    tracing::error!(status = status.as_u16(), ?message, "gateway returned an error");
    Err(GatewayError::Remote {
        status: status.as_u16(),
        message,
    })
}
