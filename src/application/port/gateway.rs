// SPDX-License-Identifier: MPL-2.0
//! External edit gateway port.
//!
//! This module defines the [`EditGateway`] trait: the only door through
//! which images leave the editor. An adapter takes one or two encoded images
//! plus an instruction, talks to a remote generative-image service and
//! returns a replacement image.
//!
//! # Design Notes
//!
//! - Futures are boxed and `'static` so callers can hand them to `iced::Task`
//! - Credential checks are synchronous and happen before any I/O
//! - Errors are [`GatewayError`] values; adapters log details themselves

use futures_util::future::BoxFuture;

pub use crate::error::GatewayError;

/// Base64 payload tagged with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// Base64 (standard alphabet) encoded bytes, without a data URI prefix.
    pub data: String,
}

impl InlineImage {
    /// Wraps base64 PNG data.
    #[must_use]
    pub fn png(data: String) -> Self {
        Self {
            mime_type: "image/png".to_string(),
            data,
        }
    }
}

/// One request to the gateway: the image to edit, an optional second
/// image for context, and what to do with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub image: InlineImage,
    pub reference: Option<InlineImage>,
    pub instruction: String,
}

impl EditRequest {
    #[must_use]
    pub fn new(image: InlineImage, instruction: impl Into<String>) -> Self {
        Self {
            image,
            reference: None,
            instruction: instruction.into(),
        }
    }

    /// Attaches the second image, sent after the first.
    #[must_use]
    pub fn with_reference(mut self, reference: InlineImage) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Images in wire order.
    pub fn images(&self) -> impl Iterator<Item = &InlineImage> {
        std::iter::once(&self.image).chain(self.reference.as_ref())
    }
}

/// Remote image editing service.
pub trait EditGateway: Send + Sync {
    /// Returns true if a credential is available. No request may be attempted otherwise.
    fn is_configured(&self) -> bool;

    /// Sends one edit request and resolves to the returned image.
    fn execute(&self, request: EditRequest) -> BoxFuture<'static, Result<InlineImage, GatewayError>>;

    /// Performs a lightweight authenticated call to verify the credential.
    fn check_connection(&self) -> BoxFuture<'static, Result<(), GatewayError>>;
}
