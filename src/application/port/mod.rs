// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only plain data types, so the editor session can be driven
//! by a real network adapter or by a test double.
//!
//! # Available Ports
//!
//! - [`gateway`]: Remote generative-image editing
//!
//! # Example
//!
//! ```ignore
//! use photopro::application::port::{EditGateway, EditRequest, InlineImage};
//!
//! async fn send(gateway: &dyn EditGateway, png_b64: String) {
//!     let request = EditRequest::new(InlineImage::png(png_b64), "Make the sky pop.");
//!     let _ = gateway.execute(request).await;
//! }
//! ```

pub mod gateway;

pub use gateway::{EditGateway, EditRequest, GatewayError, InlineImage};
