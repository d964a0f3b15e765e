// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external services and system I/O.
//!
//! # Available Adapters
//!
//! - [`gemini`]: Remote image edits via the Gemini REST API (implements [`EditGateway`])
//!
//! [`EditGateway`]: crate::application::port::EditGateway

pub mod gemini;

pub use gemini::GeminiGateway;
