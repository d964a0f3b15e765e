// SPDX-License-Identifier: MPL-2.0
//! `photopro` is a lightweight photo editor built with the Iced GUI framework.
//!
//! It applies live filters, crops to a ratio, marks regions on a mask for
//! object removal and sends images to a generative image service for
//! AI-assisted edits and upscaling.
//!
//! # Layers
//!
//! - [`domain`] - pure editing types (filters, crop ratios, modes, newtypes)
//! - [`media`] - pixel work: decode, encode, crop, filter chain
//! - [`workspace`] - loaded image, mask layer and view transform
//! - [`application`] - editor session controller and the gateway port
//! - [`infrastructure`] - Gemini REST adapter
//! - [`config`], [`i18n`] - settings file and Fluent localization
//! - [`ui`], [`app`] - Iced views and the application loop

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
pub mod workspace;

#[cfg(test)]
pub mod test_utils;
