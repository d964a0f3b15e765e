// SPDX-License-Identifier: MPL-2.0
//! Pixel-level media handling: decoding, encoding, cropping and filter rendering.
//!
//! Everything here is stateless and works on owned [`image_rs::RgbaImage`]
//! buffers; the workspace decides when to call it.

pub mod filter;
pub mod image;

pub use filter::{render, FilterChain, FilterOp};
pub use image::{decode, downscale_to_fit, encode_data_uri, encode_png};
