// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    Gateway(GatewayError),
    /// An operation needs a loaded image but the workspace is empty.
    NoImage,
    /// A gateway request is already in flight.
    Busy,
    /// The mask surface could not be captured.
    Mask(String),
}

/// Failures reported by the external edit gateway.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No API key is configured; no request was attempted.
    MissingCredential,

    /// The request never produced an HTTP response (DNS, TLS, timeout...).
    Network(String),

    /// The service answered with a non-success status.
    Remote { status: u16, message: Option<String> },

    /// The response parsed but carried no inline image part.
    NoImageInResponse,

    /// The response body or an inline payload could not be decoded.
    InvalidPayload(String),
}

impl GatewayError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GatewayError::MissingCredential => "error-gateway-missing-credential",
            GatewayError::Network(_) | GatewayError::Remote { .. } => "error-gateway-request",
            GatewayError::NoImageInResponse => "error-gateway-no-image",
            GatewayError::InvalidPayload(_) => "error-gateway-invalid-payload",
        }
    }
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Image(_) => "error-image-decode",
            Error::Config(_) => "error-config",
            Error::Gateway(err) => err.i18n_key(),
            Error::NoImage => "error-no-image",
            Error::Busy => "error-busy",
            Error::Mask(_) => "error-mask",
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::MissingCredential => write!(f, "API key is not configured"),
            GatewayError::Network(msg) => write!(f, "Network error: {msg}"),
            GatewayError::Remote { status, message } => match message {
                Some(msg) => write!(f, "HTTP {status}: {msg}"),
                None => write!(f, "HTTP {status}"),
            },
            GatewayError::NoImageInResponse => write!(f, "Response contained no image"),
            GatewayError::InvalidPayload(msg) => write!(f, "Invalid response payload: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Gateway(e) => write!(f, "Gateway Error: {}", e),
            Error::NoImage => write!(f, "No image loaded"),
            Error::Busy => write!(f, "Another request is still processing"),
            Error::Mask(e) => write!(f, "Mask Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<GatewayError> for Error {
    fn from(err: GatewayError) -> Self {
        Error::Gateway(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
