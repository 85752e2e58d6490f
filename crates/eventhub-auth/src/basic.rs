//! `Authorization: Basic` header parsing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use http::HeaderValue;

use eventhub_core::error::AppError;

/// Credentials decoded from a Basic auth header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    /// Account email.
    pub email: String,
    /// Password (plaintext from header).
    pub password: String,
}

impl BasicCredentials {
    /// Parse an `Authorization` header value of the form
    /// `Basic base64(email:password)`.
    pub fn from_header(value: &HeaderValue) -> Result<Self, BasicAuthError> {
        let header = value.to_str().map_err(|_| BasicAuthError::InvalidHeader)?;

        let (scheme, encoded) = header
            .split_once(' ')
            .ok_or(BasicAuthError::NotBasicAuth)?;
        if !scheme.eq_ignore_ascii_case("Basic") {
            return Err(BasicAuthError::NotBasicAuth);
        }

        let decoded = BASE64
            .decode(encoded.trim())
            .map_err(|_| BasicAuthError::InvalidEncoding)?;
        let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::InvalidEncoding)?;

        let (email, password) = decoded
            .split_once(':')
            .ok_or(BasicAuthError::InvalidFormat)?;

        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    /// Render these credentials as a header value.
    #[cfg(test)]
    pub fn to_header_value(&self) -> String {
        format!(
            "Basic {}",
            BASE64.encode(format!("{}:{}", self.email, self.password))
        )
    }
}

/// Basic authentication header errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BasicAuthError {
    /// Header value is not visible ASCII.
    #[error("Invalid Authorization header")]
    InvalidHeader,

    /// A scheme other than Basic.
    #[error("Not Basic authentication")]
    NotBasicAuth,

    /// Base64 or UTF-8 decoding failed.
    #[error("Invalid base64 encoding")]
    InvalidEncoding,

    /// Decoded value has no `:` separator.
    #[error("Invalid credentials format")]
    InvalidFormat,
}

impl From<BasicAuthError> for AppError {
    fn from(e: BasicAuthError) -> Self {
        AppError::authentication(e.to_string())
    }
}
