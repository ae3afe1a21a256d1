use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A successful (2xx) response: the status and the raw body text.
///
/// Bodies are kept as text because the service answers some operations with
/// JSON and others with XML. [`json`](ApiResponse::json) decodes on demand.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, body: String) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    pub fn into_text(self) -> String {
        self.body
    }

    /// Decodes the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
