use std::fmt;

use tracing::debug;

use crate::config::{ResolvedConfig, USER_AGENT};
use crate::error::{ApiError, ConfigError};
use crate::response::ApiResponse;
use crate::routes::Verb;

/// Per-call request settings layered onto the client-wide defaults.
///
/// Query parameters and headers accumulate in insertion order. A caller
/// header replaces the default of the same name, with one exception:
/// `Authorization` is pinned to the configured credentials and silently
/// dropped here.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<RequestBody>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one query parameter. Values are percent-encoded on dispatch.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Appends one request header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sends `body` verbatim, replacing any body set earlier.
    #[must_use]
    pub fn text_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Text(body.into()));
        self
    }

    /// Sends `body` as JSON with the matching content type, replacing any
    /// body set earlier.
    #[must_use]
    pub fn json_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    /// Raw text, sent without a derived content type.
    Text(String),
    /// Serialized as JSON with `Content-Type: application/json`.
    Json(serde_json::Value),
}

/// Thin wrapper around [`reqwest::Client`] carrying the pre-joined base URL
/// and the Basic-auth credentials applied to every request.
pub(crate) struct RequestClient {
    client: reqwest::Client,
    base: String,
    user: String,
    pass: String,
}

impl fmt::Debug for RequestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestClient")
            .field("base", &self.base)
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl RequestClient {
    pub(crate) fn new(config: &ResolvedConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if !config.strict_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }
        Ok(Self {
            client: builder.build()?,
            base: config.base.clone(),
            user: config.user.clone(),
            pass: config.pass.clone(),
        })
    }

    pub(crate) fn base(&self) -> &str {
        &self.base
    }

    /// Joins `path` onto the base URL. The base always ends in a slash, so a
    /// leading slash on `path` is trimmed rather than letting it reset the
    /// URL to the origin root.
    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    /// Issues one request and reads the full body.
    ///
    /// Non-2xx answers become [`ApiError::RemoteStatus`] with the body
    /// attached; failures before any status line become
    /// [`ApiError::Transport`].
    pub(crate) async fn request(
        &self,
        verb: Verb,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.url_for(path);
        debug!(verb = %verb, url = %url, "dispatching request");
        let mut request = self.client.request(verb.as_method(), &url);
        for (name, value) in &options.headers {
            if name.eq_ignore_ascii_case("authorization") {
                continue;
            }
            request = request.header(name.as_str(), value.as_str());
        }
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        request = match options.body {
            Some(RequestBody::Text(text)) => request.body(text),
            Some(RequestBody::Json(value)) => request.json(&value),
            None => request,
        };
        let response = request
            .basic_auth(&self.user, Some(&self.pass))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::Transport)?;
        debug!(status = %status, bytes = body.len(), "response received");
        if !status.is_success() {
            return Err(ApiError::RemoteStatus { status, body });
        }
        Ok(ApiResponse::new(status, body))
    }
}
