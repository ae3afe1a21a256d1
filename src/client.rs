use std::collections::HashMap;

use tracing::debug;

use crate::config::{ApiOptions, ResolvedConfig};
use crate::error::{ApiError, ConfigError};
use crate::request_client::{RequestClient, RequestOptions};
use crate::response::ApiResponse;
use crate::routes::{self, BoundRoute, Verb};
use crate::template::RouteParams;

/// Client for the Enlighted Energy Manager REST API.
///
/// Construction validates the options, builds the HTTP transport and
/// compiles the operation table, so a client that exists can dispatch any
/// bound operation. All facility CRUD goes through [`invoke`] by operation
/// name; the lighting operations have dedicated methods
/// ([`adjust_lights`] and [`get_all_lights_on_floor`]) because they shape
/// their own paths, query strings and XML bodies.
///
/// [`invoke`]: EnlightedApi::invoke
/// [`adjust_lights`]: EnlightedApi::adjust_lights
/// [`get_all_lights_on_floor`]: EnlightedApi::get_all_lights_on_floor
#[derive(Debug)]
pub struct EnlightedApi {
    transport: RequestClient,
    routes: HashMap<&'static str, BoundRoute>,
    config: ResolvedConfig,
}

impl EnlightedApi {
    /// Validates `options` and builds a ready-to-dispatch client.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the origin is missing or carries no
    /// HTTP(S) scheme, when either credential is missing, or when the HTTP
    /// transport cannot be constructed.
    pub fn new(options: ApiOptions) -> Result<Self, ConfigError> {
        let config = options.validate()?;
        let transport = RequestClient::new(&config)?;
        Ok(Self {
            transport,
            routes: routes::compile(),
            config,
        })
    }

    /// Scheme and authority the client was configured with.
    pub fn origin(&self) -> &str {
        &self.config.origin
    }

    /// Normalized service path, `/ems/services/org/` unless overridden.
    pub fn base_path(&self) -> &str {
        &self.config.base_path
    }

    /// Origin and base path pre-joined; every request path lands on this.
    pub fn base_url(&self) -> &str {
        self.transport.base()
    }

    /// Whether TLS certificates are verified.
    pub fn strict_ssl(&self) -> bool {
        self.config.strict_ssl
    }

    /// The recorded JSON preference. Advisory; no request header is derived
    /// from it.
    pub fn json_preferred(&self) -> bool {
        self.config.json_preferred
    }

    /// Names of every bound operation, in no particular order.
    pub fn operation_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }

    pub(crate) fn transport(&self) -> &RequestClient {
        &self.transport
    }

    /// Dispatches the bound operation `name`.
    ///
    /// The operation's URL template is resolved against `params` (missing
    /// placeholders become empty segments), joined onto the base URL and
    /// issued with the operation's verb and the per-call `options`.
    ///
    /// # Errors
    ///
    /// [`ApiError::UnknownOperation`] when `name` is not bound; otherwise
    /// the usual transport and status failures.
    pub async fn invoke(
        &self,
        name: &str,
        params: &RouteParams,
        options: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        let route = self
            .routes
            .get(name)
            .ok_or_else(|| ApiError::UnknownOperation(name.to_string()))?;
        let path = route.resolve_path(params);
        debug!(operation = name, verb = %route.verb, path = %path, "invoking operation");
        self.transport.request(route.verb, &path, options).await
    }

    /// Issues a GET against `path` relative to the base URL.
    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        self.transport.request(Verb::Get, path, options).await
    }

    /// Issues a POST against `path` relative to the base URL.
    pub async fn post(&self, path: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        self.transport.request(Verb::Post, path, options).await
    }

    /// Issues a PUT against `path` relative to the base URL.
    pub async fn put(&self, path: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        self.transport.request(Verb::Put, path, options).await
    }

    /// Issues a PATCH against `path` relative to the base URL.
    pub async fn patch(&self, path: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        self.transport.request(Verb::Patch, path, options).await
    }

    /// Issues a DELETE against `path` relative to the base URL. Note that
    /// the bound `delete*` operations ride on POST instead; this verb is for
    /// ad hoc calls.
    pub async fn delete(&self, path: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        self.transport.request(Verb::Delete, path, options).await
    }

    /// Issues a HEAD against `path` relative to the base URL.
    pub async fn head(&self, path: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        self.transport.request(Verb::Head, path, options).await
    }

    /// Issues an OPTIONS against `path` relative to the base URL.
    pub async fn options(&self, path: &str, options: RequestOptions) -> Result<ApiResponse, ApiError> {
        self.transport.request(Verb::Options, path, options).await
    }
}
