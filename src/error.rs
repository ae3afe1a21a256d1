use reqwest::StatusCode;
use thiserror::Error;

/// Rejections raised while validating construction options or assembling the
/// HTTP transport. These surface synchronously from [`EnlightedApi::new`]
/// before any request is made.
///
/// [`EnlightedApi::new`]: crate::EnlightedApi::new
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No `origin` was supplied.
    #[error("must provide an origin for the hosted Energy Manager API")]
    MissingOrigin,
    /// The supplied `origin` does not begin with `http://` or `https://`.
    #[error("origin `{0}` must begin with a valid HTTP(S) protocol")]
    InvalidOriginScheme(String),
    /// No username for Basic authentication; the service has no anonymous mode.
    #[error("must provide a username for Basic authentication")]
    MissingUser,
    /// No password for Basic authentication.
    #[error("must provide a password for Basic authentication")]
    MissingPass,
    /// The underlying HTTP client could not be constructed.
    #[error("could not initialize the HTTP transport: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Failures produced by requests after successful construction.
///
/// Every operation propagates these to the caller unresolved, with one
/// exception: [`EnlightedApi::adjust_lights`] absorbs all of them into a
/// plain `false`.
///
/// [`EnlightedApi::adjust_lights`]: crate::EnlightedApi::adjust_lights
#[derive(Debug, Error)]
pub enum ApiError {
    /// A construction failure forwarded through a runtime result.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The request never produced an HTTP response (connection failure,
    /// timeout, malformed URL).
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    /// The service answered with a non-2xx status. The body is carried
    /// verbatim for diagnosis.
    #[error("remote returned HTTP {status}")]
    RemoteStatus {
        status: StatusCode,
        body: String,
    },
    /// The fixtures envelope could not be serialized to XML.
    #[error("could not encode XML request body: {0}")]
    XmlEncode(#[from] quick_xml::errors::serialize::SeError),
    /// An XML response document could not be decoded.
    #[error("could not decode XML response body: {0}")]
    XmlDecode(#[from] quick_xml::errors::serialize::DeError),
    /// A JSON response body could not be decoded into the requested type.
    #[error("could not decode JSON response body: {0}")]
    Json(#[from] serde_json::Error),
    /// The requested name is not present in the compiled route table.
    #[error("no operation named `{0}` is bound on this client")]
    UnknownOperation(String),
}
