use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;

/// Service path used when the caller does not override `base_url`.
pub(crate) const DEFAULT_BASE_PATH: &str = "/ems/services/org/";
/// Sent with every request unless a per-call header replaces it.
pub(crate) const USER_AGENT: &str = "EnlightedRestApiClient";

static ORIGIN_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/]+").unwrap());

/// Construction options for [`EnlightedApi`](crate::EnlightedApi).
///
/// Only `origin`, `user` and `pass` are required. Everything else has a
/// service-appropriate default:
///
/// ```
/// use enlighted_ems::{ApiOptions, EnlightedApi};
///
/// let api = EnlightedApi::new(
///     ApiOptions::new()
///         .origin("https://ems.example.com")
///         .user("apiuser")
///         .pass("apipass"),
/// )
/// .unwrap();
/// assert_eq!(api.base_url(), "https://ems.example.com/ems/services/org/");
/// ```
#[derive(Clone, Default)]
pub struct ApiOptions {
    origin: Option<String>,
    base_url: Option<String>,
    strict_ssl: Option<bool>,
    user: Option<String>,
    pass: Option<String>,
    json_preferred: Option<bool>,
}

// Debug output keeps the password out of logs.
impl fmt::Debug for ApiOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiOptions")
            .field("origin", &self.origin)
            .field("base_url", &self.base_url)
            .field("strict_ssl", &self.strict_ssl)
            .field("user", &self.user)
            .field("pass", &self.pass.as_ref().map(|_| "<redacted>"))
            .field("json_preferred", &self.json_preferred)
            .finish()
    }
}

impl ApiOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheme and authority of the Energy Manager deployment, for example
    /// `https://ems.example.com`. Required.
    #[must_use]
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Service path joined onto the origin. Normalized to carry exactly one
    /// leading and one trailing slash. Defaults to `/ems/services/org/`.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Whether TLS certificates are verified. Defaults to `true`; pass
    /// `false` for appliances with self-signed certificates.
    #[must_use]
    pub fn strict_ssl(mut self, strict_ssl: bool) -> Self {
        self.strict_ssl = Some(strict_ssl);
        self
    }

    /// Username for HTTP Basic authentication. Required.
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Password for HTTP Basic authentication. Required.
    #[must_use]
    pub fn pass(mut self, pass: impl Into<String>) -> Self {
        self.pass = Some(pass.into());
        self
    }

    /// Records a preference for JSON responses. Advisory only; no request
    /// header is derived from it. Defaults to `true`.
    #[must_use]
    pub fn json_preferred(mut self, json_preferred: bool) -> Self {
        self.json_preferred = Some(json_preferred);
        self
    }

    /// Validates the options and resolves every default.
    ///
    /// Checks run in a fixed order so a caller missing several fields always
    /// sees the same first error: origin presence, origin scheme, then user
    /// and pass.
    pub(crate) fn validate(self) -> Result<ResolvedConfig, ConfigError> {
        let origin = self
            .origin
            .filter(|origin| !origin.is_empty())
            .ok_or(ConfigError::MissingOrigin)?;
        if !ORIGIN_SCHEME.is_match(&origin) {
            return Err(ConfigError::InvalidOriginScheme(origin));
        }
        let base_path = match self.base_url.filter(|base| !base.is_empty()) {
            Some(raw) => normalize_base_path(&raw),
            None => DEFAULT_BASE_PATH.to_string(),
        };
        let user = self
            .user
            .filter(|user| !user.is_empty())
            .ok_or(ConfigError::MissingUser)?;
        let pass = self
            .pass
            .filter(|pass| !pass.is_empty())
            .ok_or(ConfigError::MissingPass)?;
        let base = format!("{}{base_path}", origin.trim_end_matches('/'));
        Ok(ResolvedConfig {
            origin,
            base_path,
            base,
            strict_ssl: self.strict_ssl.unwrap_or(true),
            user,
            pass,
            json_preferred: self.json_preferred.unwrap_or(true),
        })
    }
}

/// Ensures exactly one leading and one trailing slash.
fn normalize_base_path(raw: &str) -> String {
    let mut path = String::from(raw);
    if !path.starts_with('/') {
        path.insert(0, '/');
    }
    if !path.ends_with('/') {
        path.push('/');
    }
    path
}

/// Options after validation, with every default applied.
#[derive(Clone)]
pub(crate) struct ResolvedConfig {
    pub(crate) origin: String,
    pub(crate) base_path: String,
    /// `origin` and `base_path` pre-joined; every request path lands on this.
    pub(crate) base: String,
    pub(crate) strict_ssl: bool,
    pub(crate) user: String,
    pub(crate) pass: String,
    pub(crate) json_preferred: bool,
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("origin", &self.origin)
            .field("base_path", &self.base_path)
            .field("base", &self.base)
            .field("strict_ssl", &self.strict_ssl)
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .field("json_preferred", &self.json_preferred)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ApiOptions {
        ApiOptions::new()
            .origin("https://ems.example.com")
            .user("apiuser")
            .pass("apipass")
    }

    #[test]
    fn resolves_defaults() {
        let config = minimal().validate().unwrap();
        assert_eq!(config.origin, "https://ems.example.com");
        assert_eq!(config.base_path, "/ems/services/org/");
        assert_eq!(config.base, "https://ems.example.com/ems/services/org/");
        assert!(config.strict_ssl);
        assert!(config.json_preferred);
    }

    #[test]
    fn origin_is_required_and_must_not_be_empty() {
        let missing = ApiOptions::new().user("u").pass("p").validate();
        assert!(matches!(missing, Err(ConfigError::MissingOrigin)));
        let empty = ApiOptions::new().origin("").user("u").pass("p").validate();
        assert!(matches!(empty, Err(ConfigError::MissingOrigin)));
    }

    #[test]
    fn origin_must_carry_an_http_scheme() {
        let result = minimal().origin("ems.example.com").validate();
        match result {
            Err(ConfigError::InvalidOriginScheme(origin)) => {
                assert_eq!(origin, "ems.example.com");
            }
            other => panic!("expected scheme rejection, got {other:?}"),
        }
        assert!(matches!(
            minimal().origin("ftp://ems.example.com").validate(),
            Err(ConfigError::InvalidOriginScheme(_))
        ));
    }

    #[test]
    fn credentials_are_required() {
        let no_user = ApiOptions::new()
            .origin("http://ems.local")
            .pass("p")
            .validate();
        assert!(matches!(no_user, Err(ConfigError::MissingUser)));
        let no_pass = ApiOptions::new()
            .origin("http://ems.local")
            .user("u")
            .validate();
        assert!(matches!(no_pass, Err(ConfigError::MissingPass)));
    }

    #[test]
    fn base_path_is_normalized_to_slash_wrapped_form() {
        for raw in ["org", "/org", "org/", "/org/"] {
            let config = minimal().base_url(raw).validate().unwrap();
            assert_eq!(config.base_path, "/org/", "raw form {raw:?}");
            assert_eq!(config.base, "https://ems.example.com/org/");
        }
    }

    #[test]
    fn empty_base_url_falls_back_to_the_default() {
        let config = minimal().base_url("").validate().unwrap();
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
    }

    #[test]
    fn trailing_origin_slash_does_not_double_up() {
        let config = minimal().origin("https://ems.example.com/").validate().unwrap();
        assert_eq!(config.base, "https://ems.example.com/ems/services/org/");
    }

    #[test]
    fn explicit_false_flags_are_honored() {
        let config = minimal()
            .strict_ssl(false)
            .json_preferred(false)
            .validate()
            .unwrap();
        assert!(!config.strict_ssl);
        assert!(!config.json_preferred);
    }

    #[test]
    fn debug_output_redacts_the_password() {
        let options = minimal();
        let rendered = format!("{options:?}");
        assert!(!rendered.contains("apipass"), "{rendered}");
        assert!(rendered.contains("<redacted>"));

        let config = options.validate().unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("apipass"), "{rendered}");
        assert!(rendered.contains("apiuser"));
    }
}
