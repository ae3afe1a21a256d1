use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([0-9A-Za-z_]+)\}").unwrap());

/// Named values substituted into a route's URL template.
///
/// Values are stringified on insertion, so numeric identifiers can be passed
/// directly:
///
/// ```
/// use enlighted_ems::RouteParams;
///
/// let params = RouteParams::new().set("nodeType", "floor").set("nodeId", 12);
/// assert_eq!(params.get("nodeId"), Some("12"));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one parameter, replacing any earlier value under the same name.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.0.insert(name.into(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.to_string()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for RouteParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Replaces every `{name}` placeholder in `template` with the matching
/// parameter value, scanning left to right.
///
/// A placeholder with no matching parameter becomes the empty string; several
/// routes rely on that to make their trailing path segment optional. Values
/// are spliced in verbatim, without URL encoding.
pub fn resolve(template: &str, params: &RouteParams) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            params.get(&caps[1]).unwrap_or("")
        })
        .into_owned()
}
