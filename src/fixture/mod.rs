mod adjust_post;
mod floor_list_get;
pub(crate) mod xml;

use std::str::FromStr;

use thiserror::Error;

/// Dim duration in minutes applied when the caller passes none (or zero).
pub(crate) const DEFAULT_DIM_MINUTES: u32 = 60;

/// One controllable light as reported by a floor listing.
///
/// `lightlevel` is the output level in percent at the time of the listing.
/// Commands sent back to the service carry only `id` and `name`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fixture {
    pub id: u32,
    pub name: String,
    pub lightlevel: u8,
}

/// Target state for [`adjust_lights`](crate::EnlightedApi::adjust_lights).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightLevel {
    /// Return the fixtures to automatic daylighting control.
    Auto,
    /// Hold an absolute output level in percent.
    Dim(u8),
}

impl FromStr for LightLevel {
    type Err = ParseLightLevelError;

    /// Accepts `auto` in any letter case, or a bare percentage.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(LightLevel::Auto);
        }
        s.parse::<u8>()
            .map(LightLevel::Dim)
            .map_err(|_| ParseLightLevelError(s.to_string()))
    }
}

/// A light-level token that is neither `auto` nor a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("light level must be `auto` or a dim percentage, got `{0}`")]
pub struct ParseLightLevelError(pub String);
