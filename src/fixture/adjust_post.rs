use chrono::Utc;
use tracing::debug;

use crate::client::EnlightedApi;
use crate::error::ApiError;
use crate::fixture::{xml, Fixture, LightLevel, DEFAULT_DIM_MINUTES};
use crate::request_client::RequestOptions;
use crate::routes::Verb;

/// Switches the listed fixtures back to automatic control.
const AUTO_MODE_PATH: &str = "/services/org/fixture/op/mode/AUTO/";

impl EnlightedApi {
    /// Sends a lighting command for `lights`.
    ///
    /// [`LightLevel::Dim`] holds the given output percentage for `duration`
    /// minutes; [`LightLevel::Auto`] returns the fixtures to automatic
    /// control. A missing or zero duration falls back to 60 minutes. The
    /// fixtures travel in the XML command envelope on both paths, projected
    /// down to id and name.
    ///
    /// # Returns
    ///
    /// `true` when the service accepted the POST, `false` on any failure.
    /// The cause is not surfaced to the caller; it is only logged at debug
    /// level.
    pub async fn adjust_lights(
        &self,
        lights: &[Fixture],
        level: LightLevel,
        duration: Option<u32>,
    ) -> bool {
        let now = Utc::now().timestamp_millis();
        let minutes = duration.filter(|&m| m != 0).unwrap_or(DEFAULT_DIM_MINUTES);
        let path = match level {
            LightLevel::Auto => AUTO_MODE_PATH.to_string(),
            LightLevel::Dim(percent) => {
                format!("/services/org/fixture/op/dim/abs/{percent}/{minutes}/")
            }
        };
        match self.post_adjustment(&path, lights, now).await {
            Ok(()) => true,
            Err(err) => {
                debug!(error = %err, path = %path, "light adjustment failed");
                false
            }
        }
    }

    async fn post_adjustment(
        &self,
        path: &str,
        lights: &[Fixture],
        ts: i64,
    ) -> Result<(), ApiError> {
        let body = xml::encode_fixture_refs(lights)?;
        let options = RequestOptions::new().query("ts", ts).text_body(body);
        self.transport().request(Verb::Post, path, options).await?;
        Ok(())
    }
}
