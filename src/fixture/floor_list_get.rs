use chrono::Utc;

use crate::client::EnlightedApi;
use crate::error::ApiError;
use crate::fixture::{xml, Fixture};
use crate::request_client::RequestOptions;
use crate::routes::Verb;

impl EnlightedApi {
    /// Fetches every fixture on the given floor.
    ///
    /// The service answers this endpoint in XML regardless of any JSON
    /// preference; the document is decoded here and each fixture projected
    /// to id, name and current light level, in document order.
    ///
    /// # Errors
    ///
    /// Unlike [`adjust_lights`](EnlightedApi::adjust_lights), transport,
    /// status and decode failures all propagate to the caller.
    pub async fn get_all_lights_on_floor(&self, floor: u32) -> Result<Vec<Fixture>, ApiError> {
        let path = format!("/services/org/fixture/list/floor/{floor}/");
        let options = floor_listing_query(Utc::now().timestamp_millis());
        let response = self.transport().request(Verb::Get, &path, options).await?;
        xml::parse_floor_listing(response.text())
    }
}

/// Query string for the floor listing. `ts` and `transactionId` carry the
/// same timestamp.
fn floor_listing_query(now: i64) -> RequestOptions {
    RequestOptions::new()
        .query("ts", now)
        .query("transactionId", now)
        .query("propertyType", "floor")
        .query("propertyMode", "FLOORPLAN")
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use crate::client::EnlightedApi;
    use crate::config::ApiOptions;
    use crate::error::ApiError;
    use crate::fixture::Fixture;

    fn api_for(server: &MockServer) -> EnlightedApi {
        EnlightedApi::new(
            ApiOptions::new()
                .origin(server.base_url())
                .user("user")
                .pass("pass"),
        )
        .unwrap()
    }

    #[test]
    fn cache_busting_parameters_share_one_timestamp() {
        let options = super::floor_listing_query(1_724_600_000_123);
        let params: std::collections::HashMap<&str, &str> = options
            .query
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        let ts: i64 = params["ts"].parse().unwrap();
        let transaction_id: i64 = params["transactionId"].parse().unwrap();
        assert_eq!(ts, transaction_id);
        assert_eq!(ts, 1_724_600_000_123);
        assert_eq!(params["propertyType"], "floor");
        assert_eq!(params["propertyMode"], "FLOORPLAN");
        assert_eq!(params.len(), 4);
    }

    #[tokio::test]
    async fn lists_the_floor_with_the_fixed_query_parameters() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ems/services/org/services/org/fixture/list/floor/3/")
                .query_param("propertyType", "floor")
                .query_param("propertyMode", "FLOORPLAN")
                .query_param_exists("ts")
                .query_param_exists("transactionId");
            then.status(200).body(
                "<fixtures>\n  <fixture>\n    <id>4</id>\n    <name>aisle 1</name>\n    <lightlevel>75</lightlevel>\n  </fixture>\n  <fixture>\n    <id>5</id>\n    <name>aisle 2</name>\n    <lightlevel>20</lightlevel>\n  </fixture>\n</fixtures>",
            );
        });

        let api = api_for(&server);
        let lights = api.get_all_lights_on_floor(3).await.unwrap();

        mock.assert();
        assert_eq!(
            lights,
            vec![
                Fixture {
                    id: 4,
                    name: "aisle 1".to_string(),
                    lightlevel: 75
                },
                Fixture {
                    id: 5,
                    name: "aisle 2".to_string(),
                    lightlevel: 20
                },
            ]
        );
    }

    #[tokio::test]
    async fn a_floor_with_one_fixture_still_yields_a_list() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/ems/services/org/services/org/fixture/list/floor/12/");
            then.status(200).body(
                "<fixtures><fixture><id>9</id><name>lobby</name><lightlevel>100</lightlevel></fixture></fixtures>",
            );
        });

        let api = api_for(&server);
        let lights = api.get_all_lights_on_floor(12).await.unwrap();
        assert_eq!(lights.len(), 1);
        assert_eq!(lights[0].name, "lobby");
    }

    #[tokio::test]
    async fn status_failures_propagate_unlike_adjustment() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/ems/services/org/services/org/fixture/list/floor/3/");
            then.status(404).body("no such floor");
        });

        let api = api_for(&server);
        let err = api.get_all_lights_on_floor(3).await.unwrap_err();
        match err {
            ApiError::RemoteStatus { status, body } => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(body, "no such floor");
            }
            other => panic!("expected status error, got {other}"),
        }
    }

    #[tokio::test]
    async fn undecodable_listings_propagate_as_decode_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/ems/services/org/services/org/fixture/list/floor/3/");
            then.status(200).body("<fixtures><fixture><id>not-a-number</id>");
        });

        let api = api_for(&server);
        let err = api.get_all_lights_on_floor(3).await.unwrap_err();
        assert!(matches!(err, ApiError::XmlDecode(_)), "got {err}");
    }
}
