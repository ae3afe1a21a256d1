use quick_xml::se::Serializer;
use serde::Serialize;

use crate::error::ApiError;
use crate::fixture::Fixture;

/// Outgoing projection of a fixture: commands carry id and name only.
#[derive(Debug, Serialize)]
struct FixtureRef<'a> {
    id: u32,
    name: &'a str,
}

/// `<fixtures>` command envelope.
#[derive(Debug, Serialize)]
struct FixtureCommand<'a> {
    fixture: Vec<FixtureRef<'a>>,
}

/// `<fixtures>` listing envelope. Repeated `<fixture>` children collect into
/// the vector; a document with a single child still yields one element, and
/// unknown child fields inside each fixture are ignored.
#[derive(Debug, serde::Deserialize)]
struct FixtureListing {
    #[serde(default)]
    fixture: Vec<Fixture>,
}

/// Serializes the command body the service expects: no XML declaration,
/// two-space indentation, terminating newline.
pub(crate) fn encode_fixture_refs(lights: &[Fixture]) -> Result<String, ApiError> {
    let envelope = FixtureCommand {
        fixture: lights
            .iter()
            .map(|light| FixtureRef {
                id: light.id,
                name: &light.name,
            })
            .collect(),
    };
    let mut body = String::new();
    let mut serializer = Serializer::with_root(&mut body, Some("fixtures"))?;
    serializer.indent(' ', 2);
    envelope.serialize(serializer)?;
    body.push('\n');
    Ok(body)
}

/// Decodes a floor listing document, keeping document order.
pub(crate) fn parse_floor_listing(xml: &str) -> Result<Vec<Fixture>, ApiError> {
    let listing: FixtureListing = quick_xml::de::from_str(xml)?;
    Ok(listing.fixture)
}
