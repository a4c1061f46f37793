//! Station identifiers, raw directory records and the resolved station metadata.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a physical monitoring station.
pub type StationId = u64;

/// One entry of the station directory, as served by the `station/findAll` endpoint.
///
/// The live directory serves coordinates as strings (`"50.057678"`); plain
/// JSON numbers are accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub id: StationId,
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub gegr_lat: f64,
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub gegr_lon: f64,
    pub station_name: String,
}

/// Location and display name of the station a client is bound to.
///
/// Resolved once per client; stations do not move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationMetadata {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Human readable station name, e.g. "Kraków, Aleja Krasińskiego".
    pub name: String,
}

impl From<&StationRecord> for StationMetadata {
    fn from(record: &StationRecord) -> Self {
        Self {
            latitude: record.gegr_lat,
            longitude: record.gegr_lon,
            name: record.station_name.clone(),
        }
    }
}

fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct CoordinateVisitor;

    impl Visitor<'_> for CoordinateVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a coordinate as a number or a numeric string")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(CoordinateVisitor)
}
