//! Sensor descriptors, raw readings and the per-pollutant entries of a snapshot.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identifier of a single sensor, distinct from the station id.
pub type SensorId = u64;

/// Code of the synthetic entry holding the overall station index.
pub const AQI_CODE: &str = "AQI";

/// A sensor installed at a station (`station/sensors/{id}` endpoint).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorDescriptor {
    pub id: SensorId,
    pub param: SensorParam,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorParam {
    /// Pollutant code, e.g. "PM10" or "PM2.5".
    pub param_code: String,
    /// Human readable pollutant name, e.g. "pył zawieszony PM10".
    pub param_name: String,
}

/// Latest measurements of one sensor (`data/getData/{id}` endpoint).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReadingsResponse {
    /// Newest first. The newest value may still be `null`.
    pub values: Vec<RawReading>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawReading {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
}

/// One pollutant of a [`crate::Snapshot`].
///
/// The set of entries is fixed once the sensor catalog is loaded; `value`,
/// `measured_at` and `index` are refreshed on every cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorEntry {
    /// Pollutant code, e.g. "NO2".
    pub code: String,
    /// Sensor providing the reading. `None` for the AQI entry.
    pub sensor_id: Option<SensorId>,
    /// Display name of the pollutant.
    pub name: String,
    /// Concentration in µg/m³.
    pub value: Option<f64>,
    /// Station-local time of the reading behind `value`.
    pub measured_at: Option<NaiveDateTime>,
    /// Lower-cased index category, e.g. "dobry".
    pub index: Option<String>,
}

impl SensorEntry {
    pub(crate) fn for_sensor(code: &str, sensor_id: SensorId, name: &str) -> Self {
        Self {
            code: code.to_string(),
            sensor_id: Some(sensor_id),
            name: name.to_string(),
            value: None,
            measured_at: None,
            index: None,
        }
    }

    pub(crate) fn aqi() -> Self {
        Self {
            code: AQI_CODE.to_string(),
            sensor_id: None,
            name: AQI_CODE.to_string(),
            value: None,
            measured_at: None,
            index: None,
        }
    }

    pub fn is_aqi(&self) -> bool {
        self.code == AQI_CODE
    }
}
