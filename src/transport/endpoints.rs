//! URL templates of the four GIOŚ REST endpoints used during a refresh.

use crate::types::sensor::SensorId;
use crate::types::station::StationId;

pub const DEFAULT_BASE_URL: &str = "https://api.gios.gov.pl/pjp-api/rest";

/// Renders endpoint URLs relative to a base URL.
///
/// The default points at the public GIOŚ service. Tests and mirrors can
/// supply their own base with [`Endpoints::new`].
///
/// # Examples
///
/// ```
/// use gios::Endpoints;
///
/// let endpoints = Endpoints::new("http://localhost:8080/rest/");
/// assert_eq!(endpoints.sensors(117), "http://localhost:8080/rest/station/sensors/117");
/// assert_eq!(endpoints.readings(92), "http://localhost:8080/rest/data/getData/92");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Directory of every station.
    pub fn stations(&self) -> String {
        format!("{}/station/findAll", self.base)
    }

    /// Sensors installed at one station.
    pub fn sensors(&self, station_id: StationId) -> String {
        format!("{}/station/sensors/{}", self.base, station_id)
    }

    /// Latest measurements of one sensor, newest first.
    pub fn readings(&self, sensor_id: SensorId) -> String {
        format!("{}/data/getData/{}", self.base, sensor_id)
    }

    /// Index levels of one station.
    pub fn indexes(&self, station_id: StationId) -> String {
        format!("{}/aqindex/getIndex/{}", self.base, station_id)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
