//! Loads the sensors installed at a station.

use crate::error::{GiosError, IncompleteDataError};
use crate::transport::endpoints::Endpoints;
use crate::transport::Transport;
use crate::types::sensor::{SensorDescriptor, SensorEntry, SensorId, AQI_CODE};
use crate::types::station::StationId;
use crate::utils::fetch_as;
use log::{debug, warn};
use std::collections::BTreeMap;

/// A sensor of the catalog: which sensor id reports which pollutant.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub code: String,
    pub sensor_id: SensorId,
    pub name: String,
}

/// Pollutant code → sensor mapping of one station.
///
/// Loaded once per client; the sensors of a station do not change between
/// refreshes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl SensorCatalog {
    /// Builds the catalog from raw descriptors. When a pollutant is listed
    /// twice the later sensor wins.
    pub fn from_descriptors(descriptors: Vec<SensorDescriptor>) -> Self {
        let mut entries = BTreeMap::new();
        for descriptor in descriptors {
            let code = descriptor.param.param_code;
            if code == AQI_CODE {
                warn!("Ignoring sensor {} reporting the reserved AQI code", descriptor.id);
                continue;
            }
            entries.insert(
                code.clone(),
                CatalogEntry {
                    code,
                    sensor_id: descriptor.id,
                    name: descriptor.param.param_name,
                },
            );
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&CatalogEntry> {
        self.entries.get(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Snapshot entries with every refreshed field unset.
    pub(crate) fn blank_entries(&self) -> BTreeMap<String, SensorEntry> {
        self.entries
            .values()
            .map(|entry| {
                (
                    entry.code.clone(),
                    SensorEntry::for_sensor(&entry.code, entry.sensor_id, &entry.name),
                )
            })
            .collect()
    }
}

/// Retrieves the sensors of `station_id`.
///
/// # Errors
///
/// [`IncompleteDataError::NoSensors`] if the station lists no sensors, or any
/// transport or decoding error of the request.
pub async fn load_catalog<T: Transport>(
    transport: &T,
    endpoints: &Endpoints,
    station_id: StationId,
) -> Result<SensorCatalog, GiosError> {
    let descriptors: Vec<SensorDescriptor> =
        fetch_as(transport, &endpoints.sensors(station_id)).await?;
    let catalog = SensorCatalog::from_descriptors(descriptors);
    if catalog.is_empty() {
        return Err(IncompleteDataError::NoSensors(station_id).into());
    }
    debug!(
        "Station {} data retrieved ({} sensors)",
        station_id,
        catalog.len()
    );
    Ok(catalog)
}
