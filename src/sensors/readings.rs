//! Fetches the most recent measurement of every cataloged sensor.

use crate::error::{GiosError, IncompleteDataError};
use crate::sensors::catalog::{CatalogEntry, SensorCatalog};
use crate::transport::endpoints::Endpoints;
use crate::transport::Transport;
use crate::types::sensor::{RawReading, ReadingsResponse, SensorEntry, SensorId};
use crate::types::snapshot::RefreshWarning;
use crate::utils::fetch_as;
use chrono::NaiveDateTime;
use futures_util::{stream, StreamExt, TryStreamExt};
use log::{debug, warn};
use std::collections::BTreeMap;

/// How many of the newest readings are considered. The service only
/// back-fills one interval, so anything older is stale.
pub const READING_SCAN_DEPTH: usize = 2;

const READING_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What a refresh does when a sensor has no recent value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadingPolicy {
    /// The whole cycle fails and the snapshot is cleared. A snapshot is
    /// either complete as of one refresh or absent.
    #[default]
    Strict,
    /// Only that pollutant's value is left unset; the cycle reports a warning.
    Lenient,
}

/// A non-null measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub value: f64,
    pub measured_at: Option<NaiveDateTime>,
}

/// Picks the newest non-null value among the first [`READING_SCAN_DEPTH`] entries.
///
/// # Examples
///
/// ```
/// use gios::{latest_reading, RawReading};
///
/// let values = vec![
///     RawReading { date: Some("2024-03-01 13:00:00".into()), value: None },
///     RawReading { date: Some("2024-03-01 12:00:00".into()), value: Some(10.0) },
/// ];
/// assert_eq!(latest_reading(&values).map(|r| r.value), Some(10.0));
/// ```
pub fn latest_reading(values: &[RawReading]) -> Option<Reading> {
    values
        .iter()
        .take(READING_SCAN_DEPTH)
        .find_map(|raw| {
            raw.value.map(|value| Reading {
                value,
                measured_at: raw
                    .date
                    .as_deref()
                    .and_then(|date| NaiveDateTime::parse_from_str(date, READING_DATE_FORMAT).ok()),
            })
        })
}

/// Retrieves the latest readings of one sensor and picks the usable one.
pub async fn fetch_reading<T: Transport>(
    transport: &T,
    endpoints: &Endpoints,
    sensor_id: SensorId,
) -> Result<Option<Reading>, GiosError> {
    let response: ReadingsResponse = fetch_as(transport, &endpoints.readings(sensor_id)).await?;
    debug!("Sensor {} data retrieved", sensor_id);
    Ok(latest_reading(&response.values))
}

/// Fetches a reading for every sensor of `catalog`, at most `concurrency`
/// requests at a time, and writes them into `entries`.
///
/// The first transport error aborts the stage. Sensors without a recent
/// value, including those whose readings body does not decode, are handled
/// according to `policy`.
pub(crate) async fn fill_readings<T: Transport>(
    transport: &T,
    endpoints: &Endpoints,
    catalog: &SensorCatalog,
    entries: &mut BTreeMap<String, SensorEntry>,
    policy: ReadingPolicy,
    concurrency: usize,
) -> Result<Vec<RefreshWarning>, GiosError> {
    let readings: Vec<(&CatalogEntry, Option<Reading>)> = stream::iter(catalog.iter())
        .map(|sensor| async move {
            match fetch_reading(transport, endpoints, sensor.sensor_id).await {
                Ok(reading) => Ok((sensor, reading)),
                Err(GiosError::IncompleteData(IncompleteDataError::Malformed { url, source })) => {
                    debug!("Unreadable readings at {}: {}", url, source);
                    Ok((sensor, None))
                }
                Err(e) => Err(e),
            }
        })
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    let mut warnings = Vec::new();
    for (sensor, reading) in readings {
        match reading {
            Some(reading) => {
                if let Some(entry) = entries.get_mut(&sensor.code) {
                    entry.value = Some(reading.value);
                    entry.measured_at = reading.measured_at;
                }
            }
            None => match policy {
                ReadingPolicy::Strict => {
                    warn!(
                        "No value for {} sensor {} in GIOS data, dropping this refresh",
                        sensor.code, sensor.sensor_id
                    );
                    return Err(IncompleteDataError::MissingReading {
                        code: sensor.code.clone(),
                        sensor_id: sensor.sensor_id,
                    }
                    .into());
                }
                ReadingPolicy::Lenient => {
                    warn!("No value for {} sensor {} in GIOS data", sensor.code, sensor.sensor_id);
                    warnings.push(RefreshWarning::MissingReading {
                        code: sensor.code.clone(),
                    });
                }
            },
        }
    }
    Ok(warnings)
}
