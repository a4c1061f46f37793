//! Resolves a station id to its location and name by scanning the station directory.

use crate::error::{GiosError, IncompleteDataError};
use crate::transport::endpoints::Endpoints;
use crate::transport::Transport;
use crate::types::station::{StationId, StationMetadata, StationRecord};
use crate::utils::fetch_as;
use log::{debug, error, warn};
use serde_json::Value;

/// Downloads the full station directory.
///
/// Records that do not decode are skipped with a warning, so one broken
/// entry does not hide the rest of the directory.
///
/// # Errors
///
/// Returns [`GiosError::Transport`] if the directory cannot be retrieved and
/// [`IncompleteDataError::Malformed`] if it is not a list.
pub async fn fetch_directory<T: Transport>(
    transport: &T,
    endpoints: &Endpoints,
) -> Result<Vec<StationRecord>, GiosError> {
    let records = fetch_records(transport, endpoints).await?;
    let stations: Vec<StationRecord> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value(record) {
            Ok(station) => Some(station),
            Err(e) => {
                warn!("Skipping unreadable station record: {}", e);
                None
            }
        })
        .collect();
    debug!("All stations data retrieved ({} stations)", stations.len());
    Ok(stations)
}

/// Finds `station_id` in the directory and returns its metadata.
///
/// Only the record of `station_id` has to decode; other entries are matched
/// by their `id` alone.
///
/// # Errors
///
/// * [`GiosError::NoStation`] if the directory was retrieved but does not
///   list the station. This is a configuration mistake, not a transient failure.
/// * [`IncompleteDataError::EmptyDirectory`] if the directory came back empty.
/// * [`IncompleteDataError::Malformed`] if the station's own record lacks its
///   location or name.
/// * Any transport error of the directory request.
pub async fn resolve_station<T: Transport>(
    transport: &T,
    endpoints: &Endpoints,
    station_id: StationId,
) -> Result<StationMetadata, GiosError> {
    let records = fetch_records(transport, endpoints).await?;
    if records.is_empty() {
        return Err(IncompleteDataError::EmptyDirectory.into());
    }
    let Some(record) = find_record(records, station_id) else {
        error!("Wrong station_id. There is no station {}!", station_id);
        return Err(GiosError::NoStation(station_id));
    };
    let station: StationRecord =
        serde_json::from_value(record).map_err(|e| IncompleteDataError::Malformed {
            url: endpoints.stations(),
            source: e,
        })?;
    Ok(StationMetadata::from(&station))
}

/// Answers whether `station_id` is listed in the directory.
pub async fn station_exists<T: Transport>(
    transport: &T,
    endpoints: &Endpoints,
    station_id: StationId,
) -> Result<bool, GiosError> {
    let records = fetch_records(transport, endpoints).await?;
    Ok(records.iter().any(|record| record_id(record) == Some(station_id)))
}

async fn fetch_records<T: Transport>(
    transport: &T,
    endpoints: &Endpoints,
) -> Result<Vec<Value>, GiosError> {
    fetch_as(transport, &endpoints.stations()).await
}

fn record_id(record: &Value) -> Option<StationId> {
    record.get("id").and_then(Value::as_u64)
}

fn find_record(records: Vec<Value>, station_id: StationId) -> Option<Value> {
    records
        .into_iter()
        .find(|record| record_id(record) == Some(station_id))
}
