//! Attaches index categories to the pollutants of a snapshot.
//!
//! Annotation is best-effort: whatever the index endpoint fails to provide is
//! reported as a [`RefreshWarning`] and never fails the refresh.

use crate::index::key::{index_level_key, INDEX_LEVEL_NAME, STATION_INDEX_KEY};
use crate::transport::endpoints::Endpoints;
use crate::transport::Transport;
use crate::types::sensor::{SensorEntry, AQI_CODE};
use crate::types::snapshot::RefreshWarning;
use crate::types::station::StationId;
use log::{debug, warn};
use serde_json::Value;
use std::collections::BTreeMap;

/// Lower-cased category label stored under `key`, if present.
pub fn level_name(indexes: &Value, key: &str) -> Option<String> {
    indexes
        .get(key)
        .and_then(|level| level.get(INDEX_LEVEL_NAME))
        .and_then(Value::as_str)
        .map(str::to_lowercase)
}

/// Labels every pollutant in `entries` and sets the AQI category.
///
/// The AQI entry is inserted if missing, even when the index endpoint is
/// unavailable, so a populated snapshot always carries it.
pub(crate) async fn annotate<T: Transport>(
    transport: &T,
    endpoints: &Endpoints,
    station_id: StationId,
    entries: &mut BTreeMap<String, SensorEntry>,
) -> Vec<RefreshWarning> {
    entries
        .entry(AQI_CODE.to_string())
        .or_insert_with(SensorEntry::aqi);

    let url = endpoints.indexes(station_id);
    let indexes = match transport.get_json(&url).await {
        Ok(indexes) if indexes.is_object() => indexes,
        Ok(_) => {
            warn!("Index data from {} is not an object, skipping annotation", url);
            return vec![RefreshWarning::IndexUnavailable(
                "response is not an object".to_string(),
            )];
        }
        Err(e) => {
            warn!("Could not fetch index data: {}", e);
            return vec![RefreshWarning::IndexUnavailable(e.to_string())];
        }
    };
    debug!("Indexes data retrieved");

    apply_levels(&indexes, entries)
}

fn apply_levels(
    indexes: &Value,
    entries: &mut BTreeMap<String, SensorEntry>,
) -> Vec<RefreshWarning> {
    let mut warnings = Vec::new();
    for entry in entries.values_mut() {
        if entry.is_aqi() {
            entry.index = level_name(indexes, STATION_INDEX_KEY);
            if entry.index.is_none() {
                warn!("No {} in index data", STATION_INDEX_KEY);
                warnings.push(RefreshWarning::MissingStationIndex);
            }
            continue;
        }
        let key = index_level_key(&entry.code);
        entry.index = level_name(indexes, &key);
        if entry.index.is_none() {
            warn!("No {} in index data for {}", key, entry.code);
            warnings.push(RefreshWarning::MissingIndex {
                code: entry.code.clone(),
                key,
            });
        }
    }
    warnings
}
