mod error;
mod gios;
mod index;
mod sensors;
mod stations;
mod transport;
mod types;
mod utils;

pub use error::{GiosError, IncompleteDataError};
pub use gios::*;

pub use transport::endpoints::{Endpoints, DEFAULT_BASE_URL};
pub use transport::error::TransportError;
pub use transport::http::HttpTransport;
pub use transport::Transport;

pub use stations::resolver::{fetch_directory, resolve_station, station_exists};

pub use sensors::catalog::{load_catalog, CatalogEntry, SensorCatalog};
pub use sensors::readings::{
    fetch_reading, latest_reading, Reading, ReadingPolicy, READING_SCAN_DEPTH,
};

pub use index::annotator::level_name;
pub use index::key::{index_level_key, INDEX_LEVEL_NAME, STATION_INDEX_KEY};

pub use types::sensor::{
    RawReading, ReadingsResponse, SensorDescriptor, SensorEntry, SensorId, SensorParam, AQI_CODE,
};
pub use types::snapshot::{RefreshOutcome, RefreshWarning, Snapshot};
pub use types::station::{StationId, StationMetadata, StationRecord};
