use crate::transport::error::TransportError;
use crate::types::sensor::SensorId;
use crate::types::station::StationId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GiosError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("There is no station with id {0}")]
    NoStation(StationId),

    #[error(transparent)]
    IncompleteData(#[from] IncompleteDataError),
}

impl GiosError {
    /// Whether a later refresh could succeed without user intervention.
    ///
    /// A missing station is a configuration mistake and never retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            GiosError::Transport(e) => e.is_retryable(),
            GiosError::NoStation(_) => false,
            GiosError::IncompleteData(_) => true,
        }
    }
}

/// A successful response that does not carry the data a refresh needs.
#[derive(Debug, Error)]
pub enum IncompleteDataError {
    #[error("Station directory is empty")]
    EmptyDirectory,

    #[error("Unexpected response shape from {url}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Station {0} reports no sensors")]
    NoSensors(StationId),

    #[error("No recent reading for {code} (sensor {sensor_id})")]
    MissingReading { code: String, sensor_id: SensorId },
}
