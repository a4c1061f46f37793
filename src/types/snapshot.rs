//! The aggregate a refresh produces, and how a refresh cycle ended.

use crate::types::sensor::{SensorEntry, AQI_CODE};
use crate::types::station::StationMetadata;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Station metadata plus the latest value and index category of every pollutant.
///
/// Replaced wholesale on every successful refresh. Sensors are keyed by
/// pollutant code; once populated, the map also holds the synthetic
/// [`AQI_CODE`] entry carrying the overall station category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub station: Option<StationMetadata>,
    pub sensors: BTreeMap<String, SensorEntry>,
}

impl Snapshot {
    /// Any data is present.
    pub fn is_available(&self) -> bool {
        !self.sensors.is_empty()
    }

    /// Every pollutant carries a value and the overall category is known.
    ///
    /// Index categories of individual pollutants are not required: they are
    /// best-effort and may be missing even on a complete cycle.
    pub fn is_fully_available(&self) -> bool {
        self.is_available()
            && self.aqi().is_some()
            && self
                .sensors
                .values()
                .filter(|entry| !entry.is_aqi())
                .all(|entry| entry.value.is_some())
    }

    pub fn get(&self, code: &str) -> Option<&SensorEntry> {
        self.sensors.get(code)
    }

    /// Latest value of a pollutant.
    pub fn value(&self, code: &str) -> Option<f64> {
        self.sensors.get(code).and_then(|entry| entry.value)
    }

    /// Index category of a pollutant.
    pub fn index(&self, code: &str) -> Option<&str> {
        self.sensors
            .get(code)
            .and_then(|entry| entry.index.as_deref())
    }

    /// Overall station index category.
    pub fn aqi(&self) -> Option<&str> {
        self.index(AQI_CODE)
    }

    /// Pollutant entries, excluding the AQI entry.
    pub fn pollutants(&self) -> impl Iterator<Item = &SensorEntry> {
        self.sensors.values().filter(|entry| !entry.is_aqi())
    }

    pub(crate) fn clear_sensors(&mut self) {
        self.sensors.clear();
    }
}

/// Something a refresh could not fill in, without failing the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshWarning {
    /// No non-null value among the newest readings (lenient policy only).
    MissingReading { code: String },
    /// The index response lacked the level for a pollutant.
    MissingIndex { code: String, key: String },
    /// The index response lacked the overall station level.
    MissingStationIndex,
    /// The index endpoint could not be used at all.
    IndexUnavailable(String),
}

impl fmt::Display for RefreshWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshWarning::MissingReading { code } => {
                write!(f, "no recent reading for {}", code)
            }
            RefreshWarning::MissingIndex { code, key } => {
                write!(f, "no index level '{}' for {}", key, code)
            }
            RefreshWarning::MissingStationIndex => write!(f, "no overall station index level"),
            RefreshWarning::IndexUnavailable(reason) => {
                write!(f, "index levels unavailable: {}", reason)
            }
        }
    }
}

/// Successful end of a refresh cycle.
///
/// Failures are reported through the `Err` side of
/// [`crate::Gios::refresh`].
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Complete(Snapshot),
    Partial {
        snapshot: Snapshot,
        warnings: Vec<RefreshWarning>,
    },
}

impl RefreshOutcome {
    pub(crate) fn from_parts(snapshot: Snapshot, warnings: Vec<RefreshWarning>) -> Self {
        if warnings.is_empty() {
            RefreshOutcome::Complete(snapshot)
        } else {
            RefreshOutcome::Partial { snapshot, warnings }
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        match self {
            RefreshOutcome::Complete(snapshot) => snapshot,
            RefreshOutcome::Partial { snapshot, .. } => snapshot,
        }
    }

    pub fn warnings(&self) -> &[RefreshWarning] {
        match self {
            RefreshOutcome::Complete(_) => &[],
            RefreshOutcome::Partial { warnings, .. } => warnings,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, RefreshOutcome::Complete(_))
    }

    pub fn into_snapshot(self) -> Snapshot {
        match self {
            RefreshOutcome::Complete(snapshot) => snapshot,
            RefreshOutcome::Partial { snapshot, .. } => snapshot,
        }
    }
}
