//! This module provides the main entry point of the crate: a client bound to one
//! GIOŚ monitoring station that assembles its latest air quality readings into a
//! [`Snapshot`].

use crate::error::GiosError;
use crate::index::annotator::annotate;
use crate::sensors::catalog::{load_catalog, SensorCatalog};
use crate::sensors::readings::{fill_readings, ReadingPolicy};
use crate::stations::resolver::{fetch_directory, resolve_station};
use crate::transport::endpoints::Endpoints;
use crate::transport::error::TransportError;
use crate::transport::http::HttpTransport;
use crate::transport::Transport;
use crate::types::sensor::SensorEntry;
use crate::types::snapshot::{RefreshOutcome, RefreshWarning, Snapshot};
use crate::types::station::{StationId, StationMetadata, StationRecord};
use bon::bon;
use log::{info, warn};
use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};

/// Default upper bound for one refresh cycle.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of sensor readings requested at the same time.
pub const DEFAULT_MAX_CONCURRENT_READINGS: usize = 4;

/// The client for one GIOŚ monitoring station.
///
/// A refresh runs four stages in order: the station directory lookup, the
/// sensor catalog, the latest reading of every sensor, and the index levels.
/// Station metadata and the sensor catalog are fetched once and cached for the
/// life of the client; readings and index levels are fetched on every refresh.
///
/// The client does not schedule itself. Call [`Gios::refresh`] at whatever
/// interval suits the application, and decide there whether to retry a failed
/// refresh (see [`GiosError::is_retryable`]).
///
/// # Examples
///
/// ```rust,no_run
/// # use gios::{Gios, GiosError, HttpTransport};
/// # async fn run() -> Result<(), GiosError> {
/// let mut client = Gios::new(400, HttpTransport::new());
/// client.refresh().await?;
///
/// println!("{:?}", client.station_name());
/// println!("PM10: {:?}", client.snapshot().value("PM10"));
/// println!("AQI: {:?}", client.snapshot().aqi());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Gios<T: Transport = HttpTransport> {
    station_id: StationId,
    transport: T,
    endpoints: Endpoints,
    timeout: Duration,
    reading_policy: ReadingPolicy,
    max_concurrent_readings: usize,
    metadata: Option<StationMetadata>,
    catalog: Option<SensorCatalog>,
    snapshot: Snapshot,
}

impl Gios<HttpTransport> {
    /// Creates a client for `station_id` talking to the public GIOŚ service
    /// through a fresh [`HttpTransport`].
    pub fn for_station(station_id: StationId) -> Self {
        Self::new(station_id, HttpTransport::new())
    }
}

#[bon]
impl<T: Transport> Gios<T> {
    /// Creates a client for `station_id` with default settings.
    ///
    /// Nothing is requested until the first [`Gios::refresh`].
    pub fn new(station_id: StationId, transport: T) -> Self {
        Self::with_station(station_id, transport).call()
    }

    /// Creates a client with custom settings.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `station_id`, `transport`: **Required**, passed to `with_station`.
    /// * `.endpoints(Endpoints)`: Optional. Where the REST service lives. Defaults to the public GIOŚ API.
    /// * `.timeout(Duration)`: Optional. Upper bound for a whole refresh. Defaults to 30 seconds.
    /// * `.reading_policy(ReadingPolicy)`: Optional. Defaults to [`ReadingPolicy::Strict`].
    /// * `.max_concurrent_readings(usize)`: Optional. Defaults to 4; values below 1 are treated as 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gios::{Gios, HttpTransport, ReadingPolicy};
    /// # use std::time::Duration;
    /// let client = Gios::with_station(400, HttpTransport::new())
    ///     .timeout(Duration::from_secs(10))
    ///     .reading_policy(ReadingPolicy::Lenient)
    ///     .max_concurrent_readings(1)
    ///     .call();
    /// assert_eq!(client.station_id(), 400);
    /// assert!(!client.is_available());
    /// ```
    #[builder(start_fn = with_station)]
    pub fn build_client(
        #[builder(start_fn)] station_id: StationId,
        #[builder(start_fn)] transport: T,
        endpoints: Option<Endpoints>,
        timeout: Option<Duration>,
        reading_policy: Option<ReadingPolicy>,
        max_concurrent_readings: Option<usize>,
    ) -> Self {
        Self {
            station_id,
            transport,
            endpoints: endpoints.unwrap_or_default(),
            timeout: timeout.unwrap_or(DEFAULT_TIMEOUT),
            reading_policy: reading_policy.unwrap_or_default(),
            max_concurrent_readings: max_concurrent_readings
                .unwrap_or(DEFAULT_MAX_CONCURRENT_READINGS)
                .max(1),
            metadata: None,
            catalog: None,
            snapshot: Snapshot::default(),
        }
    }

    /// Runs one refresh cycle and replaces the snapshot.
    ///
    /// # Returns
    ///
    /// [`RefreshOutcome::Complete`] when every value and index level was
    /// found, [`RefreshOutcome::Partial`] when the cycle succeeded with
    /// warnings (missing index levels, or missing readings under
    /// [`ReadingPolicy::Lenient`]).
    ///
    /// # Errors
    ///
    /// * [`GiosError::NoStation`] if the station id is not in the directory.
    ///   Retrying will not help.
    /// * [`GiosError::Transport`] if a request failed, returned a non-200
    ///   status, or the cycle exceeded its timeout.
    /// * [`GiosError::IncompleteData`] if a response lacked required data,
    ///   e.g. a sensor without a recent value under [`ReadingPolicy::Strict`].
    ///
    /// A failure while resolving the station leaves the previous snapshot
    /// untouched. A failure while loading sensors or readings clears it, so a
    /// stale snapshot is never mistaken for a current one.
    pub async fn refresh(&mut self) -> Result<RefreshOutcome, GiosError> {
        let deadline = Instant::now() + self.timeout;

        if let Err(e) = self.ensure_station(deadline).await {
            warn!("Could not resolve station {}: {}", self.station_id, e);
            return Err(e);
        }

        match self.update_sensors(deadline).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                warn!(
                    "Refresh of station {} failed, clearing sensor data: {}",
                    self.station_id, e
                );
                self.snapshot.clear_sensors();
                Err(e)
            }
        }
    }

    async fn ensure_station(&mut self, deadline: Instant) -> Result<(), GiosError> {
        if self.metadata.is_some() {
            return Ok(());
        }
        let metadata = within(
            deadline,
            self.timeout,
            resolve_station(&self.transport, &self.endpoints, self.station_id),
        )
        .await?;
        info!(
            "Station {} resolved to '{}' at {}, {}",
            self.station_id, metadata.name, metadata.latitude, metadata.longitude
        );
        self.snapshot.station = Some(metadata.clone());
        self.metadata = Some(metadata);
        Ok(())
    }

    async fn update_sensors(&mut self, deadline: Instant) -> Result<RefreshOutcome, GiosError> {
        let catalog = match self.catalog.take() {
            Some(catalog) => catalog,
            None => {
                within(
                    deadline,
                    self.timeout,
                    load_catalog(&self.transport, &self.endpoints, self.station_id),
                )
                .await?
            }
        };
        let catalog = self.catalog.insert(catalog);

        let mut sensors: BTreeMap<String, SensorEntry> = catalog.blank_entries();
        let mut warnings = within(
            deadline,
            self.timeout,
            fill_readings(
                &self.transport,
                &self.endpoints,
                catalog,
                &mut sensors,
                self.reading_policy,
                self.max_concurrent_readings,
            ),
        )
        .await?;

        let index_warnings = match timeout_at(
            deadline,
            annotate(&self.transport, &self.endpoints, self.station_id, &mut sensors),
        )
        .await
        {
            Ok(index_warnings) => index_warnings,
            Err(_) => {
                warn!("Index data for station {} timed out", self.station_id);
                vec![RefreshWarning::IndexUnavailable(format!(
                    "timed out after {:?}",
                    self.timeout
                ))]
            }
        };
        warnings.extend(index_warnings);

        self.snapshot = Snapshot {
            station: self.metadata.clone(),
            sensors,
        };
        Ok(RefreshOutcome::from_parts(self.snapshot.clone(), warnings))
    }

    /// Lists every station of the directory.
    ///
    /// Independent of the station this client is bound to; handy for
    /// letting a user pick a station.
    pub async fn stations(&self) -> Result<Vec<StationRecord>, GiosError> {
        within(
            Instant::now() + self.timeout,
            self.timeout,
            fetch_directory(&self.transport, &self.endpoints),
        )
        .await
    }

    /// The station this client is bound to.
    pub fn station_id(&self) -> StationId {
        self.station_id
    }

    /// Location and name, once the station has been resolved.
    pub fn metadata(&self) -> Option<&StationMetadata> {
        self.metadata.as_ref()
    }

    /// Latitude of the station in decimal degrees, once resolved.
    pub fn latitude(&self) -> Option<f64> {
        self.metadata.as_ref().map(|m| m.latitude)
    }

    /// Longitude of the station in decimal degrees, once resolved.
    pub fn longitude(&self) -> Option<f64> {
        self.metadata.as_ref().map(|m| m.longitude)
    }

    /// Display name of the station, once resolved.
    pub fn station_name(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.name.as_str())
    }

    /// The cached sensor catalog, once loaded.
    pub fn catalog(&self) -> Option<&SensorCatalog> {
        self.catalog.as_ref()
    }

    /// The result of the latest refresh.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Entries of the latest snapshot, keyed by pollutant code.
    pub fn sensors(&self) -> &BTreeMap<String, SensorEntry> {
        &self.snapshot.sensors
    }

    /// See [`Snapshot::is_available`].
    pub fn is_available(&self) -> bool {
        self.snapshot.is_available()
    }

    /// See [`Snapshot::is_fully_available`].
    pub fn is_fully_available(&self) -> bool {
        self.snapshot.is_fully_available()
    }

    /// How missing readings are treated.
    pub fn reading_policy(&self) -> ReadingPolicy {
        self.reading_policy
    }

    /// Where the REST service is reached.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

async fn within<F, R>(deadline: Instant, budget: Duration, stage: F) -> Result<R, GiosError>
where
    F: Future<Output = Result<R, GiosError>>,
{
    match timeout_at(deadline, stage).await {
        Ok(result) => result,
        Err(_) => Err(TransportError::Timeout { after: budget }.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IncompleteDataError;
    use crate::transport::fixture::FixtureTransport;
    use crate::types::sensor::AQI_CODE;
    use serde_json::{json, Value};

    const STATION: StationId = 123;

    fn level(name: &str) -> Value {
        json!({ "id": 0, "indexLevelName": name })
    }

    fn reading(first: Option<f64>, second: Option<f64>) -> Value {
        json!({
            "key": "X",
            "values": [
                { "date": "2024-03-01 13:00:00", "value": first },
                { "date": "2024-03-01 12:00:00", "value": second }
            ]
        })
    }

    /// Station 123 with PM10 (sensor 1) and NO2 (sensor 2), NO2's newest value not yet posted.
    fn scenario(endpoints: &Endpoints) -> FixtureTransport {
        FixtureTransport::new()
            .json(
                endpoints.stations(),
                json!([
                    { "id": 7, "gegrLat": "52.1", "gegrLon": "21.0", "stationName": "Other" },
                    { "id": 123, "gegrLat": 50.0, "gegrLon": 19.0, "stationName": "Test Station" }
                ]),
            )
            .json(
                endpoints.sensors(STATION),
                json!([
                    { "id": 1, "param": { "paramCode": "PM10", "paramName": "pył zawieszony PM10" } },
                    { "id": 2, "param": { "paramCode": "NO2", "paramName": "dwutlenek azotu" } }
                ]),
            )
            .json(endpoints.readings(1), reading(Some(42.5), Some(40.0)))
            .json(endpoints.readings(2), reading(None, Some(10.0)))
            .json(
                endpoints.indexes(STATION),
                json!({
                    "id": 123,
                    "stIndexLevel": level("Good"),
                    "pm10IndexLevel": level("Good"),
                    "no2IndexLevel": level("Moderate")
                }),
            )
    }

    #[tokio::test]
    async fn end_to_end_refresh_assembles_snapshot() -> Result<(), GiosError> {
        let endpoints = Endpoints::default();
        let transport = scenario(&endpoints);
        let mut client = Gios::new(STATION, &transport);

        let outcome = client.refresh().await?;

        assert!(outcome.is_complete());
        assert_eq!(
            client.metadata(),
            Some(&StationMetadata {
                latitude: 50.0,
                longitude: 19.0,
                name: "Test Station".to_string(),
            })
        );
        assert_eq!(client.latitude(), Some(50.0));
        assert_eq!(client.longitude(), Some(19.0));
        assert_eq!(client.station_name(), Some("Test Station"));

        let snapshot = client.snapshot();
        assert_eq!(snapshot, outcome.snapshot());
        assert_eq!(snapshot.sensors.len(), 3);
        assert_eq!(snapshot.value("PM10"), Some(42.5));
        assert_eq!(snapshot.index("PM10"), Some("good"));
        assert_eq!(snapshot.value("NO2"), Some(10.0));
        assert_eq!(snapshot.index("NO2"), Some("moderate"));
        assert_eq!(snapshot.aqi(), Some("good"));
        assert_eq!(snapshot.get(AQI_CODE).and_then(|e| e.sensor_id), None);
        assert_eq!(snapshot.get("NO2").map(|e| e.name.as_str()), Some("dwutlenek azotu"));
        assert!(client.is_available());
        assert!(client.is_fully_available());
        Ok(())
    }

    #[tokio::test]
    async fn every_non_null_first_entry_yields_n_values_plus_aqi() -> Result<(), GiosError> {
        let endpoints = Endpoints::default();
        let codes = ["PM10", "PM2.5", "NO2", "SO2", "O3", "CO", "C6H6"];
        let sensors: Vec<Value> = codes
            .iter()
            .enumerate()
            .map(|(i, code)| json!({ "id": i + 1, "param": { "paramCode": code, "paramName": code } }))
            .collect();
        let transport = scenario(&endpoints).json(endpoints.sensors(STATION), Value::Array(sensors));
        for i in 1..=codes.len() {
            transport.set_json(endpoints.readings(i as u64), reading(Some(i as f64), None));
        }
        let mut client = Gios::new(STATION, &transport);

        client.refresh().await?;

        let snapshot = client.snapshot();
        assert_eq!(snapshot.sensors.len(), codes.len() + 1);
        assert_eq!(snapshot.pollutants().filter(|e| e.value.is_some()).count(), codes.len());
        assert!(snapshot.get(AQI_CODE).is_some());
        Ok(())
    }

    #[tokio::test]
    async fn metadata_and_catalog_are_fetched_once() -> Result<(), GiosError> {
        let endpoints = Endpoints::default();
        let transport = scenario(&endpoints);
        let mut client = Gios::new(STATION, &transport);

        client.refresh().await?;
        client.refresh().await?;

        assert_eq!(transport.count(&endpoints.stations()), 1);
        assert_eq!(transport.count(&endpoints.sensors(STATION)), 1);
        assert_eq!(transport.count(&endpoints.readings(1)), 2);
        assert_eq!(transport.count(&endpoints.readings(2)), 2);
        assert_eq!(transport.count(&endpoints.indexes(STATION)), 2);
        assert_eq!(client.catalog().map(|c| c.len()), Some(2));
        Ok(())
    }

    #[tokio::test]
    async fn identical_responses_give_identical_snapshots() -> Result<(), GiosError> {
        let endpoints = Endpoints::default();
        let transport = scenario(&endpoints);
        let mut client = Gios::new(STATION, &transport);

        let first = client.refresh().await?.into_snapshot();
        let second = client.refresh().await?.into_snapshot();

        assert_eq!(first, second);
        assert_eq!(client.snapshot(), &second);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_station_fails_and_leaves_metadata_unset() {
        let endpoints = Endpoints::default();
        let transport = scenario(&endpoints);
        let mut client = Gios::new(999, &transport);

        let error = client.refresh().await.unwrap_err();

        assert!(matches!(error, GiosError::NoStation(999)));
        assert!(!error.is_retryable());
        assert_eq!(client.metadata(), None);
        assert!(!client.is_available());
        assert_eq!(transport.count(&endpoints.sensors(999)), 0);
    }

    #[tokio::test]
    async fn transient_directory_failure_recovers_on_next_refresh() -> Result<(), GiosError> {
        let endpoints = Endpoints::default();
        let transport = scenario(&endpoints);
        transport.set_status(endpoints.stations(), 502, "Bad Gateway");
        let mut client = Gios::new(STATION, &transport);

        let error = client.refresh().await.unwrap_err();
        assert!(matches!(error, GiosError::Transport(_)));
        assert!(error.is_retryable());
        assert_eq!(client.metadata(), None);
        assert_eq!(transport.count(&endpoints.sensors(STATION)), 0);

        transport.set_json(
            endpoints.stations(),
            json!([{ "id": 123, "gegrLat": 50.0, "gegrLon": 19.0, "stationName": "Test Station" }]),
        );
        client.refresh().await?;
        assert_eq!(client.station_name(), Some("Test Station"));
        assert!(client.is_available());
        Ok(())
    }

    #[tokio::test]
    async fn strict_policy_clears_snapshot_on_missing_reading() -> Result<(), GiosError> {
        let endpoints = Endpoints::default();
        let transport = scenario(&endpoints);
        let mut client = Gios::new(STATION, &transport);
        client.refresh().await?;
        assert!(client.is_available());

        transport.set_json(endpoints.readings(2), reading(None, None));
        let error = client.refresh().await.unwrap_err();

        assert!(matches!(
            error,
            GiosError::IncompleteData(IncompleteDataError::MissingReading { sensor_id: 2, .. })
        ));
        assert!(client.sensors().is_empty());
        assert!(!client.is_available());
        assert!(client.metadata().is_some());
        assert!(client.catalog().is_some());
        Ok(())
    }

    #[tokio::test]
    async fn lenient_policy_keeps_other_values() -> Result<(), GiosError> {
        let endpoints = Endpoints::default();
        let transport = scenario(&endpoints);
        transport.set_json(endpoints.readings(2), reading(None, None));
        let mut client = Gios::with_station(STATION, &transport)
            .reading_policy(ReadingPolicy::Lenient)
            .call();

        let outcome = client.refresh().await?;

        assert_eq!(
            outcome.warnings(),
            &[RefreshWarning::MissingReading {
                code: "NO2".to_string()
            }]
        );
        assert_eq!(client.snapshot().value("PM10"), Some(42.5));
        assert_eq!(client.snapshot().value("NO2"), None);
        assert_eq!(client.snapshot().index("NO2"), Some("moderate"));
        assert!(client.is_available());
        assert!(!client.is_fully_available());
        Ok(())
    }

    #[tokio::test]
    async fn missing_index_key_keeps_value() -> Result<(), GiosError> {
        let endpoints = Endpoints::default();
        let transport = scenario(&endpoints)
            .json(
                endpoints.sensors(STATION),
                json!([
                    { "id": 1, "param": { "paramCode": "PM10", "paramName": "pył zawieszony PM10" } },
                    { "id": 5, "param": { "paramCode": "C6H6", "paramName": "benzen" } }
                ]),
            )
            .json(endpoints.readings(5), reading(Some(1.3), Some(1.1)));
        let mut client = Gios::new(STATION, &transport);

        let outcome = client.refresh().await?;

        assert_eq!(
            outcome.warnings(),
            &[RefreshWarning::MissingIndex {
                code: "C6H6".to_string(),
                key: "c6h6IndexLevel".to_string(),
            }]
        );
        let snapshot = client.snapshot();
        assert_eq!(snapshot.value("C6H6"), Some(1.3));
        assert_eq!(snapshot.index("C6H6"), None);
        assert_eq!(snapshot.index("PM10"), Some("good"));
        assert_eq!(snapshot.aqi(), Some("good"));
        assert!(client.is_fully_available());
        Ok(())
    }

    #[tokio::test]
    async fn index_endpoint_failure_is_partial_success() -> Result<(), GiosError> {
        let endpoints = Endpoints::default();
        let transport = scenario(&endpoints).status(endpoints.indexes(STATION), 500, "error");
        let mut client = Gios::new(STATION, &transport);

        let outcome = client.refresh().await?;

        assert!(!outcome.is_complete());
        assert!(matches!(outcome.warnings(), [RefreshWarning::IndexUnavailable(_)]));
        assert_eq!(client.snapshot().value("PM10"), Some(42.5));
        assert_eq!(client.snapshot().aqi(), None);
        assert!(client.snapshot().get(AQI_CODE).is_some());
        assert!(!client.is_fully_available());
        Ok(())
    }

    #[tokio::test]
    async fn empty_catalog_fails_cycle() {
        let endpoints = Endpoints::default();
        let transport = scenario(&endpoints).json(endpoints.sensors(STATION), json!([]));
        let mut client = Gios::new(STATION, &transport);

        let error = client.refresh().await.unwrap_err();

        assert!(matches!(
            error,
            GiosError::IncompleteData(IncompleteDataError::NoSensors(STATION))
        ));
        assert!(client.catalog().is_none());
        assert!(!client.is_available());
        assert_eq!(client.station_name(), Some("Test Station"));
    }

    #[tokio::test]
    async fn reading_request_failure_clears_snapshot() -> Result<(), GiosError> {
        let endpoints = Endpoints::default();
        let transport = scenario(&endpoints);
        let mut client = Gios::new(STATION, &transport);
        client.refresh().await?;

        transport.set_status(endpoints.readings(1), 404, "Not Found");
        let error = client.refresh().await.unwrap_err();

        assert_eq!(
            match &error {
                GiosError::Transport(e) => e.status(),
                _ => None,
            },
            Some(reqwest::StatusCode::NOT_FOUND)
        );
        assert!(!client.is_available());

        transport.set_json(endpoints.readings(1), reading(Some(42.5), None));
        client.refresh().await?;
        assert!(client.is_fully_available());
        Ok(())
    }

    #[tokio::test]
    async fn slow_service_times_out() {
        let endpoints = Endpoints::default();
        let transport = scenario(&endpoints).with_delay(Duration::from_millis(500));
        let mut client = Gios::with_station(STATION, &transport)
            .timeout(Duration::from_millis(20))
            .call();

        let error = client.refresh().await.unwrap_err();

        assert!(matches!(
            error,
            GiosError::Transport(TransportError::Timeout { .. })
        ));
        assert!(error.is_retryable());
        assert!(!client.is_available());
    }

    #[tokio::test]
    async fn slow_index_endpoint_keeps_values() -> Result<(), GiosError> {
        let endpoints = Endpoints::default();
        let transport = scenario(&endpoints)
            .with_url_delay(endpoints.indexes(STATION), Duration::from_secs(5));
        let mut client = Gios::with_station(STATION, &transport)
            .timeout(Duration::from_millis(300))
            .call();

        let outcome = client.refresh().await?;

        assert!(!outcome.is_complete());
        assert!(matches!(outcome.warnings(), [RefreshWarning::IndexUnavailable(_)]));
        assert_eq!(client.snapshot().value("PM10"), Some(42.5));
        assert_eq!(client.snapshot().value("NO2"), Some(10.0));
        assert_eq!(client.snapshot().index("PM10"), None);
        assert!(client.snapshot().get(AQI_CODE).is_some());
        assert!(client.is_available());
        Ok(())
    }

    #[tokio::test]
    async fn lists_directory() -> Result<(), GiosError> {
        let endpoints = Endpoints::new("http://localhost:9000/rest");
        let transport = scenario(&endpoints);
        let client = Gios::with_station(STATION, &transport)
            .endpoints(endpoints.clone())
            .call();

        let stations = client.stations().await?;

        assert_eq!(stations.len(), 2);
        assert_eq!(transport.requests(), vec![endpoints.stations()]);
        Ok(())
    }

    #[test]
    fn builder_applies_defaults_and_clamps_concurrency() {
        let transport = FixtureTransport::new();
        let client = Gios::with_station(STATION, &transport)
            .max_concurrent_readings(0)
            .call();
        assert_eq!(client.max_concurrent_readings, 1);
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);
        assert_eq!(client.reading_policy(), ReadingPolicy::Strict);
        assert_eq!(client.endpoints(), &Endpoints::default());
    }
}
