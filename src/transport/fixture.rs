use crate::transport::error::TransportError;
use crate::transport::Transport;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Canned {
    Json(Value),
    Status(u16, String),
}

/// In-memory transport serving canned responses per URL.
///
/// URLs without a canned response answer `404 Not Found`, like the live
/// service does for unknown ids.
#[derive(Debug, Default)]
pub(crate) struct FixtureTransport {
    responses: Mutex<HashMap<String, Canned>>,
    requests: Mutex<Vec<String>>,
    delay: Option<Duration>,
    url_delays: HashMap<String, Duration>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Delays only `url`, overriding [`FixtureTransport::with_delay`] for it.
    pub fn with_url_delay(mut self, url: impl Into<String>, delay: Duration) -> Self {
        self.url_delays.insert(url.into(), delay);
        self
    }

    pub fn json(self, url: impl Into<String>, body: Value) -> Self {
        self.set_json(url, body);
        self
    }

    pub fn status(self, url: impl Into<String>, status: u16, body: &str) -> Self {
        self.set_status(url, status, body);
        self
    }

    /// Replaces the response of `url` after construction, e.g. between refreshes.
    pub fn set_json(&self, url: impl Into<String>, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.into(), Canned::Json(body));
    }

    pub fn set_status(&self, url: impl Into<String>, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.into(), Canned::Status(status, body.to_string()));
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|requested| requested.as_str() == url)
            .count()
    }

    /// Highest number of requests that were pending at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn respond(&self, url: &str) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        let canned = self.responses.lock().unwrap().get(url).cloned();
        match canned {
            Some(Canned::Json(value)) => Ok(value),
            Some(Canned::Status(status, body)) => Err(TransportError::Api {
                url: url.to_string(),
                status: StatusCode::from_u16(status).unwrap(),
                body,
            }),
            None => Err(TransportError::Api {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND,
                body: String::new(),
            }),
        }
    }
}

impl Transport for FixtureTransport {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, TransportError>> + Send {
        let url = url.to_string();
        async move {
            let pending = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak_in_flight.fetch_max(pending, Ordering::SeqCst);
            if let Some(delay) = self.url_delays.get(&url).copied().or(self.delay) {
                tokio::time::sleep(delay).await;
            }
            let response = self.respond(&url);
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            response
        }
    }
}
