use crate::transport::error::TransportError;
use crate::transport::Transport;
use bon::bon;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// [`Transport`] backed by a shared `reqwest` client.
///
/// The inner client pools connections, so one `HttpTransport` should be
/// created per application and handed to the [`crate::Gios`] client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

#[bon]
impl HttpTransport {
    /// Creates a transport around a default `reqwest::Client`.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Wraps an existing client, e.g. one shared with the rest of an application.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Builds a transport with a per-request timeout and/or a custom user agent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gios::{HttpTransport, TransportError};
    /// # use std::time::Duration;
    /// # fn run() -> Result<(), TransportError> {
    /// let transport = HttpTransport::configured()
    ///     .request_timeout(Duration::from_secs(10))
    ///     .user_agent("my-air-monitor/1.0".to_string())
    ///     .call()?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn configured(
        request_timeout: Option<Duration>,
        user_agent: Option<String>,
    ) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent);
        }
        let client = builder.build().map_err(TransportError::ClientBuild)?;
        Ok(Self { client })
    }

    async fn fetch(&self, url: &str) -> Result<Value, TransportError> {
        debug!("Requesting {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Network {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("Request to {} failed with status {}", url, status);
            return Err(TransportError::Api {
                url: url.to_string(),
                status,
                body,
            });
        }

        let json = response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::InvalidJson {
                url: url.to_string(),
                source: e,
            })?;
        debug!("Data retrieved from {}, status: {}", url, status);
        Ok(json)
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, TransportError>> + Send {
        self.fetch(url)
    }
}
