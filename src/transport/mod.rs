//! The single HTTP GET abstraction every refresh stage goes through.

pub mod endpoints;
pub mod error;
pub mod http;

#[cfg(test)]
pub(crate) mod fixture;

use crate::transport::error::TransportError;
use serde_json::Value;
use std::future::Future;

/// Performs a GET request and decodes the body as JSON.
///
/// Implementations must fail with [`TransportError::Api`] when the response
/// status is anything other than `200 OK`, and with
/// [`TransportError::Network`] when no response was received. They never
/// retry on their own.
pub trait Transport: Send + Sync {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, TransportError>> + Send {
        (**self).get_json(url)
    }
}
