use crate::error::{GiosError, IncompleteDataError};
use crate::transport::Transport;
use log::debug;
use serde::de::DeserializeOwned;

/// GETs `url` and decodes the JSON body into `T`.
///
/// A body that does not match `T` is reported as
/// [`IncompleteDataError::Malformed`], not as a transport failure.
pub(crate) async fn fetch_as<T, R>(transport: &T, url: &str) -> Result<R, GiosError>
where
    T: Transport,
    R: DeserializeOwned,
{
    let json = transport.get_json(url).await?;
    let decoded = serde_json::from_value::<R>(json).map_err(|e| {
        debug!("Unexpected response shape from {}: {}", url, e);
        IncompleteDataError::Malformed {
            url: url.to_string(),
            source: e,
        }
    })?;
    Ok(decoded)
}
