use futures::future::LocalBoxFuture;

use crate::model::{Draft, PersonId, Record};

mod error;
pub use error::*;

#[cfg(test)]
use mockall::automock;

/// Access to the remote person collection.
///
/// Every call resolves to the canonical server representation of the affected records.
/// Failures are handed to the caller as they are, nothing is retried.
#[cfg_attr(test, automock)]
pub trait RemoteCollection {
    fn fetch_all(&self) -> LocalBoxFuture<'static, Result<Vec<Record>, RemoteError>>;

    fn create(&self, draft: Draft) -> LocalBoxFuture<'static, Result<Record, RemoteError>>;

    fn replace(
        &self,
        id: PersonId,
        record: Record,
    ) -> LocalBoxFuture<'static, Result<Record, RemoteError>>;

    fn remove(&self, id: PersonId) -> LocalBoxFuture<'static, Result<(), RemoteError>>;
}

/// Decode a response body into the expected shape
pub fn decode<T>(body: &str) -> Result<T, RemoteError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    serde_json::from_str(body).map_err(|cause| RemoteError::Payload {
        message: "Unable to decode response body".to_string(),
        cause,
    })
}

/// Encode a request body
pub fn encode<T>(payload: &T) -> Result<String, RemoteError>
where
    T: serde::Serialize,
{
    serde_json::to_string(payload).map_err(|cause| RemoteError::Payload {
        message: "Unable to encode request body".to_string(),
        cause,
    })
}

/// Location of a single record below the collection endpoint
pub fn record_url(base_url: &str, id: &PersonId) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), id)
}
