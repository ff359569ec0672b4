//! HTTP transport layer.

mod client;

pub(crate) use client::{ApiClient, ApiRequest};

use crate::error::{Error, InvalidInputError};

/// Serialize a request payload into a retained JSON body.
///
/// Bodies are kept as [`serde_json::Value`] so a request that fails with
/// 401 can be replayed after a token refresh without re-borrowing the
/// caller's payload.
pub(crate) fn to_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, Error> {
    serde_json::to_value(value).map_err(|e| {
        Error::InvalidInput(InvalidInputError::Other {
            message: format!("failed to serialize request body: {}", e),
        })
    })
}
