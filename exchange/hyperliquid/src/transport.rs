use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::model::API;

/// Delivers a JSON payload to an API endpoint and returns the decoded JSON answer.
///
/// Implementations must stop waiting and return [`crate::Error::Aborted`] once `signal` is cancelled.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    async fn request(&self, endpoint: API, payload: Value, signal: Option<&CancellationToken>) -> Result<Value>;
}

#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub signal: Option<CancellationToken>,
}

impl RequestOptions {
    pub fn with_signal(signal: CancellationToken) -> Self {
        Self { signal: Some(signal) }
    }
}
