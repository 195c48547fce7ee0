pub mod exchange;
pub mod info;

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering::Relaxed;

use async_trait::async_trait;
use http::Method;
use reqwest::Response;
use serde::ser::Serialize;
use serde_json::Value;
use static_assertions::assert_impl_all;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::model::API;
use crate::transport::Transport;

static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone)]
pub struct HyperliquidRestClient {
    session: reqwest::Client,
    host: String,
}

impl HyperliquidRestClient {
    pub fn new(host: String) -> Self {
        Self {
            session: reqwest::Client::new(),
            host,
        }
    }
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl HyperliquidRestClient {
    pub fn build_request(&self, endpoint: API, req: impl Serialize) -> Result<reqwest::Request> {
        let url = format!("{}{}", self.host, endpoint.as_str());
        Ok(self.session.request(Method::POST, url).json(&req).build()?)
    }
    pub fn set_client(&mut self, client: reqwest::Client) {
        self.session = client;
    }

    async fn execute(&self, request: reqwest::Request) -> Result<String> {
        let id = REQUEST_ID.fetch_add(1, Relaxed);
        let body = request
            .body()
            .and_then(|x| x.as_bytes())
            .and_then(|x| std::str::from_utf8(x).ok())
            .unwrap_or("<no body>");
        debug!(?id, "Sending request: {} {} {}", request.method(), request.url(), body);
        let response = self.session.execute(request).await?;
        self.handler(id, response).await
    }

    async fn handler(&self, id: u64, response: Response) -> Result<String> {
        let status = response.status();
        let text = response.text().await?;
        debug!(?id, "Received response: {} {}", status, text);
        if !status.is_success() {
            error!(?id, "Received error response: {} {}", status, text);
            return Err(Error::response_error(status.as_u16(), text));
        }
        Ok(text)
    }
}

#[async_trait]
impl Transport for HyperliquidRestClient {
    async fn request(&self, endpoint: API, payload: Value, signal: Option<&CancellationToken>) -> Result<Value> {
        let request = self.build_request(endpoint, &payload)?;
        let text = match signal {
            Some(signal) => {
                tokio::select! {
                    biased;
                    _ = signal.cancelled() => return Err(Error::Aborted),
                    text = self.execute(request) => text?,
                }
            }
            None => self.execute(request).await?,
        };
        serde_json::from_str(&text).map_err(Into::into)
    }
}

assert_impl_all!(HyperliquidRestClient: Send, Sync, Unpin);
