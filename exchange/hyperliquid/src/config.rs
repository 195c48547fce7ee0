use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use ethers::types::Address;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};

use crate::model::exchange::request::HyperliquidChain;
use crate::utils::now_ms;
use crate::HyperliquidUrls;

pub type ExpiresAfterFn = Arc<dyn Fn() -> BoxFuture<'static, u64> + Send + Sync>;

/// Default `expiresAfter` of a session: a fixed timestamp or an async provider asked once per call.
#[derive(Clone)]
pub enum ExpiresAfter {
    At(u64),
    Provider(ExpiresAfterFn),
}

impl Debug for ExpiresAfter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpiresAfter::At(at) => f.debug_tuple("At").field(at).finish(),
            ExpiresAfter::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

impl ExpiresAfter {
    pub fn provider<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = u64> + Send + 'static,
    {
        ExpiresAfter::Provider(Arc::new(move || f().boxed()))
    }
    /// `now + offset`, evaluated on every call
    pub fn offset(offset: Duration) -> Self {
        let offset = offset.as_millis() as u64;
        Self::provider(move || async move { now_ms().saturating_add(offset) })
    }
    pub async fn resolve(&self) -> u64 {
        match self {
            ExpiresAfter::At(at) => *at,
            ExpiresAfter::Provider(provider) => provider().await,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HyperliquidConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub network: HyperliquidChain,
    #[serde(default)]
    pub rest_endpoint: Option<String>,
    #[serde(default)]
    pub default_vault_address: Option<Address>,
    #[serde(default)]
    pub expires_after_offset_ms: Option<u64>,
}

impl HyperliquidConfig {
    pub fn urls(&self) -> HyperliquidUrls {
        let mut urls = HyperliquidUrls::from_chain(self.network);
        if let Some(endpoint) = &self.rest_endpoint {
            urls.set_rest_endpoint(endpoint.clone());
        }
        urls
    }
    pub fn default_expires_after(&self) -> Option<ExpiresAfter> {
        self.expires_after_offset_ms
            .map(|offset| ExpiresAfter::offset(Duration::from_millis(offset)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_expires_after_resolves() {
        assert_eq!(ExpiresAfter::At(5).resolve().await, 5);
        assert_eq!(ExpiresAfter::provider(|| async { 7 }).resolve().await, 7);

        let before = now_ms();
        let at = ExpiresAfter::offset(Duration::from_secs(60)).resolve().await;
        assert!(at >= before + 60_000);

        let far = ExpiresAfter::offset(Duration::from_millis(u64::MAX)).resolve().await;
        assert_eq!(far, u64::MAX);
    }

    #[test]
    fn test_config_from_json() {
        let config: HyperliquidConfig = serde_json::from_value(json!({
            "network": "testnet",
            "rest_endpoint": "http://localhost:3001/",
            "default_vault_address": "0x1111111111111111111111111111111111111111",
            "expires_after_offset_ms": 30000,
        }))
        .unwrap();
        assert_eq!(config.network, HyperliquidChain::Testnet);
        assert_eq!(config.urls().rest_endpoint, "http://localhost:3001");
        assert_eq!(config.default_vault_address, Some(Address::repeat_byte(0x11)));
        assert!(matches!(config.default_expires_after(), Some(ExpiresAfter::Provider(_))));
    }

    #[test]
    fn test_config_defaults_to_mainnet() {
        let config: HyperliquidConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config.network, HyperliquidChain::Mainnet);
        assert_eq!(config.urls(), HyperliquidUrls::from_chain(HyperliquidChain::Mainnet));
        assert!(config.default_expires_after().is_none());
    }
}
