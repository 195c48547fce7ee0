use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::info::request::Request;
use crate::model::info::response::{SpotMetaTokenUniverse, Universe};
use crate::model::API;
use crate::transport::{RequestOptions, Transport};

/// Spot assets are addressed as `10000 + index` in L1 actions.
pub const SPOT_ASSET_OFFSET: u32 = 10000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub asset: u32,
    /// Only known for perpetuals
    pub max_leverage: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct HyperliquidInfoClient {
    transport: Arc<dyn Transport>,
}

impl HyperliquidInfoClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        request: Request,
        signal: Option<&CancellationToken>,
    ) -> Result<T> {
        let payload = serde_json::to_value(request)?;
        let response = self.transport.request(API::Info, payload, signal).await?;
        serde_json::from_value(response).map_err(Into::into)
    }

    pub async fn meta(&self) -> Result<Universe> {
        self.request(Request::Meta, None).await
    }

    pub async fn spot_meta(&self) -> Result<SpotMetaTokenUniverse> {
        self.request(Request::SpotMeta, None).await
    }

    /// Resolve a perp name (`BTC`) or a spot pair (`PURR/USDC`, `@107`) to its asset id.
    pub async fn resolve_asset(&self, coin: &str) -> Result<ResolvedAsset> {
        self.resolve_asset_with_options(coin, &RequestOptions::default())
            .await
    }

    pub async fn resolve_asset_with_options(&self, coin: &str, opts: &RequestOptions) -> Result<ResolvedAsset> {
        let signal = opts.signal.as_ref();
        let meta: Universe = self.request(Request::Meta, signal).await?;
        if let Some((index, asset)) = meta.universe.iter().enumerate().find(|(_, x)| x.name == coin) {
            debug!("Resolved perp {} to asset {}", coin, index);
            return Ok(ResolvedAsset {
                asset: index as u32,
                max_leverage: Some(asset.max_leverage),
            });
        }

        let spot: SpotMetaTokenUniverse = self.request(Request::SpotMeta, signal).await?;
        let pair = spot.universe.iter().find(|uni| {
            if uni.name == coin {
                return true;
            }
            match (spot.token(uni.base_id()), spot.token(uni.quote_id())) {
                (Some(base), Some(quote)) => format!("{}/{}", base.name, quote.name) == coin,
                _ => false,
            }
        });
        match pair {
            Some(pair) => {
                debug!("Resolved spot {} to asset {}", coin, SPOT_ASSET_OFFSET + pair.index);
                Ok(ResolvedAsset {
                    asset: SPOT_ASSET_OFFSET + pair.index,
                    max_leverage: None,
                })
            }
            None => Err(Error::UnknownAsset(coin.to_string())),
        }
    }
}
