use std::sync::Arc;

use ethers::signers::{LocalWallet, Signer};
use ethers::types::Address;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::config::{ExpiresAfter, HyperliquidConfig};
use crate::error::Result;
use crate::model::exchange::request::{
    ExchangeRequest, HyperliquidChain, L1Action, UpdateLeverageParams, UpdateLeverageRequest,
};
use crate::model::exchange::response::{Response, SuccessResponse};
use crate::model::API;
use crate::nonce::NonceFactory;
use crate::rest::info::HyperliquidInfoClient;
use crate::rest::HyperliquidRestClient;
use crate::sign::sign_l1_action;
use crate::transport::{RequestOptions, Transport};
use crate::HyperliquidUrls;

/// Endpoint to sign and send L1 actions on the Hyperliquid chain.
#[derive(Debug)]
pub struct HyperliquidExchangeSession {
    transport: Arc<dyn Transport>,
    wallet: Arc<LocalWallet>,
    chain: HyperliquidChain,
    nonce_factory: NonceFactory,
    info: HyperliquidInfoClient,
    default_vault_address: Option<Address>,
    default_expires_after: Option<ExpiresAfter>,
}

impl HyperliquidExchangeSession {
    pub fn new(wallet: Arc<LocalWallet>, chain: HyperliquidChain) -> Self {
        let urls = HyperliquidUrls::from_chain(chain);
        Self::new_with_urls(wallet, chain, &urls)
    }
    pub fn new_with_urls(wallet: Arc<LocalWallet>, chain: HyperliquidChain, urls: &HyperliquidUrls) -> Self {
        let transport = Arc::new(HyperliquidRestClient::new(urls.rest_endpoint.clone()));
        Self::with_transport(wallet, chain, transport)
    }
    pub fn from_config(wallet: Arc<LocalWallet>, config: &HyperliquidConfig) -> Self {
        Self::new_with_urls(wallet, config.network, &config.urls())
            .with_default_vault_address(config.default_vault_address)
            .with_default_expires_after(config.default_expires_after())
    }
    pub fn with_transport(wallet: Arc<LocalWallet>, chain: HyperliquidChain, transport: Arc<dyn Transport>) -> Self {
        Self {
            info: HyperliquidInfoClient::new(transport.clone()),
            transport,
            wallet,
            chain,
            nonce_factory: NonceFactory::new(),
            default_vault_address: None,
            default_expires_after: None,
        }
    }
    pub fn with_default_vault_address(mut self, vault_address: Option<Address>) -> Self {
        self.default_vault_address = vault_address;
        self
    }
    pub fn with_default_expires_after(mut self, expires_after: Option<ExpiresAfter>) -> Self {
        self.default_expires_after = expires_after;
        self
    }

    pub fn chain(&self) -> HyperliquidChain {
        self.chain
    }
    pub fn wallet_address(&self) -> Address {
        self.wallet.address()
    }
    pub fn info(&self) -> &HyperliquidInfoClient {
        &self.info
    }

    /// Build and validate the placeholder request of an `updateLeverage` call.
    /// Unset vault address and expiry take the session defaults.
    pub async fn prepare_update_leverage(&self, params: &UpdateLeverageParams) -> Result<UpdateLeverageRequest> {
        params.validate()?;
        let vault_address = params.vault_address.or(self.default_vault_address);
        let expires_after = match (params.expires_after, &self.default_expires_after) {
            (Some(expires_after), _) => Some(expires_after),
            (None, Some(default)) => Some(default.resolve().await),
            (None, None) => None,
        };
        let request = UpdateLeverageRequest::placeholder(
            L1Action::UpdateLeverage(params.action()),
            vault_address,
            expires_after,
        );
        request.validate()?;
        Ok(request)
    }

    /// Update leverage for a given asset
    pub async fn update_leverage(&self, params: UpdateLeverageParams, opts: RequestOptions) -> Result<SuccessResponse> {
        let request = self.prepare_update_leverage(&params).await?;
        info!(
            asset = params.asset,
            leverage = params.leverage,
            is_cross = params.is_cross,
            "Updating leverage"
        );
        self.execute_l1_action(request.action, request.vault_address, request.expires_after, opts)
            .await
    }

    /// Update leverage for a coin name, resolving its asset id through the info endpoint
    pub async fn update_leverage_by_coin(
        &self,
        coin: &str,
        leverage: u32,
        is_cross: bool,
        opts: RequestOptions,
    ) -> Result<SuccessResponse> {
        let resolved = self.info.resolve_asset_with_options(coin, &opts).await?;
        if let Some(max_leverage) = resolved.max_leverage {
            if leverage > max_leverage {
                warn!("{} leverage {} is above the max leverage {}", coin, leverage, max_leverage);
            }
        }
        self.update_leverage(UpdateLeverageParams::new(resolved.asset, leverage, is_cross), opts)
            .await
    }

    /// Sign an action with a fresh nonce.
    pub async fn build_signed_request(
        &self,
        action: L1Action,
        vault_address: Option<Address>,
        expires_after: Option<u64>,
    ) -> Result<ExchangeRequest> {
        let nonce = self.nonce_factory.get_new_nonce();
        let connection_id = action.hash(nonce, vault_address, expires_after)?;
        let signature = sign_l1_action(self.chain, &self.wallet, connection_id).await?;
        Ok(ExchangeRequest {
            action,
            nonce,
            signature: signature.into(),
            vault_address,
            expires_after,
        })
    }

    pub async fn execute_l1_action(
        &self,
        action: L1Action,
        vault_address: Option<Address>,
        expires_after: Option<u64>,
        opts: RequestOptions,
    ) -> Result<SuccessResponse> {
        let request = self.build_signed_request(action, vault_address, expires_after).await?;
        request.validate()?;
        debug!(nonce = request.nonce, "Sending L1 action {:?}", request.action);
        let payload = serde_json::to_value(&request)?;
        let response = self
            .transport
            .request(API::Exchange, payload, opts.signal.as_ref())
            .await?;
        let response: Response = serde_json::from_value(response)?;
        response.into_result().map_err(|err| {
            warn!(nonce = request.nonce, "L1 action rejected: {}", err);
            err
        })
    }
}
