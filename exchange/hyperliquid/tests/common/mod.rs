use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ethers::signers::LocalWallet;
use hyperliquid_exchange::model::exchange::request::HyperliquidChain;
use hyperliquid_exchange::model::API;
use hyperliquid_exchange::{Error, HyperliquidExchangeSession, Result, Transport};
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

pub fn get_wallet() -> LocalWallet {
    let priv_key = "e908f86dbb4d55ac876378565aafeabc187f6690f046459397b17d9b9a19688e";
    priv_key.parse::<LocalWallet>().unwrap()
}

pub fn ok_response() -> Value {
    json!({"status": "ok", "response": {"type": "default"}})
}

/// Answers from canned JSON and keeps every payload it was given.
#[derive(Debug)]
pub struct RecordingTransport {
    pub info: Value,
    pub exchange: Value,
    pub sent: Mutex<Vec<(API, Value)>>,
}

impl RecordingTransport {
    pub fn new(exchange: Value) -> Arc<Self> {
        Self::with_info(Value::Null, exchange)
    }
    pub fn with_info(info: Value, exchange: Value) -> Arc<Self> {
        Arc::new(Self {
            info,
            exchange,
            sent: Mutex::new(vec![]),
        })
    }
    pub fn sent(&self) -> Vec<(API, Value)> {
        self.sent.lock().unwrap().clone()
    }
    pub fn sent_to(&self, endpoint: API) -> Vec<Value> {
        self.sent()
            .into_iter()
            .filter(|(api, _)| *api == endpoint)
            .map(|(_, payload)| payload)
            .collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn request(&self, endpoint: API, payload: Value, signal: Option<&CancellationToken>) -> Result<Value> {
        if signal.map(|x| x.is_cancelled()).unwrap_or(false) {
            return Err(Error::Aborted);
        }
        let response = match (endpoint, &payload["type"]) {
            (API::Info, Value::String(ty)) if ty == "meta" => self.info["meta"].clone(),
            (API::Info, _) => self.info["spotMeta"].clone(),
            (API::Exchange, _) => self.exchange.clone(),
        };
        self.sent.lock().unwrap().push((endpoint, payload));
        Ok(response)
    }
}

pub fn session(transport: Arc<RecordingTransport>) -> HyperliquidExchangeSession {
    HyperliquidExchangeSession::with_transport(Arc::new(get_wallet()), HyperliquidChain::Mainnet, transport)
}
