pub mod leverage;

use common::LogLevel;
use hyperliquid_exchange::HyperliquidConfig;
use serde::Deserialize;

pub const SERVICE_NAME: &str = "hyperliquid-request";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestConfig {
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(flatten)]
    pub hyperliquid: HyperliquidConfig,
}
