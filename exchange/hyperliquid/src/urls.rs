use crate::model::exchange::request::HyperliquidChain;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperliquidUrls {
    pub rest_endpoint: String,
}

impl HyperliquidUrls {
    pub fn from_chain(chain: HyperliquidChain) -> Self {
        match chain {
            HyperliquidChain::Mainnet => Self::mainnet(),
            HyperliquidChain::Testnet => Self::testnet(),
            HyperliquidChain::Dev => Self::local(),
        }
    }
    fn mainnet() -> Self {
        Self {
            rest_endpoint: "https://api.hyperliquid.xyz".to_string(),
        }
    }

    fn testnet() -> Self {
        Self {
            rest_endpoint: "https://api.hyperliquid-testnet.xyz".to_string(),
        }
    }

    fn local() -> Self {
        Self {
            rest_endpoint: "http://localhost:3001".to_string(),
        }
    }

    pub fn set_rest_endpoint(&mut self, endpoint: String) {
        self.rest_endpoint = endpoint.trim_end_matches('/').to_string();
    }
}
