use std::fmt::{Display, Formatter};
use std::str::FromStr;

use ethers::types::{Address, Signature, H256};
use ethers::utils::keccak256;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::Result;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HyperliquidChain {
    #[default]
    Mainnet,
    Testnet,
    Dev,
}

impl HyperliquidChain {
    pub fn is_mainnet(&self) -> bool {
        matches!(self, HyperliquidChain::Mainnet)
    }
    /// `source` field of the phantom agent
    pub fn agent_source(&self) -> &'static str {
        if self.is_mainnet() {
            "a"
        } else {
            "b"
        }
    }
}

impl Display for HyperliquidChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HyperliquidChain::Mainnet => "mainnet",
            HyperliquidChain::Testnet => "testnet",
            HyperliquidChain::Dev => "dev",
        };
        f.write_str(s)
    }
}

impl FromStr for HyperliquidChain {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(HyperliquidChain::Mainnet),
            "testnet" => Ok(HyperliquidChain::Testnet),
            "dev" | "devnet" => Ok(HyperliquidChain::Dev),
            _ => Err(format!("unsupported network: {}", s)),
        }
    }
}

/// Field order is part of the action hash: `asset`, `isCross`, `leverage`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeverageAction {
    pub asset: u32,
    pub is_cross: bool,
    #[validate(range(min = 1))]
    pub leverage: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum L1Action {
    UpdateLeverage(UpdateLeverageAction),
}

impl L1Action {
    pub fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        match self {
            L1Action::UpdateLeverage(action) => action.validate(),
        }
    }

    /// Bytes fed to keccak256 to produce the connection id.
    pub fn hash_payload(
        &self,
        nonce: u64,
        vault_address: Option<Address>,
        expires_after: Option<u64>,
    ) -> Result<Vec<u8>> {
        let mut bytes = rmp_serde::to_vec_named(self)?;
        bytes.extend(nonce.to_be_bytes());
        match vault_address {
            Some(vault_address) => {
                bytes.push(1);
                bytes.extend(vault_address.to_fixed_bytes());
            }
            None => bytes.push(0),
        }
        if let Some(expires_after) = expires_after {
            bytes.push(0);
            bytes.extend(expires_after.to_be_bytes());
        }
        Ok(bytes)
    }

    pub fn hash(&self, nonce: u64, vault_address: Option<Address>, expires_after: Option<u64>) -> Result<H256> {
        let bytes = self.hash_payload(nonce, vault_address, expires_after)?;
        Ok(H256(keccak256(bytes)))
    }
}

/// `{r, s, v}` as the exchange expects it: 32-byte hex words and a 27/28 recovery id.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Validate)]
#[validate(schema(function = "WireSignature::validate_recovery_id"))]
pub struct WireSignature {
    pub r: H256,
    pub s: H256,
    pub v: u8,
}

impl WireSignature {
    pub fn placeholder() -> Self {
        Self {
            r: H256::zero(),
            s: H256::zero(),
            v: 27,
        }
    }
    fn validate_recovery_id(&self) -> std::result::Result<(), ValidationError> {
        match self.v {
            27 | 28 => Ok(()),
            _ => Err(ValidationError::new("invalid_recovery_id")),
        }
    }
}

impl From<Signature> for WireSignature {
    fn from(signature: Signature) -> Self {
        let mut r = [0u8; 32];
        signature.r.to_big_endian(&mut r);
        let mut s = [0u8; 32];
        signature.s.to_big_endian(&mut s);
        Self {
            r: H256(r),
            s: H256(s),
            v: signature.v as u8,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRequest {
    pub action: L1Action,
    pub nonce: u64,
    pub signature: WireSignature,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_after: Option<u64>,
}

pub type UpdateLeverageRequest = ExchangeRequest;

impl ExchangeRequest {
    /// Request with zero nonce and zero signature, filled in by the executor.
    pub fn placeholder(action: L1Action, vault_address: Option<Address>, expires_after: Option<u64>) -> Self {
        Self {
            action,
            nonce: 0,
            signature: WireSignature::placeholder(),
            vault_address,
            expires_after,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.action.validate()?;
        self.signature.validate()?;
        Ok(())
    }

    /// Deserialize and validate a request coming from JSON.
    pub fn parse(value: serde_json::Value) -> Result<Self> {
        let request: Self = serde_json::from_value(value)?;
        request.validate()?;
        Ok(request)
    }
}

/// Caller input for `updateLeverage`. Unset optionals fall back to the session defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeverageParams {
    pub asset: u32,
    pub is_cross: bool,
    #[validate(range(min = 1))]
    pub leverage: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_after: Option<u64>,
}

impl UpdateLeverageParams {
    pub fn new(asset: u32, leverage: u32, is_cross: bool) -> Self {
        Self {
            asset,
            is_cross,
            leverage,
            vault_address: None,
            expires_after: None,
        }
    }
    pub fn with_vault_address(mut self, vault_address: Address) -> Self {
        self.vault_address = Some(vault_address);
        self
    }
    pub fn with_expires_after(mut self, expires_after: u64) -> Self {
        self.expires_after = Some(expires_after);
        self
    }
    pub fn action(&self) -> UpdateLeverageAction {
        UpdateLeverageAction {
            asset: self.asset,
            is_cross: self.is_cross,
            leverage: self.leverage,
        }
    }
}
