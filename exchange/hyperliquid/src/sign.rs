use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Signature, H256};

use crate::model::agent::Agent;
use crate::model::exchange::request::HyperliquidChain;

/// Create a signature for the given connection id
pub async fn sign_l1_action(
    chain: HyperliquidChain,
    wallet: &LocalWallet,
    connection_id: H256,
) -> crate::error::Result<Signature> {
    let payload = Agent {
        source: chain.agent_source().to_string(),
        connection_id,
    };
    Ok(wallet.sign_typed_data(&payload).await?)
}
