use ethers::{
    contract::{Eip712, EthAbiType},
    types::H256,
};

/// Phantom agent signed for every L1 action. `connection_id` carries the action hash.
#[derive(Eip712, Clone, Debug, EthAbiType)]
#[eip712(
    name = "Exchange",
    version = "1",
    chain_id = 1337,
    verifying_contract = "0x0000000000000000000000000000000000000000"
)]
pub struct Agent {
    pub source: String,
    pub connection_id: H256,
}
