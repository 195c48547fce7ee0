pub use config::{ExpiresAfter, HyperliquidConfig};
pub use error::{Error, Result};
pub use rest::exchange::HyperliquidExchangeSession;
pub use rest::info::HyperliquidInfoClient;
pub use rest::HyperliquidRestClient;
pub use transport::{RequestOptions, Transport};
pub use urls::HyperliquidUrls;

mod error;
mod sign;
mod urls;

pub mod config;
pub mod model;
pub mod nonce;
pub mod rest;
pub mod transport;
pub mod utils;
