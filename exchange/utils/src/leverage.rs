use std::sync::Arc;

use clap::Parser;
use ethers::signers::LocalWallet;
use ethers::types::Address;
use eyre::Context;
use hyperliquid_exchange::model::exchange::request::UpdateLeverageParams;
use hyperliquid_exchange::utils::now_ms;
use hyperliquid_exchange::{HyperliquidConfig, HyperliquidExchangeSession, RequestOptions};
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser, Debug, Clone)]
pub struct UpdateLeverageArgs {
    /// Coin to set leverage for
    /// BTC or PURR/USDC or a numeric asset id
    pub coin_or_asset: String,
    #[clap(long)]
    pub leverage: u32,
    /// Isolated margin instead of cross
    #[clap(long)]
    pub isolated: bool,
    #[clap(long)]
    pub vault_address: Option<String>,
    /// Reject the action if it reaches the exchange later than this many milliseconds from now
    #[clap(long)]
    pub expires_in_ms: Option<u64>,
    /// Print the signed request instead of sending it
    #[clap(long)]
    pub dry_run: bool,
}

pub fn build_params(args: &UpdateLeverageArgs, asset: u32) -> eyre::Result<UpdateLeverageParams> {
    let mut params = UpdateLeverageParams::new(asset, args.leverage, !args.isolated);
    if let Some(vault_address) = &args.vault_address {
        let vault_address: Address = vault_address
            .parse()
            .with_context(|| format!("invalid vault address {}", vault_address))?;
        params = params.with_vault_address(vault_address);
    }
    if let Some(expires_in_ms) = args.expires_in_ms {
        params = params.with_expires_after(now_ms().saturating_add(expires_in_ms));
    }
    Ok(params)
}

pub async fn update_leverage(
    args: UpdateLeverageArgs,
    config: &HyperliquidConfig,
    private_key: &str,
) -> eyre::Result<()> {
    info!(
        "Setting leverage for {} to {} on {}",
        args.coin_or_asset, args.leverage, config.network
    );
    let wallet: LocalWallet = private_key.parse().with_context(|| "invalid private key")?;
    let session = HyperliquidExchangeSession::from_config(Arc::new(wallet), config);

    let asset = match args.coin_or_asset.parse::<u32>() {
        Ok(asset) => asset,
        Err(_) => {
            session
                .info()
                .resolve_asset(&args.coin_or_asset)
                .await
                .with_context(|| format!("resolve {}", args.coin_or_asset))?
                .asset
        }
    };
    let params = build_params(&args, asset)?;

    if args.dry_run {
        let request = session.prepare_update_leverage(&params).await?;
        let request = session
            .build_signed_request(request.action, request.vault_address, request.expires_after)
            .await?;
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let signal = CancellationToken::new();
    let ctrl_c = {
        let signal = signal.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                signal.cancel();
            }
        })
    };
    let result = session
        .update_leverage(params, RequestOptions::with_signal(signal))
        .await;
    ctrl_c.abort();
    let response = result.with_context(|| "update leverage")?;
    info!("Leverage updated for asset {}: {:?}", asset, response);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[clap(flatten)]
        args: UpdateLeverageArgs,
    }

    fn parse(args: &[&str]) -> UpdateLeverageArgs {
        TestCli::try_parse_from(std::iter::once("test").chain(args.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_cross_by_default() -> eyre::Result<()> {
        let args = parse(&["ETH", "--leverage", "5"]);
        let params = build_params(&args, 1)?;
        assert_eq!(params.asset, 1);
        assert_eq!(params.leverage, 5);
        assert!(params.is_cross);
        assert_eq!(params.vault_address, None);
        assert_eq!(params.expires_after, None);
        Ok(())
    }

    #[test]
    fn test_isolated_with_vault_and_expiry() -> eyre::Result<()> {
        let args = parse(&[
            "7",
            "--leverage",
            "3",
            "--isolated",
            "--vault-address",
            "0x2222222222222222222222222222222222222222",
            "--expires-in-ms",
            "60000",
        ]);
        let before = now_ms();
        let params = build_params(&args, 7)?;
        assert!(!params.is_cross);
        assert_eq!(params.vault_address, Some(Address::repeat_byte(0x22)));
        assert!(params.expires_after.unwrap() >= before + 60_000);
        Ok(())
    }

    #[test]
    fn test_huge_expiry_offset_saturates() -> eyre::Result<()> {
        let max = u64::MAX.to_string();
        let args = parse(&["BTC", "--leverage", "2", "--expires-in-ms", &max]);
        let params = build_params(&args, 0)?;
        assert_eq!(params.expires_after, Some(u64::MAX));
        Ok(())
    }

    #[test]
    fn test_invalid_vault_address() {
        let args = parse(&["BTC", "--leverage", "2", "--vault-address", "0x12"]);
        assert!(build_params(&args, 0).is_err());
    }
}
