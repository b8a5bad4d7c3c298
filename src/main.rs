use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tld_migrate::utils::{logger, validation};
use tld_migrate::{CliConfig, EvmRegistry, Migrator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting tld-migrate");

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if config.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    let private_key = std::env::var("MIGRATOR_PRIVATE_KEY")
        .context("MIGRATOR_PRIVATE_KEY is not set (export it or put it in a .env file)")?;
    validation::validate_non_empty_string("MIGRATOR_PRIVATE_KEY", &private_key)?;

    let signer: PrivateKeySigner = private_key
        .trim()
        .parse()
        .context("MIGRATOR_PRIVATE_KEY is not a valid private key")?;
    let account = signer.address();

    let rpc_url: url::Url = config.rpc_url.parse().context("invalid RPC URL")?;
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::new(signer))
        .connect_http(rpc_url);

    let balance = provider.get_balance(account).await?;
    tracing::info!("Minting domains with account: {account}");
    tracing::info!("Account balance: {balance} wei");

    let source = EvmRegistry::new(config.source, provider.clone());
    let dest = EvmRegistry::new(config.dest, provider);
    tracing::info!(
        "Migrating {} --> {}",
        source.address(),
        dest.address()
    );

    let migrator = Migrator::new(source, dest);

    match migrator.run().await {
        Ok(summary) => {
            tracing::info!(
                "✅ Migration completed: {} minted, {} skipped",
                summary.minted,
                summary.skipped
            );
            tracing::debug!("Summary: {}", serde_json::to_string(&summary)?);
            println!(
                "✅ Migration completed: {} domain(s) minted, {} skipped",
                summary.minted, summary.skipped
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Migration aborted: {}", e);
            eprintln!("❌ Migration aborted: {e}");
            eprintln!("💡 Re-running resumes safely: already-migrated domains are skipped");
            std::process::exit(1);
        }
    }
}
