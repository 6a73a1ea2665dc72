mod render;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cryptotrack_coinlore::{CoinloreClient, CoinloreConfig, CoinloreError, RequestHandle};
use dotenv::dotenv;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cryptocurrency prices and statistics from Coinlore", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all coins
    List,
    /// Global overview followed by the coin list
    Home,
    /// Full ticker details for one coin
    Coin { id: String },
    /// Global cryptocurrency market data
    Global,
    /// Markets for a specific coin
    Markets { id: String },
    /// Social media stats for a specific coin
    Social { id: String },
}

/// Await a spawned query, aborting it on Ctrl-C.
async fn wait<T>(handle: RequestHandle<T>) -> anyhow::Result<T> {
    tokio::select! {
        result = handle => Ok(result?),
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted, aborting request");
            Err(CoinloreError::Cancelled.into())
        }
    }
}

async fn run(client: CoinloreClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List => {
            let coins = wait(client.spawn(|c| async move { c.list_all_coins().await }))
                .await
                .context("Error fetching tickers")?;
            let mut out = io::stdout().lock();
            render::coin_list(&mut out, &coins)?;
            out.flush()?;
        }

        Command::Home => {
            let global = client.spawn(|c| async move { c.get_global_stats().await });
            let coins = client.spawn(|c| async move { c.list_all_coins().await });

            let (global, coins) = tokio::try_join!(
                async { wait(global).await.context("Error fetching global market data") },
                async { wait(coins).await.context("Error fetching tickers") },
            )?;

            let mut out = io::stdout().lock();
            render::global_stats(&mut out, &global)?;
            writeln!(out)?;
            render::coin_list(&mut out, &coins)?;
            out.flush()?;
        }

        Command::Coin { id } => {
            let lookup = id.clone();
            let envelope = wait(client.spawn(|c| async move { c.get_coin_by_id(&lookup).await }))
                .await
                .with_context(|| format!("Error fetching ticker data for coin {id}"))?;
            let mut out = io::stdout().lock();
            render::coin_details(&mut out, &envelope)?;
            out.flush()?;
        }

        Command::Global => {
            let stats = wait(client.spawn(|c| async move { c.get_global_stats().await }))
                .await
                .context("Error fetching global market data")?;
            let mut out = io::stdout().lock();
            render::global_stats(&mut out, &stats)?;
            out.flush()?;
        }

        Command::Markets { id } => {
            let lookup = id.clone();
            let markets = wait(client.spawn(|c| async move { c.get_markets_for_coin(&lookup).await }))
                .await
                .with_context(|| format!("Error fetching markets for coin {id}"))?;
            let mut out = io::stdout().lock();
            render::markets(&mut out, &id, &markets)?;
            out.flush()?;
        }

        Command::Social { id } => {
            let lookup = id.clone();
            let stats = wait(client.spawn(|c| async move { c.get_social_stats_for_coin(&lookup).await }))
                .await
                .with_context(|| format!("Error fetching social stats for coin {id}"))?;
            let mut out = io::stdout().lock();
            render::social(&mut out, &stats)?;
            out.flush()?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = CoinloreConfig::from_env();
    debug!(base_url = %config.base_url, proxy_prefix = %config.proxy_prefix, "loaded configuration");

    let client = CoinloreClient::new(config).context("Failed to build Coinlore client")?;

    run(client, args.command).await
}
