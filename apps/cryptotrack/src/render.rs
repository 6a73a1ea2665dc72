use chrono::DateTime;
use cryptotrack_coinlore::{Coin, CoinListEnvelope, GlobalStats, MarketQuote, SocialStats};
use std::io::{self, Write};

pub fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| secs.to_string())
}

fn trend(change: Option<f64>) -> &'static str {
    match change {
        Some(c) if c > 0.0 => "▲",
        Some(c) if c < 0.0 => "▼",
        _ => "-",
    }
}

pub fn coin_list(out: &mut impl Write, coins: &[Coin]) -> io::Result<()> {
    if coins.is_empty() {
        return writeln!(out, "No coins available");
    }

    writeln!(out, "Cryptocurrency Tickers\n")?;
    for coin in coins {
        writeln!(out, "#{} - {} ({})", coin.rank, coin.name, coin.symbol)?;
        writeln!(out, "  Price: ${}", coin.price_usd)?;
        writeln!(
            out,
            "  24h Change: {}% {}",
            coin.percent_change_24h,
            trend(coin.change_24h_value())
        )?;
    }
    Ok(())
}

pub fn coin_details(out: &mut impl Write, envelope: &CoinListEnvelope) -> io::Result<()> {
    if envelope.data.is_empty() {
        writeln!(out, "No coin matched")?;
    }

    for coin in &envelope.data {
        writeln!(out, "#{} - {} ({})", coin.rank, coin.name, coin.symbol)?;
        writeln!(out, "  ID: {}", coin.id)?;
        writeln!(out, "  Price: ${}", coin.price_usd)?;
        writeln!(out, "  Price (BTC): {}", coin.price_btc)?;
        writeln!(out, "  Market Cap: ${}", coin.market_cap_usd)?;
        writeln!(out, "  1h Change: {}%", coin.percent_change_1h)?;
        writeln!(out, "  24h Change: {}%", coin.percent_change_24h)?;
        writeln!(out, "  7d Change: {}%", coin.percent_change_7d)?;
        writeln!(out, "  24h Volume: ${:.2}", coin.volume_24h)?;
        writeln!(out, "  Circulating Supply: {}", coin.csupply)?;
        writeln!(out, "  Total Supply: {}", coin.tsupply)?;
        writeln!(out, "  Max Supply: {}", coin.msupply)?;
        writeln!(out)?;
    }

    writeln!(out, "Total coins: {}", envelope.info.coins_num)?;
    writeln!(out, "Timestamp: {}", format_timestamp(envelope.info.time))
}

pub fn global_stats(out: &mut impl Write, stats: &GlobalStats) -> io::Result<()> {
    writeln!(out, "Global Crypto Market Overview\n")?;
    writeln!(out, "Total cryptocurrencies: {}", stats.coins_count)?;
    writeln!(out, "Active markets: {}", stats.active_markets)?;
    writeln!(out, "Total 24h volume: ${:.2}", stats.total_volume)?;
    writeln!(out, "Bitcoin dominance: {}%", stats.btc_d)?;
    writeln!(out, "Ethereum dominance: {}%", stats.eth_d)?;
    writeln!(out, "Market cap change (24h): {}%", stats.mcap_change)?;
    writeln!(out, "Volume change (24h): {}%", stats.volume_change)?;
    writeln!(out, "Average price change (24h): {}%", stats.avg_change_percent)?;
    writeln!(out, "Volume ATH: ${:.2}", stats.volume_ath)?;
    writeln!(out, "Market cap ATH: ${:.2}", stats.mcap_ath)
}

pub fn markets(out: &mut impl Write, coin_id: &str, markets: &[MarketQuote]) -> io::Result<()> {
    writeln!(out, "Markets for Coin ID: {coin_id}\n")?;
    writeln!(out, "Total markets: {}\n", markets.len())?;

    for (i, market) in markets.iter().enumerate() {
        writeln!(out, "{}. {} - {}/{}", i + 1, market.name, market.base, market.quote)?;
        writeln!(out, "   Price: ${:.8}", market.price_usd)?;
        writeln!(out, "   Volume: ${:.2}", market.volume_usd)?;
        writeln!(out, "   Last Updated: {}", format_timestamp(market.time))?;
    }
    Ok(())
}

pub fn social(out: &mut impl Write, stats: &SocialStats) -> io::Result<()> {
    writeln!(out, "Social Media Stats\n")?;
    writeln!(out, "Reddit:")?;
    writeln!(out, "  Subscribers: {}", stats.reddit.subscribers)?;
    writeln!(out, "  Avg. Active Users: {}", stats.reddit.avg_active_users)?;
    writeln!(out, "\nTwitter:")?;
    writeln!(out, "  Followers: {}", stats.twitter.followers_count)?;
    writeln!(out, "  Tweets: {}", stats.twitter.status_count)
}
