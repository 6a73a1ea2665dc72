use serde::{Deserialize, Serialize};

use crate::method::Method;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CoinListEnvelope {
    pub data: Vec<Coin>,
    pub info: ListInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ListInfo {
    pub coins_num: u64,
    pub time: i64,
}

/// A single ticker row. Prices, percentages and supplies arrive as decimal
/// strings and are kept that way.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Coin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub nameid: String,
    pub rank: u32,
    pub price_usd: String,
    pub percent_change_24h: String,
    pub percent_change_1h: String,
    pub percent_change_7d: String,
    pub price_btc: String,
    pub market_cap_usd: String,
    #[serde(alias = "volume24")]
    pub volume_24h: f64,
    #[serde(alias = "volume24a")]
    pub volume_24a: f64,
    pub csupply: String,
    pub tsupply: String,
    pub msupply: String,
}

impl Coin {
    pub fn price_usd_value(&self) -> Option<f64> {
        parse_decimal(&self.price_usd)
    }

    pub fn change_24h_value(&self) -> Option<f64> {
        parse_decimal(&self.percent_change_24h)
    }

    pub fn market_cap_usd_value(&self) -> Option<f64> {
        parse_decimal(&self.market_cap_usd)
    }
}

/// Parse a decimal-as-string field. Blank or non-numeric input gives `None`.
pub fn parse_decimal(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// All coins, wrapped in the list envelope.
pub struct Tickers;

impl Method for Tickers {
    const PATH: &'static str = "/tickers/";
    type Response = CoinListEnvelope;
}

/// Coin(s) selected by id, wrapped in the list envelope.
pub struct Ticker;

impl Method for Ticker {
    const PATH: &'static str = "/ticker/";
    type Response = CoinListEnvelope;
}
