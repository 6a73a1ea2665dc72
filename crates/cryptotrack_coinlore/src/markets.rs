use serde::{Deserialize, Serialize};

use crate::method::Method;

/// One trading venue quoting a coin.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MarketQuote {
    pub name: String,
    pub base: String,
    pub quote: String,
    pub price: f64,
    pub price_usd: f64,
    pub volume: f64,
    pub volume_usd: f64,
    pub time: i64,
}

pub struct Markets;

impl Method for Markets {
    const PATH: &'static str = "/markets/";
    type Response = Vec<MarketQuote>;
}
