use serde::{Deserialize, Serialize};

use crate::method::Method;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GlobalStats {
    pub coins_count: u64,
    pub active_markets: u64,
    pub total_volume: f64,
    pub btc_d: String,
    pub eth_d: String,
    pub mcap_change: String,
    pub volume_change: String,
    pub avg_change_percent: String,
    pub volume_ath: f64,
    pub mcap_ath: f64,
}

/// The API returns an array with a single object.
pub struct Global;

impl Method for Global {
    const PATH: &'static str = "/global";
    type Response = Vec<GlobalStats>;
}
