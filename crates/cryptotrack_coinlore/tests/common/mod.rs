//! In-process stand-in for the CORS proxy and the Coinlore upstream.
//!
//! The mock binds to a random local port and serves `/proxy?url=<encoded>`.
//! It decodes the upstream URL, strips the base and answers whatever canned
//! response was registered for the remaining sub-path.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use cryptotrack_coinlore::{CoinloreClient, CoinloreConfig};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const UPSTREAM_BASE: &str = "https://api.coinlore.net/api";

#[derive(Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

#[derive(Clone, Default)]
pub struct Upstream {
    routes: Arc<Mutex<HashMap<String, Canned>>>,
    hits: Arc<Mutex<Vec<String>>>,
}

impl Upstream {
    pub fn json(&self, sub_path: &str, body: Value) {
        self.respond(sub_path, StatusCode::OK, body.to_string());
    }

    pub fn respond(&self, sub_path: &str, status: StatusCode, body: impl Into<String>) {
        self.insert(
            sub_path,
            Canned {
                status,
                body: body.into(),
                delay: None,
            },
        );
    }

    pub fn slow(&self, sub_path: &str, delay: Duration, body: Value) {
        self.insert(
            sub_path,
            Canned {
                status: StatusCode::OK,
                body: body.to_string(),
                delay: Some(delay),
            },
        );
    }

    pub fn server_error(&self, sub_path: &str) {
        self.respond(sub_path, StatusCode::INTERNAL_SERVER_ERROR, "Server error");
    }

    /// Sub-paths requested so far, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    fn insert(&self, sub_path: &str, canned: Canned) {
        self.routes.lock().unwrap().insert(sub_path.to_string(), canned);
    }
}

async fn proxy(State(upstream): State<Upstream>, Query(params): Query<HashMap<String, String>>) -> Response {
    let Some(target) = params.get("url") else {
        return (StatusCode::BAD_REQUEST, "missing url").into_response();
    };
    let Some(sub_path) = target.strip_prefix(UPSTREAM_BASE) else {
        return (StatusCode::BAD_GATEWAY, format!("unexpected upstream {target}")).into_response();
    };

    upstream.hits.lock().unwrap().push(sub_path.to_string());
    let canned = upstream.routes.lock().unwrap().get(sub_path).cloned();

    match canned {
        Some(canned) => {
            if let Some(delay) = canned.delay {
                tokio::time::sleep(delay).await;
            }
            (canned.status, canned.body).into_response()
        }
        None => (StatusCode::NOT_FOUND, format!("no route for {sub_path}")).into_response(),
    }
}

/// Start the mock and return a client pointed at it.
pub async fn start() -> (CoinloreClient, Upstream) {
    let upstream = Upstream::default();
    let app = Router::new()
        .route("/proxy", get(proxy))
        .with_state(upstream.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });

    (client_for(&format!("http://{addr}/proxy?url=")), upstream)
}

/// Start a raw socket server that answers every connection with `response`
/// verbatim, then closes it. Used for replies axum cannot produce, such as a
/// custom reason phrase or a body shorter than its `Content-Length`.
pub async fn start_raw(response: &'static str) -> CoinloreClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    client_for(&format!("http://{addr}/proxy?url="))
}

pub fn client_for(proxy_prefix: &str) -> CoinloreClient {
    let config = CoinloreConfig::builder()
        .base_url(UPSTREAM_BASE)
        .proxy_prefix(proxy_prefix)
        .build();

    CoinloreClient::new(config).unwrap()
}

pub fn coin_json(id: &str, symbol: &str, rank: u32) -> Value {
    serde_json::json!({
        "id": id,
        "symbol": symbol,
        "name": symbol,
        "nameid": symbol.to_lowercase(),
        "rank": rank,
        "price_usd": "100000",
        "percent_change_24h": "1",
        "percent_change_1h": "1",
        "percent_change_7d": "1",
        "price_btc": "1",
        "market_cap_usd": "1",
        "volume_24h": 1,
        "volume_24a": 1,
        "csupply": "1",
        "tsupply": "1",
        "msupply": "1"
    })
}

pub fn global_json() -> Value {
    serde_json::json!({
        "coins_count": 1,
        "active_markets": 1,
        "total_volume": 1,
        "btc_d": "1",
        "eth_d": "1",
        "mcap_change": "1",
        "volume_change": "1",
        "avg_change_percent": "1",
        "volume_ath": 1,
        "mcap_ath": 1
    })
}
