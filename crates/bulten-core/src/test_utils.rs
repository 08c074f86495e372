//! Test utilities for bulten-core
//!
//! This module provides testing infrastructure including a mock server that
//! serves canned RSS feeds and Yahoo-style chart JSON, so adapter and
//! pipeline tests run without touching the network.

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Duration, Utc};
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// Mock feed/quote server for testing and development
pub struct MockFeedServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockFeedServer {
    /// Start the mock server on an available port
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/rss/:name", get(handle_feed))
            .route("/v8/finance/chart/:symbol", get(handle_chart));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Get the base URL for this mock server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockFeedServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// RSS endpoint. Publish times are generated at request time so the entries
/// always land inside (or, for the stale item, outside) the fetch window.
async fn handle_feed(Path(name): Path<String>) -> Response {
    let body = match name.as_str() {
        "bigpara" => bigpara_feed(),
        "bloomberght" => bloomberght_feed(),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/rss+xml")],
        body,
    )
        .into_response()
}

fn bigpara_feed() -> String {
    let fresh = (Utc::now() - Duration::hours(1)).to_rfc2822();
    let fresher = (Utc::now() - Duration::hours(2)).to_rfc2822();
    let stale = (Utc::now() - Duration::hours(20)).to_rfc2822();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
<title>Bigpara</title>
<link>https://www.bigpara.com</link>
<description>Piyasa haberleri</description>
<item>
<title>TCMB faiz kararı açıklandı</title>
<description>Merkez bankası politika faizini açıkladı</description>
<link>https://www.bigpara.com/haber/1</link>
<pubDate>{fresh}</pubDate>
</item>
<item>
<title>Endeks güne yatay başladı</title>
<link>https://www.bigpara.com/haber/2</link>
<pubDate>{fresher}</pubDate>
</item>
<item>
<title>Dünkü BIST kapanış özeti</title>
<description>Dünün değerlendirmesi</description>
<link>https://www.bigpara.com/haber/3</link>
<pubDate>{stale}</pubDate>
</item>
</channel>
</rss>"#
    )
}

fn bloomberght_feed() -> String {
    // No pubDate on purpose: the adapter must default the publish time.
    r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
<title>BloombergHT</title>
<link>https://www.bloomberght.com</link>
<description>Ekonomi haberleri</description>
<item>
<title>Sanayi üretiminde rekor artış</title>
<description>İhracat rakamları güçlü geldi</description>
<link>https://www.bloomberght.com/haber/1</link>
</item>
</channel>
</rss>"#
        .to_string()
}

/// Yahoo-style chart endpoint with fixed bars per symbol.
async fn handle_chart(Path(symbol): Path<String>) -> Json<serde_json::Value> {
    let bars = match symbol.as_str() {
        "XU100.IS" => Some((10000.0, 10250.0)),
        "USDTRY=X" => Some((41.0, 41.25)),
        _ => None,
    };

    let body = match bars {
        Some((open, close)) => serde_json::json!({
            "chart": {
                "result": [{
                    "meta": { "symbol": symbol },
                    "timestamp": [1730700000],
                    "indicators": {
                        "quote": [{
                            "open": [open],
                            "high": [close],
                            "low": [open],
                            "close": [close],
                            "volume": [0]
                        }]
                    }
                }],
                "error": null
            }
        }),
        None => serde_json::json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found" }
            }
        }),
    };

    Json(body)
}
