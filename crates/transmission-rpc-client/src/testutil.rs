//! Shared test utilities and fixtures.

use std::time::Duration;

use serde_json::{Value, json};
use transmission_rpc_types::TransmissionError;

use crate::client::TransmissionClient;
use crate::transport::{HttpRequest, HttpResponse, MockRpcTransport, RpcTransport};

pub(crate) const TEST_URL: &str = "http://localhost:9091/transmission/rpc";

pub(crate) fn make_test_client(mock: MockRpcTransport) -> TransmissionClient<MockRpcTransport> {
    make_test_client_with_retries(mock, 2)
}

pub(crate) fn make_test_client_with_retries(
    mock: MockRpcTransport,
    max_retries: i64,
) -> TransmissionClient<MockRpcTransport> {
    TransmissionClient::builder()
        .url(TEST_URL)
        .max_retries(max_retries)
        .transport(mock)
        .build()
        .unwrap()
}

/// What the daemon sends when the session id is missing or stale.
pub(crate) fn conflict(session_id: &str) -> HttpResponse {
    HttpResponse {
        status: 409,
        session_id: Some(session_id.to_string()),
        body: b"<h1>409: Conflict</h1>".to_vec(),
    }
}

/// A 409 that does not hand out a new id.
pub(crate) fn conflict_without_session_id() -> HttpResponse {
    HttpResponse {
        session_id: None,
        ..conflict("")
    }
}

pub(crate) fn success(arguments: Value) -> HttpResponse {
    reply(200, json!({ "result": "success", "arguments": arguments }))
}

pub(crate) fn reply(status: u16, body: Value) -> HttpResponse {
    HttpResponse {
        status,
        session_id: None,
        body: serde_json::to_vec(&body).unwrap(),
    }
}

/// The JSON envelope a request carried.
pub(crate) fn body_of(request: &HttpRequest) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}

pub(crate) fn make_test_torrents() -> Value {
    json!({
        "torrents": [
            {
                "id": 123123,
                "name": "ubuntu-24.04-desktop-amd64.iso",
                "hashString": "3f19b149f53a50e14fc0b79926a391896eabab6f",
                "percentDone": 0.0138,
                "status": 4,
                "trackerStats": [
                    { "id": 0, "host": "https://torrent.ubuntu.com:443", "lastScrapeTimedOut": 0 }
                ]
            },
            {
                "id": 456456,
                "name": "debian-12.5.0-amd64-netinst.iso",
                "hashString": "2b66980093bc11806fab50cb3cb41835b95a0362",
                "percentDone": 1.0,
                "status": 6,
                "trackerStats": [
                    { "id": 0, "host": "http://bttracker.debian.org:6969", "lastScrapeTimedOut": 1 }
                ]
            }
        ]
    })
}

pub(crate) fn make_test_stats() -> Value {
    json!({
        "activeTorrentCount": 1,
        "downloadSpeed": 2048,
        "pausedTorrentCount": 0,
        "torrentCount": 1,
        "uploadSpeed": 1024,
        "cumulative-stats": {
            "uploadedBytes": 500,
            "downloadedBytes": 1000,
            "filesAdded": 3,
            "sessionCount": 2,
            "secondsActive": 7200
        },
        "current-stats": {
            "uploadedBytes": 100,
            "downloadedBytes": 200,
            "filesAdded": 1,
            "sessionCount": 1,
            "secondsActive": 3600
        }
    })
}

/// Transport whose round trips never finish in test time.
#[derive(Debug)]
pub(crate) struct StalledTransport;

impl RpcTransport for StalledTransport {
    async fn post(&self, _request: HttpRequest) -> Result<HttpResponse, TransmissionError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(HttpResponse::default())
    }
}
