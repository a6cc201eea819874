//! Test utilities for CLI testing
//!
//! Provides a mock provider API (server list and config downloads) and an
//! in-memory fetcher.

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use nordservers_core::NordError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use crate::client::Fetcher;

/// Canned server list.
pub const SERVER_LIST_JSON: &str = r#"[
    {"id": 1, "hostname": "us1.nordvpn.com", "name": "United States #1", "load": 12,
     "locations": [{"country": {"name": "United States", "code": "US", "city": {"name": "New York"}}}],
     "groups": [
        {"title": "Standard VPN servers", "type": {"identifier": "legacy_group_category"}},
        {"title": "The Americas", "type": {"identifier": "regions"}}
     ],
     "technologies": [{"identifier": "openvpn_tcp"}, {"identifier": "openvpn_udp"}]},
    {"id": 2, "hostname": "us2.nordvpn.com", "name": "United States #2", "load": 40,
     "locations": [{"country": {"name": "United States", "code": "US", "city": {"name": "New York"}}}],
     "groups": [{"title": "Standard VPN servers", "type": {"identifier": "legacy_group_category"}}],
     "technologies": [{"identifier": "openvpn_tcp"}]},
    {"id": 3, "hostname": "us-ob1.nordvpn.com", "name": "United States #900", "load": 3,
     "locations": [{"country": {"name": "United States", "code": "US", "city": {"name": "New York"}}}],
     "groups": [{"title": "Obfuscated Servers", "type": {"identifier": "legacy_group_category"}}],
     "technologies": [{"identifier": "openvpn_xor_tcp"}, {"identifier": "openvpn_xor_udp"}]},
    {"id": 4, "hostname": "us-ded1.nordvpn.com", "name": "United States #950", "load": 1,
     "locations": [{"country": {"name": "United States", "code": "US", "city": {"name": "New York"}}}],
     "groups": [{"title": "Dedicated IP", "type": {"identifier": "legacy_group_category"}}],
     "technologies": [{"identifier": "openvpn_tcp"}]},
    {"id": 5, "hostname": "de1.nordvpn.com", "name": "Germany #1", "load": 20,
     "locations": [{"country": {"name": "Germany", "code": "DE", "city": {"name": "Berlin"}}}],
     "groups": [
        {"title": "P2P", "type": {"identifier": "legacy_group_category"}},
        {"title": "Standard VPN servers", "type": {"identifier": "legacy_group_category"}},
        {"title": "Europe", "type": {"identifier": "regions"}}
     ],
     "technologies": [{"identifier": "openvpn_tcp"}]},
    {"id": 6, "hostname": "fr1.nordvpn.com", "name": "France #1", "load": 15,
     "locations": [{"country": {"name": "France", "code": "FR", "city": {"name": "Paris"}}}],
     "groups": [{"title": "Standard VPN servers", "type": {"identifier": "legacy_group_category"}}],
     "technologies": [{"identifier": "openvpn_udp"}]},
    {"id": 7, "hostname": "ch-fr1.nordvpn.com", "name": "Switzerland - France #1", "load": 25,
     "locations": [{"country": {"name": "Switzerland", "code": "CH", "city": {"name": "Zurich"}}}],
     "groups": [{"title": "Double VPN", "type": {"identifier": "legacy_group_category"}}],
     "technologies": [{"identifier": "openvpn_tcp"}]},
    {"id": 8, "hostname": "ch-onion1.nordvpn.com", "name": "Switzerland Onion #1", "load": 30,
     "locations": [{"country": {"name": "Switzerland", "code": "CH", "city": {"name": "Zurich"}}}],
     "groups": [{"title": "Onion Over VPN", "type": {"identifier": "legacy_group_category"}}],
     "technologies": [{"identifier": "openvpn_tcp"}]}
]"#;

/// Mock server state
#[derive(Debug, Clone)]
pub struct MockServerState {
    /// Body served at `/v1/servers`
    pub server_list: Arc<String>,
    /// Config files keyed by (directory, file name)
    pub config_files: Arc<HashMap<(String, String), String>>,
    /// Paths of every request served, in order
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl Default for MockServerState {
    fn default() -> Self {
        let mut config_files = HashMap::new();
        config_files.insert(
            ("ovpn_udp".to_string(), "us1.nordvpn.com.udp.ovpn".to_string()),
            "client\nremote us1.nordvpn.com 1194 udp\n".to_string(),
        );
        config_files.insert(
            ("ovpn_tcp".to_string(), "us1.nordvpn.com.tcp.ovpn".to_string()),
            "client\nremote us1.nordvpn.com 443 tcp\n".to_string(),
        );
        config_files.insert(
            ("ovpn_xor_tcp".to_string(), "us-ob1.nordvpn.com.tcp.ovpn".to_string()),
            "client\nremote us-ob1.nordvpn.com 443 tcp\nscramble obfuscate s3cr3t\n".to_string(),
        );

        Self {
            server_list: Arc::new(SERVER_LIST_JSON.to_string()),
            config_files: Arc::new(config_files),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock provider API
#[derive(Debug)]
pub struct MockServer {
    state: MockServerState,
}

impl MockServer {
    /// Create a new mock server
    pub fn new() -> Self {
        Self {
            state: MockServerState::default(),
        }
    }

    /// Replace the served server list
    pub fn with_server_list(mut self, body: &str) -> Self {
        self.state.server_list = Arc::new(body.to_string());
        self
    }

    /// Start the mock server and return its base URL
    pub async fn start(self) -> Result<(Self, String)> {
        let app = self.create_router();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();

        let server_url = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock server error: {}", e);
            }
        });

        // Give the server a moment to start and verify it's running
        for _ in 0..20 {
            if tokio::net::TcpStream::connect(("127.0.0.1", port))
                .await
                .is_ok()
            {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        Ok((self, server_url))
    }

    /// Paths requested so far, without query strings
    pub fn requested_paths(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    fn create_router(&self) -> Router {
        Router::new()
            .route("/v1/servers", get(server_list_handler))
            .route("/configs/files/:dir/servers/:file", get(config_file_handler))
            .with_state(self.state.clone())
    }
}

async fn server_list_handler(State(state): State<MockServerState>) -> String {
    state.requests.lock().unwrap().push("/v1/servers".to_string());
    state.server_list.as_ref().clone()
}

async fn config_file_handler(
    Path((dir, file)): Path<(String, String)>,
    State(state): State<MockServerState>,
) -> Result<String, StatusCode> {
    state
        .requests
        .lock()
        .unwrap()
        .push(format!("/configs/files/{}/servers/{}", dir, file));

    state
        .config_files
        .get(&(dir, file))
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)
}

/// Fetcher that serves [`SERVER_LIST_JSON`] for any server-list URL
/// without touching the network.
#[derive(Debug, Default)]
pub struct StaticFetcher;

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch_text(&self, url: &str) -> nordservers_core::Result<String> {
        if url.contains("/v1/servers") {
            Ok(SERVER_LIST_JSON.to_string())
        } else {
            Err(NordError::Network {
                url: url.to_string(),
                reason: "not available offline".to_string(),
            })
        }
    }
}
