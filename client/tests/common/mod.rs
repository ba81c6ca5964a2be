//! Common test utilities for integration tests
//!
//! Each test gets an isolated wiremock server standing in for the remote
//! API, plus a client pointed at it.

#![allow(dead_code)]

use std::sync::{Arc, Once};
use training_diary_client::{ApiClient, AuthStore, ClientConfig};
use wiremock::MockServer;

/// Test harness wrapping a mock API server and a client bound to it
pub struct TestApi {
    pub server: MockServer,
    pub client: Arc<ApiClient>,
}

impl TestApi {
    /// Start a fresh mock server and a client configured against it
    pub async fn new() -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let client = Arc::new(ApiClient::new(&ClientConfig::for_base_url(server.uri())));
        Self { server, client }
    }

    /// Build an auth store sharing this harness's client
    pub fn auth_store(&self) -> AuthStore {
        AuthStore::new(Arc::clone(&self.client))
    }
}

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("training_diary_client=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}
