//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use fury_sdk::{ApiError, ClientConfig, ClientError, FurySdk};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Wallet used across tests.
pub const WALLET: &str = "FuRytmqsoo4mKQAhNXoB64JD4SsiVqxYkUKC6i1VaBot";

/// Token mint used across tests.
pub const MINT: &str = "Bq5nFQ82jBYcFKRzUSximpCmCg5t8L8tVMqsn612pump";

/// Starts a mock API server.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Builds an SDK pointed at `server`.
pub fn sdk_for(server: &MockServer) -> FurySdk {
    FurySdk::new(server.uri(), None).expect("sdk init")
}

/// Builds an SDK pointed at `server` that authenticates with `key`.
pub fn authed_sdk_for(server: &MockServer, key: &str) -> FurySdk {
    FurySdk::with_config(ClientConfig::new(server.uri()).with_api_key(key)).expect("sdk init")
}

/// Canned success body for transaction-building endpoints.
pub fn transactions_response() -> serde_json::Value {
    json!({"transactions": ["5h3kT1x", "9aQe2Lm"]})
}

/// Mounts a catch-all mock that fails verification if any request arrives.
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

/// Unwraps an API error, failing the test on any other variant.
pub fn into_api(err: ClientError) -> ApiError {
    match err {
        ClientError::Api(api) => api,
        other => panic!("expected API error, got {other:?}"),
    }
}

/// Serves one connection that promises a 500 byte body, sends a fragment
/// of it and hangs up. Returns the base URL to point an SDK at.
pub async fn truncated_body_server(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: 500\r\n\r\n{{\"message\":\"par"
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.flush().await;
    });

    format!("http://{addr}")
}
