// Shared helpers for the mock-server tests

use bassa_client::prelude::*;
use mockito::ServerGuard;

/// Single attempt, no waits: keeps hit counts deterministic
pub fn test_config(base_url: &str) -> Config {
    Config::new(base_url, 2000, 0).with_retry(RetryConfig::with_max_retries_and_backoff(0, 0, 0))
}

/// Unauthenticated client pointed at the mock server
pub fn test_client(server: &ServerGuard) -> Client {
    Client::new(test_config(&server.url())).expect("mock server URL is valid")
}

/// Client that already went through `/api/login` and holds `token`
pub async fn logged_in_client(server: &mut ServerGuard, token: &str) -> Client {
    let login = server
        .mock("POST", "/api/login")
        .with_status(200)
        .with_header("token", token)
        .with_body("{}")
        .create_async()
        .await;
    let client = test_client(server);
    client.login("rand", "pass").await.expect("login succeeds");
    login.assert_async().await;
    client
}

/// Client whose requests can never reach a server
pub fn offline_client() -> Client {
    Client::new(test_config("http://127.0.0.1:1")).expect("static URL is valid")
}
