use crate::common::{logged_in_client, offline_client, test_config};
use bassa_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn start_download_with_empty_key_uses_default() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, "tok").await;
    let mock = server
        .mock("GET", "/api/download/start")
        .match_header("token", "tok")
        .match_header("key", "123456789")
        .with_status(200)
        .with_body(r#"{"status":"started"}"#)
        .create_async()
        .await;

    client.start_download("").await.expect("start");
    mock.assert_async().await;
}

#[tokio::test]
async fn kill_download_sends_given_key() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, "tok").await;
    let mock = server
        .mock("GET", "/api/download/kill")
        .match_header("key", "secret-key")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    client.kill_download("secret-key").await.expect("kill");
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_key_without_default_is_rejected() {
    let client = Client::new(
        test_config("http://127.0.0.1:1").with_defaults(RequestDefaults::strict()),
    )
    .expect("config");
    let err = client.start_download("").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(ref msg) if msg.contains("server_key")));
}

#[tokio::test]
async fn add_download_posts_link() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, "tok").await;
    let mock = server
        .mock("POST", "/api/download")
        .match_body(Matcher::Json(json!({
            "link": "http://www.scorelab.org/assets/img/score.jpg"
        })))
        .with_status(200)
        .with_body(r#"{"status":"success"}"#)
        .create_async()
        .await;

    client
        .add_download("http://www.scorelab.org/assets/img/score.jpg")
        .await
        .expect("add");
    mock.assert_async().await;
}

#[tokio::test]
async fn add_download_requires_link() {
    let err = offline_client().add_download("").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(ref msg) if msg.contains("link")));
}

#[tokio::test]
async fn remove_rate_and_get_download_use_id_segment() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, "tok").await;
    let remove = server
        .mock("DELETE", "/api/download/42")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let rate = server
        .mock("POST", "/api/download/42")
        .match_body(Matcher::Json(json!({"rate": 4})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let get = server
        .mock("GET", "/api/download/42")
        .with_status(200)
        .with_body(r#"{"id":42,"status":1}"#)
        .create_async()
        .await;

    client.remove_download(42).await.expect("remove");
    client.rate_download(42, 4).await.expect("rate");
    let response = client.get_download(42).await.expect("get");
    assert_eq!(response.get("id"), Some(&json!(42)));

    remove.assert_async().await;
    rate.assert_async().await;
    get.assert_async().await;
}

#[tokio::test]
async fn zero_rating_is_still_sent() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, "tok").await;
    let mock = server
        .mock("POST", "/api/download/7")
        .match_body(Matcher::Json(json!({"rate": 0})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    client.rate_download(7, 0).await.expect("rate");
    mock.assert_async().await;
}

#[tokio::test]
async fn get_downloads_targets_limit_path() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server, "tok").await;
    let mock = server
        .mock("GET", "/api/downloads/5")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    client.get_downloads(5).await.expect("downloads");
    mock.assert_async().await;
}

#[tokio::test]
async fn get_downloads_rejects_zero_limit() {
    let err = offline_client().get_downloads(0).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(err.kind(), ErrorKind::Validation);
}
