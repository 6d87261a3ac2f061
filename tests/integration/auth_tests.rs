use crate::common;
use bassa_client::prelude::*;
use tracing::info;

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = common::login().await;
    let session = client.get_session().await.expect("session after login");
    assert!(!session.token.is_empty(), "Token should be present");
    info!("Login successful for {}", session.username);
}

#[tokio::test]
#[ignore]
async fn test_get_users() {
    let client = common::login().await;
    let users = client.get_users().await.expect("users");
    info!("Users: {}", users.pretty().expect("pretty"));
}

#[tokio::test]
#[ignore]
async fn test_signup_and_block_roundtrip() {
    let client = common::login().await;
    client
        .add_regular_user("blockeduser", "blockedpass", "blockedemail@scorelab.org")
        .await
        .expect("signup");
    client.block_user("blockeduser").await.expect("block");
    client.unblock_user("blockeduser").await.expect("unblock");
    client.remove_user("blockeduser").await.expect("remove");
}
