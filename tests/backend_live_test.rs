//! Live-backend connectivity tests.
//!
//! These hit a real backend configured through the environment and are
//! gated behind the `api` feature so normal test runs stay offline.

use excuseme::{AuthClient, BackendClient, Config, Language};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_excuse_endpoint_connectivity() {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let client = BackendClient::new(&config);

    let excuse = client
        .fetch_excuse(Language::En)
        .await
        .expect("Failed to fetch excuse");

    assert!(!excuse.is_empty(), "Excuse should not be empty");
    eprintln!("Excuse: {}", excuse);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_sign_in_and_session_check() {
    dotenvy::dotenv().ok();

    let email = std::env::var("EXCUSEME_TEST_EMAIL").expect("EXCUSEME_TEST_EMAIL not set");
    let password = std::env::var("EXCUSEME_TEST_PASSWORD").expect("EXCUSEME_TEST_PASSWORD not set");

    let config = Config::from_env();
    let auth = AuthClient::new(&config);

    let session = auth
        .sign_in(&email, &password)
        .await
        .expect("Failed to sign in");
    assert!(!session.access_token.is_empty());
    assert!(auth.is_authenticated());

    let user = auth.fetch_user().await.expect("Failed to fetch user");
    assert_eq!(user.id, session.user.id);

    auth.sign_out().await.expect("Failed to sign out");
    assert!(!auth.is_authenticated());
}
