//! Integration tests for the auth state store

mod common;

use serde_json::json;
use std::sync::{Arc, Mutex};
use training_diary_client::{ApiClient, AuthStore, ClientConfig};
use training_diary_shared::types::UserResponse;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_login(server: &wiremock::MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/api/v1/users/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "token_type": "bearer"
        })))
        .mount(server)
        .await;
}

async fn mount_me(server: &wiremock::MockServer, id: i64, username: &str) {
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": format!("{username}@example.com"),
            "username": username,
            "id": id
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_transitions_to_authenticated() {
    let api = common::TestApi::new().await;
    let store = api.auth_store();
    mount_login(&api.server, "fresh-token").await;
    mount_me(&api.server, 1, "lifter").await;

    assert!(store.current_user().is_none());

    let user = store.login("lifter", "hunter2hunter2").await.unwrap();
    assert_eq!(user.username, "lifter");
    assert_eq!(store.current_user(), Some(user));
}

#[tokio::test]
async fn test_login_sends_credentials_and_uses_new_token() {
    let api = common::TestApi::new().await;
    let store = api.auth_store();

    Mock::given(method("POST"))
        .and(path("/api/v1/users/login"))
        .and(body_json(json!({"username": "lifter", "password": "hunter2hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-token",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&api.server)
        .await;
    mount_me(&api.server, 1, "lifter").await;

    store.login("lifter", "hunter2hunter2").await.unwrap();

    let requests = api.server.received_requests().await.unwrap();
    let me_request = requests
        .iter()
        .find(|r| r.url.path() == "/api/v1/users/me")
        .unwrap();
    assert_eq!(
        me_request.headers.get("authorization").unwrap(),
        "Bearer fresh-token"
    );
}

#[tokio::test]
async fn test_login_failure_leaves_prior_session_untouched() {
    let api = common::TestApi::new().await;
    let store = api.auth_store();
    mount_login(&api.server, "first-token").await;
    mount_me(&api.server, 1, "lifter").await;

    let prior = store.login("lifter", "hunter2hunter2").await.unwrap();

    // Wrong password now: server rejects, held user must not be clobbered
    api.server.reset().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/users/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Incorrect username or password"
        })))
        .mount(&api.server)
        .await;

    let result = store.login("lifter", "wrong").await;
    assert!(result.is_err());
    assert_eq!(store.current_user(), Some(prior));
}

#[tokio::test]
async fn test_logout_clears_token_and_state() {
    let api = common::TestApi::new().await;
    let store = api.auth_store();
    mount_login(&api.server, "fresh-token").await;
    mount_me(&api.server, 1, "lifter").await;

    store.login("lifter", "hunter2hunter2").await.unwrap();
    store.logout();
    assert!(store.current_user().is_none());

    // Requests after logout carry no Authorization header at all
    api.server.reset().await;
    mount_me(&api.server, 1, "lifter").await;
    api.client.get_current_user().await.unwrap();

    let requests = api.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_check_auth_success_sets_user() {
    let api = common::TestApi::new().await;
    let store = api.auth_store();
    mount_me(&api.server, 3, "returning").await;

    let user = store.check_auth().await;
    assert_eq!(user.as_ref().map(|u| u.id), Some(3));
    assert_eq!(store.current_user(), user);
}

#[tokio::test]
async fn test_check_auth_http_failure_resets_to_unauthenticated() {
    let api = common::TestApi::new().await;
    let store = api.auth_store();
    mount_login(&api.server, "expiring-token").await;
    mount_me(&api.server, 1, "lifter").await;

    store.login("lifter", "hunter2hunter2").await.unwrap();

    // Token expired server-side
    api.server.reset().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&api.server)
        .await;

    assert!(store.check_auth().await.is_none());
    assert!(store.current_user().is_none());
}

#[tokio::test]
async fn test_check_auth_never_errors_on_dead_transport() {
    // Bind a server just to reserve a port, then kill it
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = Arc::new(ApiClient::new(&ClientConfig::for_base_url(uri)));
    let store = AuthStore::new(client);

    assert!(store.check_auth().await.is_none());
    assert!(store.current_user().is_none());
}

#[tokio::test]
async fn test_subscriber_observes_transitions() {
    let api = common::TestApi::new().await;
    let store = api.auth_store();
    mount_login(&api.server, "fresh-token").await;
    mount_me(&api.server, 1, "lifter").await;

    let seen: Arc<Mutex<Vec<Option<UserResponse>>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    let _sub = store.subscribe(move |user| {
        seen_clone.lock().unwrap().push(user.clone());
    });

    store.login("lifter", "hunter2hunter2").await.unwrap();
    store.logout();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(seen[0].is_none()); // initial value on subscribe
    assert_eq!(seen[1].as_ref().map(|u| u.id), Some(1));
    assert!(seen[2].is_none());
}

#[tokio::test]
async fn test_unsubscribed_observer_misses_transitions() {
    let api = common::TestApi::new().await;
    let store = api.auth_store();
    mount_login(&api.server, "fresh-token").await;
    mount_me(&api.server, 1, "lifter").await;

    let seen: Arc<Mutex<Vec<Option<UserResponse>>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    let sub = store.subscribe(move |user| {
        seen_clone.lock().unwrap().push(user.clone());
    });
    sub.unsubscribe();

    store.login("lifter", "hunter2hunter2").await.unwrap();

    assert_eq!(seen.lock().unwrap().len(), 1);
}
