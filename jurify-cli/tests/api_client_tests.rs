//! REST client integration tests against the mock backend

mod helpers;

use helpers::{spawn_backend, TEST_TOKEN};
use jurify_cli::client::{ApiClient, ApiError};
use jurify_common::api::{FreeProcessRequest, ProcessRequest};

fn process_request(issue: &str) -> ProcessRequest {
    ProcessRequest {
        issue: issue.to_string(),
        language: "en".to_string(),
        summarize: false,
        voice_used: false,
        skip_cache: false,
    }
}

#[tokio::test]
async fn test_login_success_returns_token_and_user() {
    let url = spawn_backend(5).await;
    let client = ApiClient::new(&url).unwrap();

    let login = client.login("asha@example.com", "secret").await.unwrap();
    assert_eq!(login.token, TEST_TOKEN);
    assert_eq!(login.user.name, "Asha");
}

#[tokio::test]
async fn test_login_bad_password_is_auth_error() {
    let url = spawn_backend(5).await;
    let client = ApiClient::new(&url).unwrap();

    let result = client.login("asha@example.com", "wrong").await;
    match result {
        Err(ApiError::AuthRequired(message)) => assert_eq!(message, "Invalid credentials"),
        other => panic!("expected AuthRequired, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_register_conflict_on_taken_email() {
    let url = spawn_backend(5).await;
    let client = ApiClient::new(&url).unwrap();

    let ok = client
        .register("Asha", "new@example.com", "pw")
        .await
        .unwrap();
    assert_eq!(ok.user_id, 7);

    let result = client.register("Asha", "taken@example.com", "pw").await;
    assert!(matches!(result, Err(ApiError::Api(409, _))));
}

#[tokio::test]
async fn test_process_requires_token() {
    let url = spawn_backend(5).await;

    // No token loaded: fails before any network call
    let client = ApiClient::new(&url).unwrap();
    let result = client.process(&process_request("some issue text")).await;
    assert!(matches!(result, Err(ApiError::AuthRequired(_))));

    // Wrong token: backend rejects with 401
    let client = ApiClient::new(&url)
        .unwrap()
        .with_token(Some("stale-token".to_string()));
    let result = client.process(&process_request("some issue text")).await;
    assert!(matches!(result, Err(ApiError::AuthRequired(_))));
}

#[tokio::test]
async fn test_process_fresh_and_cached_responses() {
    let url = spawn_backend(5).await;
    let client = ApiClient::new(&url)
        .unwrap()
        .with_token(Some(TEST_TOKEN.to_string()));

    let fresh = client
        .process(&process_request("my landlord kept my deposit"))
        .await
        .unwrap();
    assert!(!fresh.from_cache);
    assert_eq!(fresh.xp_reward, Some(10));
    assert_eq!(fresh.history_id, Some(42));
    assert!(!fresh.rights.is_empty());
    assert!(!fresh.notice.is_empty());

    let cached = client
        .process(&process_request("previously cached question"))
        .await
        .unwrap();
    assert!(cached.from_cache);
    assert_eq!(cached.xp_reward, Some(2));
}

#[tokio::test]
async fn test_free_status_reports_quota() {
    let url = spawn_backend(3).await;
    let client = ApiClient::new(&url).unwrap();

    let status = client.free_status("client-abc").await.unwrap();
    assert_eq!(status.daily_limit, 5);
    assert_eq!(status.remaining, 3);
    assert_eq!(status.used, 2);
}

#[tokio::test]
async fn test_free_process_success_carries_quota_fields() {
    let url = spawn_backend(2).await;
    let client = ApiClient::new(&url).unwrap();

    let advice = client
        .free_process(&FreeProcessRequest {
            client_id: "client-abc".to_string(),
            issue: "employer withheld my paycheck".to_string(),
            language: "en".to_string(),
            summarize: false,
        })
        .await
        .unwrap();

    assert!(advice.free_tier);
    assert_eq!(advice.queries_remaining, Some(1));
    assert_eq!(advice.daily_limit, Some(5));
}

#[tokio::test]
async fn test_free_process_quota_exhausted_is_429() {
    let url = spawn_backend(0).await;
    let client = ApiClient::new(&url).unwrap();

    let result = client
        .free_process(&FreeProcessRequest {
            client_id: "client-abc".to_string(),
            issue: "employer withheld my paycheck".to_string(),
            language: "en".to_string(),
            summarize: false,
        })
        .await;

    match result {
        Err(ApiError::QuotaExceeded {
            reset_in_hours, ..
        }) => assert_eq!(reset_in_hours, 12.0),
        other => panic!("expected QuotaExceeded, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_history_list_and_search() {
    let url = spawn_backend(5).await;
    let client = ApiClient::new(&url)
        .unwrap()
        .with_token(Some(TEST_TOKEN.to_string()));

    let all = client.history(None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, 1);

    let filtered = client.history(Some("paycheck")).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 2);
    assert_eq!(filtered[0].language, "hi");
}

#[tokio::test]
async fn test_history_item_and_missing_id() {
    let url = spawn_backend(5).await;
    let client = ApiClient::new(&url)
        .unwrap()
        .with_token(Some(TEST_TOKEN.to_string()));

    let item = client.history_item(1).await.unwrap();
    assert_eq!(item.issue, "Landlord kept my security deposit");

    let result = client.history_item(999).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_history_delete() {
    let url = spawn_backend(5).await;
    let client = ApiClient::new(&url)
        .unwrap()
        .with_token(Some(TEST_TOKEN.to_string()));

    let response = client.delete_history_item(1).await.unwrap();
    assert_eq!(response.message, "History item deleted");

    let result = client.delete_history_item(999).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_xp_summary() {
    let url = spawn_backend(5).await;
    let client = ApiClient::new(&url)
        .unwrap()
        .with_token(Some(TEST_TOKEN.to_string()));

    let summary = client.xp().await.unwrap();
    assert_eq!(summary.total_xp, 235);
    assert_eq!(summary.level, 2);
    assert!(summary.badges.silver);
    assert!(!summary.badges.diamond);
}

#[tokio::test]
async fn test_cache_stats_is_anonymous() {
    let url = spawn_backend(5).await;
    let client = ApiClient::new(&url).unwrap();

    let stats = client.cache_stats().await.unwrap();
    assert_eq!(stats.total_entries, 8);
    assert_eq!(stats.expiry_hours, 48);
}

#[tokio::test]
async fn test_cache_clear_requires_token() {
    let url = spawn_backend(5).await;

    let client = ApiClient::new(&url).unwrap();
    assert!(matches!(
        client.clear_cache(false).await,
        Err(ApiError::AuthRequired(_))
    ));

    let client = ApiClient::new(&url)
        .unwrap()
        .with_token(Some(TEST_TOKEN.to_string()));
    let cleared = client.clear_cache(true).await.unwrap();
    assert_eq!(cleared.deleted, 3);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Reserved port with nothing listening
    let client = ApiClient::new("http://127.0.0.1:1").unwrap();
    let result = client.cache_stats().await;
    assert!(matches!(result, Err(ApiError::Network(_))));
}
