//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (schema from migrations/ applied)
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! The classifier key is deliberately left unset, so every submission
//! exercises the degraded (fallback) scoring path.
//!
//! The tests share one database; the bulk-clear test deletes every
//! message, so run single-threaded:
//!
//! cargo test -p integration-tests --test api_tests -- --test-threads=1

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Identity Tests
// ============================================================================

#[tokio::test]
async fn test_create_identity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = server.create_identity().await.unwrap();

    assert!(!identity.token.is_empty());
    assert!(identity.expires_in > 0);
}

#[tokio::test]
async fn test_identity_is_kept_when_token_presented() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let first = server.create_identity().await.unwrap();

    let response = server
        .post(
            "/api/v1/identity",
            &serde_json::json!({ "token": first.token }),
        )
        .await
        .unwrap();
    let second: IdentityResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(second.identity_id, first.identity_id);
}

#[tokio::test]
async fn test_invalid_token_mints_fresh_identity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/identity",
            &serde_json::json!({ "token": "not-a-real-token" }),
        )
        .await
        .unwrap();
    let identity: IdentityResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!identity.token.is_empty());
}

// ============================================================================
// Submission Tests
// ============================================================================

#[tokio::test]
async fn test_submit_requires_identity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/messages", &SubmitRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_submit_with_classifier_unreachable() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = server.create_identity().await.unwrap();

    let request = SubmitRequest {
        text: "hello world".to_string(),
    };
    let response = server
        .post_auth("/api/v1/messages", &identity.token, &request)
        .await
        .unwrap();
    let receipt: ReceiptResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // No classifier key in the test environment: the fallback path runs
    assert!(receipt.degraded);
    assert_eq!(receipt.scores.len(), 4);
    for axis in ["POSITIVE", "CALM", "ENERGETIC", "DEEP"] {
        let score = receipt.scores[axis];
        assert!((10.0..=40.0).contains(&score), "{axis} out of range: {score}");
    }

    // The message surfaces on the live list with the caller's identity
    let response = server.get("/api/v1/messages?limit=10").await.unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let created = messages
        .iter()
        .find(|m| m.id == receipt.id)
        .expect("submitted message not visible");
    assert_eq!(created.user_id, identity.identity_id);
    assert_eq!(created.likes, 0);
    assert_eq!(created.text, "hello world");
}

#[tokio::test]
async fn test_submit_rejects_blank_text() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = server.create_identity().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/messages",
            &identity.token,
            &serde_json::json!({ "text": "   " }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_submit_rejects_text_over_cap() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = server.create_identity().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/messages",
            &identity.token,
            &serde_json::json!({ "text": "a".repeat(151) }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_like_toggle_moves_counter_by_one() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.create_identity().await.unwrap();
    let liker = server.create_identity().await.unwrap();

    // Author submits a message
    let response = server
        .post_auth("/api/v1/messages", &author.token, &SubmitRequest::unique())
        .await
        .unwrap();
    let receipt: ReceiptResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let like_path = format!("/api/v1/messages/{}/like", receipt.id);

    // Liker toggles on: counter moves by exactly +1
    let response = server.post_auth_empty(&like_path, &liker.token).await.unwrap();
    let toggle: LikeToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(toggle.liked);
    assert_eq!(toggle.likes, 1);

    // The like record exists for the liker
    let response = server.get_auth("/api/v1/likes/@me", &liker.token).await.unwrap();
    let liked: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(liked["messageIds"]
        .as_array()
        .unwrap()
        .iter()
        .any(|id| id.as_str() == Some(receipt.id.as_str())));

    // Toggle off: back to the original state
    let response = server.post_auth_empty(&like_path, &liker.token).await.unwrap();
    let toggle: LikeToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!toggle.liked);
    assert_eq!(toggle.likes, 0);

    let response = server.get_auth("/api/v1/likes/@me", &liker.token).await.unwrap();
    let liked: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!liked["messageIds"]
        .as_array()
        .unwrap()
        .iter()
        .any(|id| id.as_str() == Some(receipt.id.as_str())));
}

#[tokio::test]
async fn test_like_unknown_message_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let identity = server.create_identity().await.unwrap();

    let response = server
        .post_auth_empty("/api/v1/messages/999999999/like", &identity.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_settings_overwrite_is_full_document() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let staff = server.create_identity().await.unwrap();

    let document = settings_document("NEW Q");
    let response = server
        .put_auth("/api/v1/admin/settings", &staff.token, &document)
        .await
        .unwrap();
    let saved: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(saved["display"]["question"], "NEW Q");

    // Reading back yields exactly the sent document, no field reverted
    let response = server.get("/api/v1/settings").await.unwrap();
    let read: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(read, document);
}

#[tokio::test]
async fn test_settings_rejects_partial_document() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let staff = server.create_identity().await.unwrap();

    // Missing the display half: the full-object contract refuses it
    let response = server
        .put_auth(
            "/api/v1/admin/settings",
            &staff.token,
            &serde_json::json!({
                "input": {
                    "question": "Q", "subtitle": "S", "placeholder": "P",
                    "buttonText": "B", "fontFamily": "F"
                }
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_clear_all_empties_the_wall() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let visitor = server.create_identity().await.unwrap();
    let staff = server.create_identity().await.unwrap();

    // Seed a few messages
    for _ in 0..3 {
        let response = server
            .post_auth("/api/v1/messages", &visitor.token, &SubmitRequest::unique())
            .await
            .unwrap();
        assert_json::<ReceiptResponse>(response, StatusCode::CREATED)
            .await
            .unwrap();
    }

    let response = server
        .post_auth_empty("/api/v1/admin/messages/clear", &staff.token)
        .await
        .unwrap();
    let cleared: ClearedResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(cleared.deleted >= 3);

    // Both reading roles observe an empty set
    let response = server.get("/api/v1/messages?limit=100").await.unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(messages.is_empty());
}

#[tokio::test]
async fn test_delete_single_message() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let visitor = server.create_identity().await.unwrap();
    let staff = server.create_identity().await.unwrap();

    let response = server
        .post_auth("/api/v1/messages", &visitor.token, &SubmitRequest::unique())
        .await
        .unwrap();
    let receipt: ReceiptResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/admin/messages/{}", receipt.id),
            &staff.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Deleting again is not found
    let response = server
        .delete_auth(
            &format!("/api/v1/admin/messages/{}", receipt.id),
            &staff.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_export_csv_shape() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let visitor = server.create_identity().await.unwrap();
    let staff = server.create_identity().await.unwrap();

    let response = server
        .post_auth("/api/v1/messages", &visitor.token, &SubmitRequest::unique())
        .await
        .unwrap();
    assert_json::<ReceiptResponse>(response, StatusCode::CREATED)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/admin/export", &staff.token)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/csv")));

    let body = response.text().await.unwrap();
    let mut lines = body.lines();
    assert_eq!(lines.next(), Some("ID,Content,UID,Likes,Sentiment"));
    assert!(lines.next().is_some());
}

#[tokio::test]
async fn test_mood_summary_counts_messages() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let visitor = server.create_identity().await.unwrap();
    let staff = server.create_identity().await.unwrap();

    let response = server
        .post_auth("/api/v1/messages", &visitor.token, &SubmitRequest::unique())
        .await
        .unwrap();
    assert_json::<ReceiptResponse>(response, StatusCode::CREATED)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/admin/mood", &staff.token)
        .await
        .unwrap();
    let summary: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(summary["messageCount"].as_i64().unwrap() >= 1);
    for axis in ["POSITIVE", "CALM", "ENERGETIC", "DEEP"] {
        assert!(summary["averages"][axis].as_f64().unwrap() >= 0.0);
    }
}
