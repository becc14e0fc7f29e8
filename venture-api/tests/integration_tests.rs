//! Integration tests for the venture API
//!
//! End-to-end flows over the HTTP surface: registration, login,
//! investing, resolution and the query endpoints, using an in-memory
//! ledger store behind a test server.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;

use venture_api::{create_router, AppState, AuthState, JwtConfig};
use venture_ledger::MemoryStore;

const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

fn create_test_state() -> AppState {
    let store = Arc::new(MemoryStore::new());
    let jwt = JwtConfig::try_new(TEST_SECRET).unwrap();
    AppState::new(store, AuthState::new(jwt))
}

fn create_test_server(state: &AppState) -> TestServer {
    TestServer::new(create_router(state.clone())).unwrap()
}

/// Register a member and return their bearer token.
async fn member_token(server: &TestServer, name: &str, email: &str, team: &str) -> String {
    let response = server
        .post("/api/v1/register")
        .json(&json!({
            "name": name,
            "email": email,
            "password": "secret",
            "team_name": team,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    login(server, email, "secret").await
}

/// Seed an admin through the account service and log in over HTTP.
async fn admin_token(state: &AppState, server: &TestServer) -> String {
    state
        .accounts
        .create_admin("Root", "root@example.com", "rootsecret")
        .await
        .unwrap();

    login(server, "root@example.com", "rootsecret").await
}

async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/api/v1/login")
        .json(&json!({"email": email, "password": password}))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    body["token"].as_str().unwrap().to_string()
}

/// Create a startup as admin and return its id.
async fn create_startup(server: &TestServer, token: &str, name: &str) -> String {
    let response = server
        .post("/api/v1/admin/startups")
        .authorization_bearer(token)
        .json(&json!({
            "name": name,
            "description": "a test venture",
            "pitch": "disrupting everything",
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    body["startup"]["id"].as_str().unwrap().to_string()
}

async fn invest(server: &TestServer, token: &str, startup_id: &str, amount: f64) -> serde_json::Value {
    let response = server
        .post("/api/v1/investments")
        .authorization_bearer(token)
        .json(&json!({"startup_id": startup_id, "amount": amount}))
        .await;
    response.assert_status_ok();
    response.json()
}

// ============ Health and auth gating ============

#[tokio::test]
async fn test_health_check() {
    let state = create_test_state();
    let server = create_test_server(&state);

    let response = server.get("/api/v1/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_protected_endpoints_require_token() {
    let state = create_test_state();
    let server = create_test_server(&state);

    for path in ["/api/v1/startups", "/api/v1/team", "/api/v1/leaderboard"] {
        let response = server.get(path).await;
        response.assert_status_unauthorized();
    }
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let state = create_test_state();
    let server = create_test_server(&state);

    let response = server
        .get("/api/v1/startups")
        .authorization_bearer("not-a-jwt")
        .await;
    response.assert_status_unauthorized();
}

// ============ Registration and login ============

#[tokio::test]
async fn test_register_duplicate_email_rejected() {
    let state = create_test_state();
    let server = create_test_server(&state);

    member_token(&server, "Ada", "ada@example.com", "alpha").await;

    let response = server
        .post("/api/v1/register")
        .json(&json!({
            "name": "Imposter",
            "email": "ada@example.com",
            "password": "secret",
            "team_name": "beta",
        }))
        .await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_duplicate_team_name_rejected() {
    let state = create_test_state();
    let server = create_test_server(&state);

    member_token(&server, "Ada", "ada@example.com", "alpha").await;

    let response = server
        .post("/api/v1/register")
        .json(&json!({
            "name": "Bob",
            "email": "bob@example.com",
            "password": "secret",
            "team_name": "alpha",
        }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_register_missing_fields_rejected() {
    let state = create_test_state();
    let server = create_test_server(&state);

    let response = server
        .post("/api/v1/register")
        .json(&json!({
            "name": "",
            "email": "x@example.com",
            "password": "secret",
            "team_name": "alpha",
        }))
        .await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    let state = create_test_state();
    let server = create_test_server(&state);

    member_token(&server, "Ada", "ada@example.com", "alpha").await;

    let response = server
        .post("/api/v1/login")
        .json(&json!({"email": "ada@example.com", "password": "wrong"}))
        .await;
    response.assert_status_unauthorized();
}

// ============ Startup administration ============

#[tokio::test]
async fn test_create_startup_applies_default_multiplier() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;

    let response = server
        .post("/api/v1/admin/startups")
        .authorization_bearer(&admin)
        .json(&json!({
            "name": "acme",
            "description": "rockets",
            "pitch": "to the moon",
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["startup"]["outcome"], "PENDING");
    assert_eq!(body["startup"]["multiplier"], 2.0);
}

#[tokio::test]
async fn test_member_cannot_use_admin_endpoints() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let member = member_token(&server, "Ada", "ada@example.com", "alpha").await;

    let response = server
        .post("/api/v1/admin/startups")
        .authorization_bearer(&member)
        .json(&json!({"name": "x", "description": "y", "pitch": "z"}))
        .await;
    response.assert_status_unauthorized();

    let response = server
        .get("/api/v1/admin/teams")
        .authorization_bearer(&member)
        .await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_multiplier_update_and_floor() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;
    let startup_id = create_startup(&server, &admin, "acme").await;

    let response = server
        .put(&format!("/api/v1/admin/startups/{}/multiplier", startup_id))
        .authorization_bearer(&admin)
        .json(&json!({"multiplier": 3.5}))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["startup"]["multiplier"], 3.5);

    let response = server
        .put(&format!("/api/v1/admin/startups/{}/multiplier", startup_id))
        .authorization_bearer(&admin)
        .json(&json!({"multiplier": 0.5}))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_pending_listing_newest_first() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;
    let member = member_token(&server, "Ada", "ada@example.com", "alpha").await;

    create_startup(&server, &admin, "first").await;
    create_startup(&server, &admin, "second").await;

    let response = server
        .get("/api/v1/startups")
        .authorization_bearer(&member)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let startups = body["startups"].as_array().unwrap();
    assert_eq!(startups.len(), 2);
    assert_eq!(startups[0]["name"], "second");
    assert_eq!(startups[1]["name"], "first");
}

// ============ Investment placement ============

#[tokio::test]
async fn test_investment_debits_team() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;
    let member = member_token(&server, "Ada", "ada@example.com", "alpha").await;
    let startup_id = create_startup(&server, &admin, "acme").await;

    let body = invest(&server, &member, &startup_id, 100.0).await;

    assert_eq!(body["investment"]["amount"], 100.0);
    assert_eq!(body["investment"]["startup"]["name"], "acme");
    assert_eq!(body["team"]["balance"], 999_900.0);
}

#[tokio::test]
async fn test_investment_invalid_amount_rejected() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;
    let member = member_token(&server, "Ada", "ada@example.com", "alpha").await;
    let startup_id = create_startup(&server, &admin, "acme").await;

    for amount in [0.0, -50.0] {
        let response = server
            .post("/api/v1/investments")
            .authorization_bearer(&member)
            .json(&json!({"startup_id": startup_id, "amount": amount}))
            .await;
        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_investment_insufficient_funds_rejected() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;
    let member = member_token(&server, "Ada", "ada@example.com", "alpha").await;
    let startup_id = create_startup(&server, &admin, "acme").await;

    let response = server
        .post("/api/v1/investments")
        .authorization_bearer(&member)
        .json(&json!({"startup_id": startup_id, "amount": 2_000_000.0}))
        .await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "INSUFFICIENT_FUNDS");

    // Balance untouched
    let response = server
        .get("/api/v1/team")
        .authorization_bearer(&member)
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["team"]["balance"], 1_000_000.0);
}

#[tokio::test]
async fn test_investment_unknown_startup_not_found() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let member = member_token(&server, "Ada", "ada@example.com", "alpha").await;

    let response = server
        .post("/api/v1/investments")
        .authorization_bearer(&member)
        .json(&json!({"startup_id": "no-such-startup", "amount": 100.0}))
        .await;
    response.assert_status_not_found();
}

// ============ Outcome resolution ============

#[tokio::test]
async fn test_e2e_success_resolution_pays_out() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;
    let ada = member_token(&server, "Ada", "ada@example.com", "alpha").await;
    let bob = member_token(&server, "Bob", "bob@example.com", "beta").await;
    let startup_id = create_startup(&server, &admin, "acme").await;

    invest(&server, &ada, &startup_id, 100.0).await;
    invest(&server, &bob, &startup_id, 50.0).await;

    let response = server
        .put(&format!("/api/v1/admin/startups/{}/outcome", startup_id))
        .authorization_bearer(&admin)
        .json(&json!({"outcome": "SUCCESS"}))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["startup"]["outcome"], "SUCCESS");
    let payouts = body["payouts"].as_array().unwrap();
    assert_eq!(payouts.len(), 2);
    assert_eq!(payouts[0]["amount"], 200.0);
    assert_eq!(payouts[1]["amount"], 100.0);

    // start - 100 + 200
    let response = server.get("/api/v1/team").authorization_bearer(&ada).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["team"]["balance"], 1_000_100.0);

    // start - 50 + 100
    let response = server.get("/api/v1/team").authorization_bearer(&bob).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["team"]["balance"], 1_000_050.0);
}

#[tokio::test]
async fn test_failure_resolution_keeps_funds_debited() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;
    let member = member_token(&server, "Ada", "ada@example.com", "alpha").await;
    let startup_id = create_startup(&server, &admin, "acme").await;

    invest(&server, &member, &startup_id, 100.0).await;

    let response = server
        .put(&format!("/api/v1/admin/startups/{}/outcome", startup_id))
        .authorization_bearer(&admin)
        .json(&json!({"outcome": "FAILURE"}))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["startup"]["outcome"], "FAILURE");
    assert!(body["payouts"].as_array().unwrap().is_empty());

    let response = server
        .get("/api/v1/team")
        .authorization_bearer(&member)
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["team"]["balance"], 999_900.0);
}

#[tokio::test]
async fn test_double_resolution_rejected_without_double_pay() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;
    let member = member_token(&server, "Ada", "ada@example.com", "alpha").await;
    let startup_id = create_startup(&server, &admin, "acme").await;

    invest(&server, &member, &startup_id, 100.0).await;

    let path = format!("/api/v1/admin/startups/{}/outcome", startup_id);
    let response = server
        .put(&path)
        .authorization_bearer(&admin)
        .json(&json!({"outcome": "SUCCESS"}))
        .await;
    response.assert_status_ok();

    let response = server
        .put(&path)
        .authorization_bearer(&admin)
        .json(&json!({"outcome": "SUCCESS"}))
        .await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "STATE_CONFLICT");

    // Paid exactly once
    let response = server
        .get("/api/v1/team")
        .authorization_bearer(&member)
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["team"]["balance"], 1_000_100.0);
}

#[tokio::test]
async fn test_invest_after_resolution_rejected() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;
    let member = member_token(&server, "Ada", "ada@example.com", "alpha").await;
    let startup_id = create_startup(&server, &admin, "acme").await;

    let response = server
        .put(&format!("/api/v1/admin/startups/{}/outcome", startup_id))
        .authorization_bearer(&admin)
        .json(&json!({"outcome": "FAILURE"}))
        .await;
    response.assert_status_ok();

    let response = server
        .post("/api/v1/investments")
        .authorization_bearer(&member)
        .json(&json!({"startup_id": startup_id, "amount": 100.0}))
        .await;
    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "STATE_CONFLICT");
}

#[tokio::test]
async fn test_invalid_outcome_rejected() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;
    let startup_id = create_startup(&server, &admin, "acme").await;

    let path = format!("/api/v1/admin/startups/{}/outcome", startup_id);
    for outcome in ["PENDING", "MAYBE", "success"] {
        let response = server
            .put(&path)
            .authorization_bearer(&admin)
            .json(&json!({"outcome": outcome}))
            .await;
        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_edited_multiplier_drives_payout() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;
    let member = member_token(&server, "Ada", "ada@example.com", "alpha").await;
    let startup_id = create_startup(&server, &admin, "acme").await;

    invest(&server, &member, &startup_id, 100.0).await;

    // Raise the multiplier before resolving
    let response = server
        .put(&format!("/api/v1/admin/startups/{}/multiplier", startup_id))
        .authorization_bearer(&admin)
        .json(&json!({"multiplier": 3.0}))
        .await;
    response.assert_status_ok();

    let response = server
        .put(&format!("/api/v1/admin/startups/{}/outcome", startup_id))
        .authorization_bearer(&admin)
        .json(&json!({"outcome": "SUCCESS"}))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["payouts"][0]["amount"], 300.0);
}

// ============ Queries ============

#[tokio::test]
async fn test_team_snapshot_lists_history_newest_first() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;
    let member = member_token(&server, "Ada", "ada@example.com", "alpha").await;
    let first = create_startup(&server, &admin, "first").await;
    let second = create_startup(&server, &admin, "second").await;

    invest(&server, &member, &first, 10.0).await;
    invest(&server, &member, &second, 20.0).await;

    let response = server
        .get("/api/v1/team")
        .authorization_bearer(&member)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let investments = body["investments"].as_array().unwrap();
    assert_eq!(investments.len(), 2);
    assert_eq!(investments[0]["startup"]["name"], "second");
    assert_eq!(investments[1]["startup"]["name"], "first");
}

#[tokio::test]
async fn test_leaderboard_reflects_resolution() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;
    let ada = member_token(&server, "Ada", "ada@example.com", "alpha").await;
    let _bob = member_token(&server, "Bob", "bob@example.com", "beta").await;
    let startup_id = create_startup(&server, &admin, "acme").await;

    invest(&server, &ada, &startup_id, 100.0).await;

    let response = server
        .put(&format!("/api/v1/admin/startups/{}/outcome", startup_id))
        .authorization_bearer(&admin)
        .json(&json!({"outcome": "SUCCESS"}))
        .await;
    response.assert_status_ok();

    let response = server
        .get("/api/v1/leaderboard")
        .authorization_bearer(&ada)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let teams = body["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0]["name"], "alpha");
    assert_eq!(teams[0]["balance"], 1_000_100.0);
    assert_eq!(teams[0]["investment_count"], 1);
    assert_eq!(teams[1]["name"], "beta");
}

#[tokio::test]
async fn test_admin_listings_include_details() {
    let state = create_test_state();
    let server = create_test_server(&state);
    let admin = admin_token(&state, &server).await;
    let member = member_token(&server, "Ada", "ada@example.com", "alpha").await;
    let startup_id = create_startup(&server, &admin, "acme").await;

    invest(&server, &member, &startup_id, 25.0).await;

    let response = server
        .get("/api/v1/admin/startups")
        .authorization_bearer(&admin)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let startups = body["startups"].as_array().unwrap();
    assert_eq!(startups.len(), 1);
    assert_eq!(startups[0]["investments"].as_array().unwrap().len(), 1);

    let response = server
        .get("/api/v1/admin/teams")
        .authorization_bearer(&admin)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let teams = body["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["users"].as_array().unwrap().len(), 1);
    assert_eq!(teams[0]["investments"][0]["startup"]["name"], "acme");
}
