//! Request validation that must happen before anything reaches the store.
//!
//! The router runs on a pool that cannot connect, so any test that
//! accidentally queries the database fails with a 500 instead of the 400
//! asserted here.

mod common;

use axum::http::StatusCode;
use common::{
    auth_token, body_json, build_test_app, get_auth, lazy_pool, post_json, post_json_auth,
    post_raw_auth, put_json_auth,
};
use serde_json::json;

const ASSESSMENT_ID: &str = "b4b63b9b-4412-4628-8a9a-527b0696426a";
const CRITERION_ID: &str = "3f1c2a9e-6b7d-4c1e-9a2f-0d5e8b7c6a01";

async fn assert_error(response: axum::response::Response, status: StatusCode, code: &str) -> serde_json::Value {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["code"], code, "unexpected body: {json}");
    json
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn packs_lists_the_three_catalog_packs() {
    let response = get_auth(build_test_app(lazy_pool()), "/api/v1/packs", &auth_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["ok"], true);
    let ids: Vec<&str> = json["packs"]
        .as_array()
        .expect("packs should be an array")
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["tmf_dmm_lite", "tmf_dmm_core", "tmf_dmm_full"]);
}

#[tokio::test]
async fn criteria_with_unknown_pack_is_rejected() {
    let response = get_auth(
        build_test_app(lazy_pool()),
        "/api/v1/criteria?pack=iso_9001",
        &auth_token(),
    )
    .await;
    let json = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    assert!(json["error"].as_str().unwrap().contains("tmf_dmm_core"));
}

// ---------------------------------------------------------------------------
// Assessments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_assessment_with_unknown_pack_lists_allowed_packs() {
    let response = post_json_auth(
        build_test_app(lazy_pool()),
        "/api/v1/assessments",
        json!({ "pack": "bogus_pack" }),
        &auth_token(),
    )
    .await;

    let json = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    assert_eq!(
        json["error"],
        "Unknown pack 'bogus_pack'. Allowed packs: tmf_dmm_lite, tmf_dmm_core, tmf_dmm_full"
    );
}

#[tokio::test]
async fn create_assessment_requires_pack() {
    let response = post_json_auth(
        build_test_app(lazy_pool()),
        "/api/v1/assessments",
        json!({}),
        &auth_token(),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn get_assessment_with_malformed_id_is_rejected() {
    let response = get_auth(
        build_test_app(lazy_pool()),
        "/api/v1/assessments/12345",
        &auth_token(),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_IDENTIFIER").await;
}

#[tokio::test]
async fn onboarding_must_be_an_object() {
    let response = put_json_auth(
        build_test_app(lazy_pool()),
        &format!("/api/v1/assessments/{ASSESSMENT_ID}/onboarding"),
        json!({ "onboarding_data": ["not", "an", "object"] }),
        &auth_token(),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upsert_with_malformed_assessment_id_is_rejected() {
    let response = post_json_auth(
        build_test_app(lazy_pool()),
        "/api/v1/responses",
        json!({ "assessmentId": "not-a-uuid", "criteriaId": CRITERION_ID, "as_is_level": 2 }),
        &auth_token(),
    )
    .await;
    let json = assert_error(response, StatusCode::BAD_REQUEST, "INVALID_IDENTIFIER").await;
    assert!(json["error"].as_str().unwrap().contains("assessmentId"));
}

#[tokio::test]
async fn upsert_without_criterion_is_rejected() {
    let response = post_json_auth(
        build_test_app(lazy_pool()),
        "/api/v1/responses",
        json!({ "assessmentId": ASSESSMENT_ID, "as_is_level": 2 }),
        &auth_token(),
    )
    .await;
    let json = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    assert_eq!(json["error"], "criteriaId is required");
}

#[tokio::test]
async fn upsert_with_out_of_range_level_is_rejected() {
    let response = post_json_auth(
        build_test_app(lazy_pool()),
        "/api/v1/responses",
        json!({
            "assessmentId": ASSESSMENT_ID,
            "criteriaId": CRITERION_ID,
            "as_is_level": 2,
            "to_be_level": 6
        }),
        &auth_token(),
    )
    .await;
    let json = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    assert_eq!(json["error"], "to_be_level must be between 1 and 5, got 6");
}

#[tokio::test]
async fn list_responses_with_malformed_criterion_is_rejected() {
    let response = get_auth(
        build_test_app(lazy_pool()),
        &format!("/api/v1/responses?assessmentId={ASSESSMENT_ID}&criteriaId=abc"),
        &auth_token(),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_IDENTIFIER").await;
}

// ---------------------------------------------------------------------------
// Actions, results, programs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_action_status_is_rejected() {
    let response = post_json_auth(
        build_test_app(lazy_pool()),
        "/api/v1/actions/status",
        json!({
            "assessmentId": ASSESSMENT_ID,
            "actionId": "9c8d7e6f-5a4b-4c3d-8e2f-1a0b9c8d7e01",
            "status": "blocked"
        }),
        &auth_token(),
    )
    .await;
    let json = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    assert!(json["error"].as_str().unwrap().contains("in_progress"));
}

#[tokio::test]
async fn validate_impact_score_must_be_in_range() {
    let response = post_json_auth(
        build_test_app(lazy_pool()),
        "/api/v1/actions/validate-impact",
        json!({
            "assessmentId": ASSESSMENT_ID,
            "actionId": "9c8d7e6f-5a4b-4c3d-8e2f-1a0b9c8d7e01",
            "impact_score": 0
        }),
        &auth_token(),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn results_require_assessment_id() {
    let response = get_auth(build_test_app(lazy_pool()), "/api/v1/results", &auth_token()).await;
    let json = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    assert_eq!(json["error"], "assessmentId is required");
}

#[tokio::test]
async fn activate_program_with_malformed_program_id_is_rejected() {
    let response = post_json_auth(
        build_test_app(lazy_pool()),
        "/api/v1/programs/activate",
        json!({ "assessmentId": ASSESSMENT_ID, "programId": "prg-01" }),
        &auth_token(),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_IDENTIFIER").await;
}

#[tokio::test]
async fn close_program_requires_instance_id() {
    let response = post_json_auth(
        build_test_app(lazy_pool()),
        "/api/v1/programs/close",
        json!({ "assessmentId": ASSESSMENT_ID }),
        &auth_token(),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn execution_with_malformed_assessment_id_is_rejected() {
    let response = get_auth(
        build_test_app(lazy_pool()),
        "/api/v1/programs/execution?assessmentId=xyz",
        &auth_token(),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_IDENTIFIER").await;
}

// ---------------------------------------------------------------------------
// Malformed bodies and query strings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mistyped_score_is_rejected_with_envelope() {
    let response = post_json_auth(
        build_test_app(lazy_pool()),
        "/api/v1/responses",
        json!({
            "assessmentId": ASSESSMENT_ID,
            "criteriaId": CRITERION_ID,
            "as_is_level": "3",
        }),
        &auth_token(),
    )
    .await;
    let json = assert_error(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
    assert!(json["error"].as_str().unwrap().contains("as_is_level"));
}

#[tokio::test]
async fn login_without_password_is_rejected_with_envelope() {
    let response = post_json(
        build_test_app(lazy_pool()),
        "/api/v1/auth/login",
        json!({ "username": "demo@gapply.io" }),
    )
    .await;
    let json = assert_error(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
    assert!(json["error"].as_str().unwrap().contains("password"));
}

#[tokio::test]
async fn non_json_body_is_rejected_with_envelope() {
    let response = post_raw_auth(
        build_test_app(lazy_pool()),
        "/api/v1/programs/activate",
        "text/plain",
        b"assessmentId=1".to_vec(),
        &auth_token(),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}

#[tokio::test]
async fn unparseable_limit_is_rejected_with_envelope() {
    let response = get_auth(
        build_test_app(lazy_pool()),
        &format!("/api/v1/chat/messages?assessmentId={ASSESSMENT_ID}&limit=abc"),
        &auth_token(),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}
