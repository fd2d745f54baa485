//! Integration tests for POST /auth/register

use actix_web::{
    http::{header::ContentType, StatusCode},
    test, web,
};
use serde_json::{json, Value};

use ge_api::{create_app, AppState};
use ge_shared::config::AppConfig;

fn state() -> web::Data<AppState> {
    web::Data::new(AppState::new(AppConfig::default()))
}

#[actix_web::test]
async fn test_invalid_payload_lists_sorted_issues() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "name": "", "email": "not-an-email", "password": "short" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": {
                "code": "BAD_REQUEST",
                "name": "ValidationError",
                "message": "The request data is invalid.",
                "details": {
                    "errors": [
                        { "path": "email", "message": "Invalid email" },
                        { "path": "name", "message": "Name must be between 1 and 100 characters" },
                        { "path": "password", "message": "Password must be between 8 and 100 characters" }
                    ]
                }
            }
        })
    );
}

#[actix_web::test]
async fn test_single_invalid_field() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "name": "Ada", "email": "ada@", "password": "correct horse" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"]["details"]["errors"],
        json!([{ "path": "email", "message": "Invalid email" }])
    );
}

#[actix_web::test]
async fn test_malformed_json_is_transport_error() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .insert_header(ContentType::json())
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert_eq!(body["error"]["name"], "HttpError");
    assert!(body["error"].get("details").is_none());
}

#[actix_web::test]
async fn test_wrong_field_type_is_raw_validation_error() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "name": 42, "email": "ada@example.com", "password": "correct horse" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["name"], "ValidationError");
    assert_eq!(body["error"]["message"], "The request data is invalid.");
    let raw = body["error"]["details"]["errors"].as_str().unwrap();
    assert!(raw.contains("invalid type"));
}

#[actix_web::test]
async fn test_missing_field_is_raw_validation_error() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "name": "Ada", "email": "ada@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let raw = body["error"]["details"]["errors"].as_str().unwrap();
    assert!(raw.contains("password"));
}

#[actix_web::test]
async fn test_valid_payload_is_not_implemented() {
    let app = test::init_service(create_app(state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "name": "Ada", "email": "ada@example.com", "password": "correct horse" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": {
                "code": "INTERNAL_SERVER_ERROR",
                "name": "HttpError",
                "message": "Not implemented"
            }
        })
    );
}
