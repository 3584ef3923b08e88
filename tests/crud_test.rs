//! Integration tests for create/update/delete and the legacy search route.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::{body_json, create_product, get_json, setup_test_app, setup_test_db};

#[tokio::test]
async fn create_returns_the_stored_row_in_the_envelope() {
    let db = setup_test_db().await;
    let app = setup_test_app(&db);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/products")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"name": "  USB-C Cable ", "price": "9.99", "stock": 120}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Product created successfully");
    assert_eq!(body["data"]["name"], "USB-C Cable");
    assert_eq!(body["data"]["price"], "9.99");
    assert_eq!(body["data"]["stock"], 120);
    assert!(body["data"]["id"].as_i64().unwrap() >= 1);
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn create_rejects_invalid_payloads_with_an_error_list() {
    let db = setup_test_db().await;
    let app = setup_test_app(&db);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/products")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"name": "   ", "price": "-5", "stock": -1}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn update_replaces_fields_but_preserves_created_at() {
    let db = setup_test_db().await;
    let app = setup_test_app(&db);
    let created = create_product(&app, "Widget", "1.00", 5).await;
    let id = created["id"].as_i64().unwrap();
    let created_at = created["createdAt"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/products/{id}"))
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"name": "Widget Pro", "price": "2.75", "stock": 7}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Widget Pro");
    assert_eq!(body["data"]["price"], "2.75");
    assert_eq!(body["data"]["stock"], 7);
    assert_eq!(body["data"]["createdAt"], created_at.as_str());
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let db = setup_test_db().await;
    let app = setup_test_app(&db);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/products/9999")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"name": "Ghost", "price": "1.00", "stock": 1}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn delete_returns_the_removed_row_and_frees_the_id() {
    let db = setup_test_db().await;
    let app = setup_test_app(&db);
    let created = create_product(&app, "Widget", "1.00", 5).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/products/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Widget");

    let (status, _) = get_json(&app, &format!("/api/products?id={id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let db = setup_test_db().await;
    let app = setup_test_app(&db);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/products/424242")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_requires_a_term() {
    let db = setup_test_db().await;
    let app = setup_test_app(&db);

    let (status, body) = get_json(&app, "/api/products/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Search term is required");

    let (status, body) = get_json(&app, "/api/products/search?q=%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn search_returns_matches_newest_first() {
    let db = setup_test_db().await;
    let app = setup_test_app(&db);
    create_product(&app, "USB-C Cable", "9.99", 1).await;
    create_product(&app, "Mouse", "24.99", 1).await;
    create_product(&app, "USB Hub", "19.99", 1).await;

    let (status, body) = get_json(&app, "/api/products/search?q=usb").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "USB Hub");
    assert_eq!(rows[1]["name"], "USB-C Cable");
}
