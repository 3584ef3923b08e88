use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use catalog_api::{routes, schema};
use sea_orm::{Database, DatabaseConnection};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Fresh in-memory database with the products table in place.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("failed to connect to in-memory sqlite");
    schema::bootstrap(&db).await.expect("failed to bootstrap schema");
    db
}

pub fn setup_test_app(db: &DatabaseConnection) -> Router {
    routes::app(db)
}

/// POST a product and return the created row from the envelope.
#[allow(dead_code)]
pub async fn create_product(app: &Router, name: &str, price: &str, stock: i64) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/products")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({"name": name, "price": price, "stock": stock}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

/// Drain a response body into JSON.
pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// GET a URI and return status plus parsed body.
#[allow(dead_code)]
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}
