//! End-to-end API tests against a real Postgres database.
//!
//! Ignored by default: point TEST_DB_URL (or DB_URL) at a reachable Postgres
//! instance and run `cargo test -- --ignored`.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use stockroom_back::{AppState, routes};

async fn test_app() -> Router {
    let url = std::env::var("TEST_DB_URL")
        .or_else(|_| std::env::var("DB_URL"))
        .expect("TEST_DB_URL or DB_URL must point at a Postgres database");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("failed to connect to the test database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    routes::create_router().with_state(AppState { db: pool })
}

async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

#[tokio::test]
#[ignore = "needs a running Postgres (set TEST_DB_URL)"]
async fn create_then_get_round_trips() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/product",
        Some(json!({
            "code": "RT1",
            "name": "Cola",
            "description": "Soda",
            "price": "1.50"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["price"], json!(1.5));

    let (status, fetched) = send(&app, "GET", &format!("/product/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["code"], "RT1");
    assert_eq!(fetched["name"], "Cola");
    assert_eq!(fetched["description"], "Soda");
    assert_eq!(fetched["price"], json!(1.5));
    assert_eq!(fetched["category"], Value::Null);
}

#[tokio::test]
#[ignore = "needs a running Postgres (set TEST_DB_URL)"]
async fn update_on_missing_id_is_404_and_creates_nothing() {
    let app = test_app().await;
    let missing = 2_000_000_000;

    let (status, _) = send(
        &app,
        "PUT",
        "/product",
        Some(json!({ "id": missing, "name": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", &format!("/product/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, "GET", "/product", None).await;
    assert!(
        list.as_array()
            .unwrap()
            .iter()
            .all(|p| p["id"] != json!(missing))
    );
}

#[tokio::test]
#[ignore = "needs a running Postgres (set TEST_DB_URL)"]
async fn delete_then_get_is_404_and_list_drops_the_id() {
    let app = test_app().await;

    let (_, created) = send(
        &app,
        "POST",
        "/product",
        Some(json!({
            "code": "DEL1",
            "name": "Fanta",
            "description": "Soda",
            "price": "2.00"
        })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, deleted) = send(&app, "DELETE", &format!("/product/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["code"], "DEL1");

    let (status, _) = send(&app, "GET", &format!("/product/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, "GET", "/product", None).await;
    assert!(list.as_array().unwrap().iter().all(|p| p["id"] != json!(id)));
}

#[tokio::test]
#[ignore = "needs a running Postgres (set TEST_DB_URL)"]
async fn list_expands_category_into_full_document() {
    let app = test_app().await;

    let (_, category) = send(
        &app,
        "POST",
        "/category",
        Some(json!({ "name": "Beverages", "order": 1 })),
    )
    .await;
    let category_id = category["id"].as_i64().unwrap();

    let (_, created) = send(
        &app,
        "POST",
        "/product",
        Some(json!({
            "code": "BV1",
            "name": "Cola",
            "description": "Soda",
            "price": "1.50",
            "category": category_id
        })),
    )
    .await;
    // Create returns the raw reference, not the expanded document
    assert_eq!(created["category"], json!(category_id));
    let id = created["id"].as_i64().unwrap();

    let (_, list) = send(&app, "GET", "/product", None).await;
    let entry = list
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == json!(id))
        .unwrap();
    assert_eq!(entry["category"]["id"], json!(category_id));
    assert_eq!(entry["category"]["name"], "Beverages");
    assert_eq!(entry["category"]["order"], 1);
}

#[tokio::test]
#[ignore = "needs a running Postgres (set TEST_DB_URL)"]
async fn dangling_category_reference_renders_null() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/product",
        Some(json!({
            "code": "DNG1",
            "name": "Orphan",
            "description": "No such category",
            "price": "3.00",
            "category": 1_999_999_999
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/product/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["category"], Value::Null);

    let (_, list) = send(&app, "GET", "/product", None).await;
    let entry = list
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == json!(id))
        .unwrap();
    assert_eq!(entry["category"], Value::Null);
}

#[tokio::test]
#[ignore = "needs a running Postgres (set TEST_DB_URL)"]
async fn partial_update_coerces_member_number_and_keeps_other_fields() {
    let app = test_app().await;

    let (_, created) = send(
        &app,
        "POST",
        "/customer",
        Some(json!({ "name": "Ada", "interests": "chess" })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["memberNumber"], Value::Null);

    let (status, updated) = send(
        &app,
        "PUT",
        "/customer",
        Some(json!({ "id": id, "memberNumber": "42" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["memberNumber"], json!(42));
    assert_eq!(updated["name"], "Ada");
    assert_eq!(updated["interests"], "chess");
}

#[tokio::test]
#[ignore = "needs a running Postgres (set TEST_DB_URL)"]
async fn create_with_missing_fields_reports_all_of_them() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/product",
        Some(json!({ "code": "BV1", "description": "Soda" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields: name, price");
}
