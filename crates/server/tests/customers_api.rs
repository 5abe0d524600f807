use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::Service;

use server::state::AppState;
use service::customer::{
    repository::{memory::InMemoryCustomerRepository, CustomerRepository},
    CustomerService,
};

fn build_app() -> Router {
    let repo: Arc<dyn CustomerRepository> = Arc::new(InMemoryCustomerRepository::new());
    let svc = CustomerService::new(repo, Arc::new(|raw: &str| format!("test-hash:{raw}")));
    server::startup::build_app(AppState::new(svc))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().call(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}

fn alex() -> Value {
    json!({"name": "Alex", "email": "alex@gmail.com", "password": "password", "age": 19, "gender": "MALE"})
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let app = build_app();
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn test_register_then_read_back() -> anyhow::Result<()> {
    let app = build_app();

    let (status, _) = send(&app, "POST", "/api/v1/customers", Some(alex())).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, list) = send(&app, "GET", "/api/v1/customers", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let (status, view) = send(&app, "GET", "/api/v1/customers/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view, json!({"id": 1, "name": "Alex", "email": "alex@gmail.com", "age": 19, "gender": "MALE"}));
    assert!(view.get("password").is_none());
    Ok(())
}

#[tokio::test]
async fn test_register_duplicate_email_conflict() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/api/v1/customers", Some(alex())).await?;

    let (status, body) = send(&app, "POST", "/api/v1/customers", Some(alex())).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "Email already taken");
    assert_eq!(body["code"], 2002);
    Ok(())
}

#[tokio::test]
async fn test_register_blank_name_rejected() -> anyhow::Result<()> {
    let app = build_app();
    let mut req = alex();
    req["name"] = json!("   ");

    let (status, body) = send(&app, "POST", "/api/v1/customers", Some(req)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn test_get_missing_customer() -> anyhow::Result<()> {
    let app = build_app();
    let (status, body) = send(&app, "GET", "/api/v1/customers/42", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Customer with id [42] not found");
    Ok(())
}

#[tokio::test]
async fn test_update_flow() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/api/v1/customers", Some(alex())).await?;

    // Same values as stored: rejected
    let (status, body) = send(&app, "PUT", "/api/v1/customers/1", Some(json!({"name": "Alex", "age": 19}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "No data changes found");

    // Nothing supplied: rejected
    let (status, _) = send(&app, "PUT", "/api/v1/customers/1", Some(json!({}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let update = json!({"name": "Alexandro", "email": "alexandro@gmail.com", "age": 23});
    let (status, _) = send(&app, "PUT", "/api/v1/customers/1", Some(update)).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, view) = send(&app, "GET", "/api/v1/customers/1", None).await?;
    assert_eq!(view, json!({"id": 1, "name": "Alexandro", "email": "alexandro@gmail.com", "age": 23, "gender": "MALE"}));
    Ok(())
}

#[tokio::test]
async fn test_update_to_taken_email_conflict() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/api/v1/customers", Some(alex())).await?;
    let jamila = json!({"name": "Jamila", "email": "jamila@gmail.com", "password": "password", "age": 19, "gender": "FEMALE"});
    send(&app, "POST", "/api/v1/customers", Some(jamila)).await?;

    let (status, _) = send(&app, "PUT", "/api/v1/customers/2", Some(json!({"email": "alex@gmail.com"}))).await?;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, view) = send(&app, "GET", "/api/v1/customers/2", None).await?;
    assert_eq!(view["email"], "jamila@gmail.com");
    Ok(())
}

#[tokio::test]
async fn test_update_missing_customer() -> anyhow::Result<()> {
    let app = build_app();
    let (status, _) = send(&app, "PUT", "/api/v1/customers/9", Some(json!({"age": 30}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_delete_flow() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/api/v1/customers", Some(alex())).await?;

    let (status, _) = send(&app, "DELETE", "/api/v1/customers/1", None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "DELETE", "/api/v1/customers/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Customer with id [1] not found");
    Ok(())
}

#[tokio::test]
async fn test_openapi_document_lists_customer_routes() -> anyhow::Result<()> {
    let app = build_app();
    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/api/v1/customers").is_some());
    assert!(doc["paths"].get("/api/v1/customers/{id}").is_some());
    Ok(())
}

#[tokio::test]
async fn test_register_unknown_gender_is_json_validation_error() -> anyhow::Result<()> {
    let app = build_app();
    let mut req = alex();
    req["gender"] = json!("OTHER");

    let (status, body) = send(&app, "POST", "/api/v1/customers", Some(req)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("OTHER")));

    let (_, list) = send(&app, "GET", "/api/v1/customers", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn test_update_wrong_field_type_is_json_validation_error() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/api/v1/customers", Some(alex())).await?;

    let (status, body) = send(&app, "PUT", "/api/v1/customers/1", Some(json!({"age": "old"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn test_non_numeric_id_is_json_validation_error() -> anyhow::Result<()> {
    let app = build_app();
    let (status, body) = send(&app, "GET", "/api/v1/customers/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    Ok(())
}
