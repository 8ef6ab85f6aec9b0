//! Record API integration tests
//!
//! CRUD over services, confirmations, and reports, plus persistence across
//! a restart.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use servdesk::shared::{Confirmation, Report, Service, ServiceId};

use crate::common::{auth_header, TestApp};
use crate::{assert_error_response, assert_ok};

fn laundry() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Laundry",
        "description": "Wash and fold",
        "price": 12.5
    })
}

#[tokio::test]
async fn test_records_require_token() {
    let app = TestApp::spawn().await;

    let response = app.server.post("/services/").json(&laundry()).await;
    assert_error_response!(
        response,
        StatusCode::UNAUTHORIZED,
        "Could not validate credentials"
    );

    for path in ["/services/", "/confirmations/", "/reports/"] {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED, "{path}");
    }

    let services = std::fs::read_to_string(app.data_dir.path().join("services.json"));
    assert!(services.is_err(), "anonymous request must not touch data");
}

#[tokio::test]
async fn test_service_crud() {
    let app = TestApp::spawn().await;
    let token = app.childe_token().await;
    let (name, value) = auth_header(&token);

    let created = app
        .server
        .post("/services/")
        .add_header(name.clone(), value.clone())
        .json(&laundry())
        .await;
    assert_eq!(created.status_code(), StatusCode::OK);
    let created: Service = created.json();
    assert_eq!(created.id, ServiceId(1));

    let listed: Vec<Service> = app
        .server
        .get("/services/")
        .add_header(name.clone(), value.clone())
        .await
        .json();
    assert_eq!(listed, vec![created.clone()]);

    let updated = app
        .server
        .put("/services/1")
        .add_header(name.clone(), value.clone())
        .json(&json!({
            "id": 7,
            "name": "Laundry",
            "description": "Wash, fold, and iron",
            "price": 15.0
        }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    let updated: Service = updated.json();
    assert_eq!(updated.id, ServiceId(1));
    assert_eq!(updated.price, 15.0);

    let fetched: Service = app
        .server
        .get("/services/1")
        .add_header(name.clone(), value.clone())
        .await
        .json();
    assert_eq!(fetched, updated);

    let deleted = app
        .server
        .delete("/services/1")
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    let missing = app
        .server
        .get("/services/1")
        .add_header(name, value)
        .await;
    assert_error_response!(missing, StatusCode::NOT_FOUND, "Service not found");
}

#[tokio::test]
async fn test_update_missing_service_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.childe_token().await;
    let (name, value) = auth_header(&token);

    let response = app
        .server
        .put("/services/42")
        .add_header(name, value)
        .json(&laundry())
        .await;

    assert_error_response!(response, StatusCode::NOT_FOUND, "Service not found");
}

#[tokio::test]
async fn test_create_with_existing_id_replaces() {
    let app = TestApp::spawn().await;
    let token = app.childe_token().await;
    let (name, value) = auth_header(&token);

    for price in [10.0, 20.0] {
        app.server
            .post("/services/")
            .add_header(name.clone(), value.clone())
            .json(&json!({"id": 3, "name": "Repair", "description": "Fix it", "price": price}))
            .await;
    }

    let listed: Vec<Service> = app
        .server
        .get("/services/")
        .add_header(name, value)
        .await
        .json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].price, 20.0);
}

#[tokio::test]
async fn test_confirmations_and_reports() {
    let app = TestApp::spawn().await;
    let token = app.childe_token().await;
    let (name, value) = auth_header(&token);

    let confirmation = app
        .server
        .post("/confirmations/")
        .add_header(name.clone(), value.clone())
        .json(&json!({"id": 1, "service_id": 1, "user_id": 5, "confirmed": true}))
        .await;
    assert_eq!(confirmation.status_code(), StatusCode::OK);

    let report = app
        .server
        .post("/reports/")
        .add_header(name.clone(), value.clone())
        .json(&json!({"id": 2, "staf": "Lumine", "service_id": 1, "description": "Done"}))
        .await;
    assert_eq!(report.status_code(), StatusCode::OK);
    assert_eq!(report.json::<serde_json::Value>()["staf"], "Lumine");

    let confirmation: Confirmation = app
        .server
        .get("/confirmations/1")
        .add_header(name.clone(), value.clone())
        .await
        .json();
    assert!(confirmation.confirmed);

    let reports: Vec<Report> = app
        .server
        .get("/reports/")
        .add_header(name.clone(), value.clone())
        .await
        .json();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].staff, "Lumine");

    let missing = app
        .server
        .get("/reports/99")
        .add_header(name, value)
        .await;
    assert_error_response!(missing, StatusCode::NOT_FOUND, "Report not found");
}

#[tokio::test]
async fn test_records_survive_restart() {
    let app = TestApp::spawn().await;
    let token = app.childe_token().await;
    let (name, value) = auth_header(&token);

    app.server
        .post("/services/")
        .add_header(name, value)
        .json(&laundry())
        .await;

    let raw = assert_ok!(std::fs::read_to_string(
        app.data_dir.path().join("services.json")
    ));
    let on_disk: serde_json::Value = assert_ok!(serde_json::from_str(&raw));
    assert_eq!(on_disk["services"][0]["name"], "Laundry");

    let app = app.restart().await;
    let token = app.childe_token().await;
    let (name, value) = auth_header(&token);

    let listed: Vec<Service> = app
        .server
        .get("/services/")
        .add_header(name, value)
        .await
        .json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Laundry");
}

#[tokio::test]
async fn test_bad_path_and_body_are_json_errors() {
    let app = TestApp::spawn().await;
    let token = app.childe_token().await;

    let (name, value) = auth_header(&token);
    let bad_id = app
        .server
        .get("/services/abc")
        .add_header(name, value)
        .await;
    assert_eq!(bad_id.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = bad_id.json();
    assert_eq!(body["status"], 400);
    assert!(body["error"].is_string(), "unexpected error body: {body}");

    let (name, value) = auth_header(&token);
    let missing_fields = app
        .server
        .post("/services/")
        .add_header(name, value)
        .json(&json!({"name": "Laundry"}))
        .await;
    assert_eq!(missing_fields.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = missing_fields.json();
    assert_eq!(body["status"], 422);
    assert!(body["error"].is_string(), "unexpected error body: {body}");
}
