use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use roomroster::api::{AppState, router};
use roomroster::store::EmployeeStore;
use serde_json::{Value, json};
use tower::ServiceExt;

mod common;
use common::setup_test_store;

fn app(name: &str) -> Router {
    router(AppState::new(EmployeeStore::new(setup_test_store(name))))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn dana() -> Value {
    json!({
        "name": "Dana",
        "role": "senior",
        "employment": 100,
        "room_number": "101",
        "availability": { "Monday": true, "2025-03-02": true },
        "works_with_interns_weekly": { "1": true }
    })
}

#[tokio::test]
async fn test_liveness() {
    let app = app("api_liveness");
    let (status, body) = call(&app, "GET", "/test", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "message": "Backend is working" }));
}

#[tokio::test]
async fn test_employee_crud() {
    let app = app("api_crud");

    let (status, body) = call(&app, "GET", "/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, created) = call(&app, "POST", "/employees", Some(dana())).await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "Dana");

    let mut changed = dana();
    changed["name"] = json!("Dana R.");
    changed["id"] = json!("00000000-0000-4000-8000-000000000000");
    let (status, updated) = call(&app, "PUT", &format!("/employees/{}", id), Some(changed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["name"], "Dana R.");

    let (_, list) = call(&app, "GET", "/employees", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "Dana R.");

    let (status, body) = call(&app, "DELETE", &format!("/employees/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Employee deleted successfully" }));

    let (status, body) = call(&app, "DELETE", &format!("/employees/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Employee not found" }));
}

#[tokio::test]
async fn test_update_unknown_employee() {
    let app = app("api_update_unknown");
    let (status, body) = call(
        &app,
        "PUT",
        "/employees/3f2a4c1e-0000-4000-8000-000000000001",
        Some(dana()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Employee not found");
}

#[tokio::test]
async fn test_validate_room() {
    let app = app("api_validate_room");

    let (status, body) = call(&app, "GET", "/validate-room/101", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Room is available" }));

    call(&app, "POST", "/employees", Some(dana())).await;

    let (status, body) = call(&app, "GET", "/validate-room/101", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Room 101 is already assigned to Dana");
}

#[tokio::test]
async fn test_current_month_dates() {
    let app = app("api_dates");
    let (status, body) = call(&app, "GET", "/current-month-dates", None).await;
    assert_eq!(status, StatusCode::OK);

    let dates = body.as_array().unwrap();
    assert!((16..=20).contains(&dates.len()));
    assert!(dates.iter().all(|d| d.as_str().is_some_and(|s| s.len() == 10)));
}

#[tokio::test]
async fn test_schedule_endpoints() {
    let app = app("api_schedules");
    call(&app, "POST", "/employees", Some(dana())).await;

    let (status, body) = call(&app, "POST", "/schedule/generate", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rooms"], json!({ "101": "Dana" }));
    assert_eq!(body["schedule"]["Monday"]["101"], "Available for interns");
    assert_eq!(body["office_duty"]["Monday"], "Dana");
    assert_eq!(body["office_duty"]["Tuesday"], "No one available");

    let (status, body) = call(&app, "POST", "/schedule/intern-senior/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["schedule"]["rooms"]["101"].is_string());
    assert_eq!(body["schedule"]["schedule"]["Sunday"]["101"], "Available");
    assert_eq!(body["schedule"]["schedule"]["Monday"]["101"], "Not Available");

    let (status, body) = call(&app, "POST", "/schedule/rooms/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["schedule"]["Sunday"]["101"], "Not Available");
    assert_eq!(body["schedule"]["Monday"]["101"], "Available");
    assert!(body["rooms"]["101"].is_string());
}

#[tokio::test]
async fn test_generate_on_empty_store() {
    let app = app("api_generate_empty");
    let (status, body) = call(&app, "POST", "/schedule/generate", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rooms"], json!({}));
    assert_eq!(body["schedule"]["Thursday"], json!({}));
    assert_eq!(body["office_duty"]["Sunday"], "No one available");
}

#[tokio::test]
async fn test_invalid_record_is_reported_and_kept() {
    let data = setup_test_store("api_invalid_record");
    let content = r#"[{"id":"3f2a4c1e-0000-4000-8000-000000000001","name":"X","role":"manager","employment":100}]"#;
    std::fs::write(&data, content).unwrap();
    let app = router(AppState::new(EmployeeStore::new(&data)));

    let (status, body) = call(&app, "GET", "/employees", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("invalid record"));
    assert_eq!(std::fs::read_to_string(&data).unwrap(), content);
}
