use super::AppState;
use crate::core::{EmployeeLogic, Scheduler};
use crate::errors::{AppError, AppResult};
use crate::models::Employee;
use crate::models::schedule::{GeneratedSchedule, RoomSchedule};
use crate::store::EmployeeStore;
use crate::utils::date;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Serialize)]
pub struct InternSeniorReset {
    pub schedule: RoomSchedule,
}

#[derive(Serialize)]
pub struct RoomReset {
    pub success: bool,
    #[serde(flatten)]
    pub result: RoomSchedule,
}

/// Run a store operation on the blocking pool; the store does plain file I/O.
async fn with_store<T, F>(state: &AppState, op: F) -> AppResult<T>
where
    F: FnOnce(&EmployeeStore) -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| AppError::Server(format!("store task failed: {}", e)))?
}

pub async fn liveness() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Backend is working" }))
}

pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = with_store(&state, EmployeeLogic::list).await?;
    debug!(count = employees.len(), "listing employees");
    Ok(Json(employees))
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> AppResult<Json<Employee>> {
    let created = with_store(&state, move |s| EmployeeLogic::create(s, employee)).await?;
    Ok(Json(created))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(employee): Json<Employee>,
) -> AppResult<Json<Employee>> {
    let updated = with_store(&state, move |s| EmployeeLogic::update(s, id, employee)).await?;
    Ok(Json(updated))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    with_store(&state, move |s| EmployeeLogic::delete(s, id)).await?;
    Ok(Json(json!({ "message": "Employee deleted successfully" })))
}

pub async fn validate_room(
    State(state): State<AppState>,
    Path(room_number): Path<String>,
) -> AppResult<Json<Value>> {
    with_store(&state, move |s| EmployeeLogic::validate_room(s, &room_number)).await?;
    Ok(Json(json!({ "message": "Room is available" })))
}

pub async fn current_month_dates() -> Json<Vec<String>> {
    Json(
        date::current_month_workdays()
            .into_iter()
            .map(date::format_date)
            .collect(),
    )
}

pub async fn generate_schedule(State(state): State<AppState>) -> AppResult<Json<GeneratedSchedule>> {
    let employees = with_store(&state, EmployeeStore::load_all).await?;
    let result = Scheduler::generate(&employees);
    info!(rooms = result.rooms.len(), "schedule generated");
    Ok(Json(result))
}

pub async fn reset_intern_senior_schedule(
    State(state): State<AppState>,
) -> AppResult<Json<InternSeniorReset>> {
    let employees = with_store(&state, EmployeeStore::load_all).await?;
    let schedule = Scheduler::intern_senior(&employees)?;
    info!(rooms = schedule.rooms.len(), "intern-senior schedule reset");
    Ok(Json(InternSeniorReset { schedule }))
}

pub async fn reset_room_schedule(State(state): State<AppState>) -> AppResult<Json<RoomReset>> {
    let employees = with_store(&state, EmployeeStore::load_all).await?;
    let result = Scheduler::room_availability(&employees)?;
    info!(rooms = result.rooms.len(), "room schedule reset");
    Ok(Json(RoomReset {
        success: true,
        result,
    }))
}
