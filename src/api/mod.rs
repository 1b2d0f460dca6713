//! HTTP request layer: exposes the employee store and the scheduling engine.

pub mod error;
pub mod handlers;

use crate::errors::{AppError, AppResult};
use crate::store::EmployeeStore;
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EmployeeStore>,
}

impl AppState {
    pub fn new(store: EmployeeStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(handlers::liveness))
        .route(
            "/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            "/employees/:id",
            put(handlers::update_employee).delete(handlers::delete_employee),
        )
        .route("/validate-room/:room_number", get(handlers::validate_room))
        .route("/current-month-dates", get(handlers::current_month_dates))
        .route("/schedule/generate", post(handlers::generate_schedule))
        .route(
            "/schedule/intern-senior/reset",
            post(handlers::reset_intern_senior_schedule),
        )
        .route("/schedule/rooms/reset", post(handlers::reset_room_schedule))
        .with_state(state)
}

pub async fn serve(state: AppState, host: &str, port: u16) -> AppResult<()> {
    let listener = TcpListener::bind((host, port))
        .await
        .map_err(|e| AppError::Server(format!("cannot bind {}:{}: {}", host, port, e)))?;

    info!(
        %host,
        port,
        store = %state.store.path().display(),
        "roomroster listening"
    );

    axum::serve(listener, router(state))
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}
