use axum::{extract::State, Json};
use chrono::Datelike;

use crate::{
    error::SmokeTestError,
    models::system::{HealthResponse, ServiceDescriptor, SmokeTestResponse},
    services::{
        calendar::{is_business_hours, weekday_name},
        moment::format_clock_and_date,
    },
    state::AppState,
};

pub const ENDPOINTS: &[&str] = &[
    "GET  /",
    "GET  /health",
    "POST /webhook/datetime/current",
    "POST /webhook/datetime/business-info",
    "POST /webhook/datetime/relative",
    "GET  /test",
    "GET  /api/docs",
];

pub async fn home(State(state): State<AppState>) -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        service: state.config.display_name.clone(),
        status: "online".to_string(),
        timezone: state.config.time_zone.to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    // A health probe still answers when the clock cannot be read.
    let current_time = match state.datetime.now() {
        Ok(now) => format_clock_and_date(&now),
        Err(err) => {
            tracing::warn!(error = ?err, "Health check could not read the clock");
            "indisponível".to_string()
        }
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.service_name.clone(),
        current_time,
        timezone: state.config.time_zone.to_string(),
        uptime: "online".to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

pub async fn smoke_test(
    State(state): State<AppState>,
) -> Result<Json<SmokeTestResponse>, SmokeTestError> {
    let now = state.datetime.now()?;
    let tomorrow = now
        .date_naive()
        .succ_opt()
        .ok_or_else(|| anyhow::anyhow!("date overflow after {}", now.date_naive()))?;

    Ok(Json(SmokeTestResponse {
        status: "success".to_string(),
        current_time: format_clock_and_date(&now),
        tomorrow: tomorrow.format("%Y-%m-%d").to_string(),
        is_business_hours: is_business_hours(&now),
        weekday: weekday_name(now.weekday()).to_string(),
        all_endpoints_working: true,
    }))
}
