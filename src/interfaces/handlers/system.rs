use std::time::Duration;

use actix_web::{web, HttpResponse};
use chrono::Utc;
use humantime::format_duration;
use serde::Serialize;

use crate::{constants::START_TIME, AppState};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    database: &'static str,
    uptime: String,
    version: &'static str,
    timestamp: String,
    start_at: String,
}

pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let now_utc = Utc::now();
    let uptime_secs = now_utc
        .signed_duration_since(*START_TIME)
        .num_seconds()
        .max(0) as u64;

    let database = match state.health_repo.check_connection().await {
        Ok(_) => "OK",
        Err(e) => {
            tracing::warn!("Health check database probe failed: {}", e);
            "Unavailable"
        }
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy",
        database,
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
    })
}
