use actix_web::{web, HttpResponse};
use serde_json::json;

use ge_core::errors::ApiError;

use crate::app::AppState;
use crate::handlers::error::HttpError;
use crate::APP_SERVICE_NAME;

/// Liveness probe
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": APP_SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Readiness probe
///
/// Pings the database when one is configured. A failed ping goes through
/// the error dispatcher like any other failure.
pub async fn readiness_check(state: web::Data<AppState>) -> Result<HttpResponse, HttpError> {
    let database = match &state.database {
        Some(pool) => {
            pool.health_check().await.map_err(ApiError::from)?;
            json!({
                "status": "up",
                "pool": pool.get_statistics().to_string(),
            })
        }
        None => json!({ "status": "disabled" }),
    };

    Ok(HttpResponse::Ok().json(json!({
        "status": "ready",
        "environment": state.config.environment.to_string(),
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
