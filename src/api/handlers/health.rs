//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use sqlx::PgPool;
use std::sync::Arc;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse, PoolStatus};

/// Reports whether the database answers queries.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: database reachable
/// - **503 Service Unavailable**: database probe failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "pool": { "size": 4, "idle": 3 }
///   }
/// }
/// ```
pub async fn health_handler(
    State(pool): State<Arc<PgPool>>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = probe(&pool).await;
    let healthy = database.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks {
            database,
            pool: PoolStatus {
                size: pool.size(),
                idle: pool.num_idle(),
            },
        },
    };

    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}

async fn probe(pool: &PgPool) -> CheckStatus {
    match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await {
        Ok(_) => CheckStatus::ok("Connected"),
        Err(e) => {
            tracing::error!(error = %e, "Health check database probe failed");
            CheckStatus::error(format!("Database error: {e}"))
        }
    }
}
