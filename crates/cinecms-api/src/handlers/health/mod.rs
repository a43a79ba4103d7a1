//! Liveness probe.

use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

/// GET /healthz - liveness probe
///
/// No authentication; intended for load balancers.
#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
