//! Manual job start handler.

use crate::auth::AdminClaims;
use crate::handlers::job_error_response;
use crate::models::{ApiResponse, JobDto};
use actix_web::{post, web, HttpResponse, Responder};
use cinecms_commons::JobId;
use cinecms_core::AppContext;
use std::sync::Arc;

/// POST /api/jobs/{id}/start - Queue a job for the next scheduler tick
///
/// Rejected with 400 while the job is Running.
#[post("/jobs/{id}/start")]
pub async fn start_job(
    _claims: AdminClaims,
    path: web::Path<String>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let id = JobId::new(path.into_inner());

    match context.jobs().start(&id) {
        Ok(job) => HttpResponse::Ok().json(ApiResponse::success(JobDto::from(job))),
        Err(e) => job_error_response(e),
    }
}
