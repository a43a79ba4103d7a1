//! Job cancellation handler.

use crate::auth::AdminClaims;
use crate::handlers::job_error_response;
use crate::models::{ApiResponse, JobDto};
use actix_web::{post, web, HttpResponse, Responder};
use cinecms_commons::JobId;
use cinecms_core::AppContext;
use std::sync::Arc;

/// POST /api/jobs/{id}/cancel - Cancel a job
///
/// Rejected with 400 while the job is Running.
#[post("/jobs/{id}/cancel")]
pub async fn cancel_job(
    _claims: AdminClaims,
    path: web::Path<String>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let id = JobId::new(path.into_inner());

    match context.jobs().cancel(&id) {
        Ok(job) => HttpResponse::Ok().json(ApiResponse::success(JobDto::from(job))),
        Err(e) => job_error_response(e),
    }
}
