//! Single-job fetch handler.

use crate::handlers::job_error_response;
use crate::models::{ApiResponse, JobDto};
use actix_web::{get, web, HttpResponse, Responder};
use cinecms_commons::JobId;
use cinecms_core::AppContext;
use std::sync::Arc;

/// GET /api/jobs/{id} - Fetch one job
#[get("/jobs/{id}")]
pub async fn get_job(
    path: web::Path<String>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let id = JobId::new(path.into_inner());

    match context.jobs().get(&id) {
        Ok(job) => HttpResponse::Ok().json(ApiResponse::success(JobDto::from(job))),
        Err(e) => job_error_response(e),
    }
}
