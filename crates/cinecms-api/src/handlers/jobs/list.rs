//! Job listing handler.

use crate::handlers::job_error_response;
use crate::models::{ApiResponse, JobDto, JobListParams};
use actix_web::{get, web, HttpResponse, Responder};
use cinecms_commons::{JobFilter, JobStatus};
use cinecms_core::AppContext;
use std::str::FromStr;
use std::sync::Arc;

/// GET /api/jobs?status= - List jobs, newest first
#[get("/jobs")]
pub async fn list_jobs(
    query: web::Query<JobListParams>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let status = match query.status.as_deref() {
        Some(raw) => match JobStatus::from_str(raw) {
            Ok(status) => Some(status),
            Err(message) => {
                return HttpResponse::BadRequest().json(ApiResponse::<()>::error_with_details(
                    "Validation failed",
                    vec![message],
                ));
            }
        },
        None => None,
    };

    let filter = JobFilter {
        status,
        ..Default::default()
    };

    match context.jobs().list(&filter) {
        Ok(jobs) => {
            let dtos: Vec<JobDto> = jobs.into_iter().map(JobDto::from).collect();
            HttpResponse::Ok().json(ApiResponse::success(dtos))
        }
        Err(e) => job_error_response(e),
    }
}
