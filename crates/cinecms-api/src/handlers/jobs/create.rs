//! Job creation handler.

use crate::auth::AdminClaims;
use crate::handlers::job_error_response;
use crate::models::{ApiResponse, CreateJobRequest, JobDto};
use actix_web::{post, web, HttpResponse, Responder};
use cinecms_commons::{JobScheduleType, JobType};
use cinecms_core::AppContext;
use cinecms_jobs::NewJob;
use std::str::FromStr;
use std::sync::Arc;

/// POST /api/jobs - Create a job
#[post("/jobs")]
pub async fn create_job(
    claims: AdminClaims,
    body: web::Json<CreateJobRequest>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let request = body.into_inner();

    let mut errors = Vec::new();
    let job_type = match JobType::from_str(&request.job_type) {
        Ok(job_type) => Some(job_type),
        Err(message) => {
            errors.push(message);
            None
        }
    };
    let schedule_type = match JobScheduleType::from_str(&request.schedule_type) {
        Ok(schedule_type) => Some(schedule_type),
        Err(message) => {
            errors.push(message);
            None
        }
    };
    let (Some(job_type), Some(schedule_type)) = (job_type, schedule_type) else {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error_with_details("Validation failed", errors));
    };

    let input = NewJob {
        name: request.name,
        description: request.description,
        job_type,
        schedule_type,
        cron_expression: request.cron_expression,
        parameters: request.parameters,
        start_immediately: request.start_immediately,
    };

    match context.jobs().create(input, claims.actor()) {
        Ok(job) => HttpResponse::Ok().json(ApiResponse::success(JobDto::from(job))),
        Err(e) => job_error_response(e),
    }
}
