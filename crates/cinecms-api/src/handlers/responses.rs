//! Error → HTTP status mapping.
//!
//! Validation and illegal transitions are client errors; storage and
//! execution failures return a generic 500 with the detail logged
//! server-side only.

use crate::models::ApiResponse;
use actix_web::HttpResponse;
use cinecms_content::ContentError;
use cinecms_jobs::JobError;

pub fn content_error_response(err: ContentError) -> HttpResponse {
    match err {
        ContentError::Validation(errors) => HttpResponse::BadRequest().json(
            ApiResponse::<()>::error_with_details("Validation failed", errors),
        ),
        ContentError::NotFound(message) => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(message))
        }
        ContentError::InvalidState(message) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))
        }
        ContentError::Storage(message) => {
            log::error!("Storage error: {}", message);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("An unexpected error occurred"))
        }
    }
}

pub fn job_error_response(err: JobError) -> HttpResponse {
    match err {
        JobError::Validation(message) | JobError::Cron(message) => HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error_with_details(
                "Validation failed",
                vec![message],
            )),
        JobError::NotFound(message) => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(message))
        }
        JobError::InvalidState(message) | JobError::UnknownJobType(message) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))
        }
        JobError::Execution(message) | JobError::Storage(message) => {
            log::error!("Job subsystem error: {}", message);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("An unexpected error occurred"))
        }
    }
}
