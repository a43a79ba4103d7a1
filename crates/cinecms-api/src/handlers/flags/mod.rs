//! Feature-flag endpoints.

use crate::auth::AdminClaims;
use crate::handlers::content_error_response;
use crate::models::{ApiResponse, FeatureFlagDto, SetFeatureFlagRequest};
use actix_web::{get, put, web, HttpResponse, Responder};
use cinecms_core::AppContext;
use std::sync::Arc;

/// GET /api/feature-flags - List every flag
#[get("/feature-flags")]
pub async fn list_flags(context: web::Data<Arc<AppContext>>) -> impl Responder {
    match context.flags().list() {
        Ok(flags) => {
            let dtos: Vec<FeatureFlagDto> = flags.into_iter().map(FeatureFlagDto::from).collect();
            HttpResponse::Ok().json(ApiResponse::success(dtos))
        }
        Err(e) => content_error_response(e),
    }
}

/// GET /api/feature-flags/{key} - Fetch one flag (cached)
#[get("/feature-flags/{key}")]
pub async fn get_flag(
    path: web::Path<String>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    match context.flags().get(&path.into_inner()) {
        Ok(flag) => HttpResponse::Ok().json(ApiResponse::success(FeatureFlagDto::from(flag))),
        Err(e) => content_error_response(e),
    }
}

/// PUT /api/feature-flags/{key} - Create or update a flag
#[put("/feature-flags/{key}")]
pub async fn set_flag(
    _claims: AdminClaims,
    path: web::Path<String>,
    body: web::Json<SetFeatureFlagRequest>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let key = path.into_inner();
    let request = body.into_inner();

    match context.flags().set(
        &key,
        request.name,
        request.description,
        request.is_enabled,
        request.audience_percentage,
    ) {
        Ok(flag) => HttpResponse::Ok().json(ApiResponse::success(FeatureFlagDto::from(flag))),
        Err(e) => content_error_response(e),
    }
}
