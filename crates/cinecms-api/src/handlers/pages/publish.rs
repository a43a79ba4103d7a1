//! Page publish handler.

use crate::auth::AdminClaims;
use crate::handlers::content_error_response;
use crate::models::{ApiResponse, PageDto};
use actix_web::{post, web, HttpResponse, Responder};
use cinecms_commons::PageId;
use cinecms_core::AppContext;
use std::sync::Arc;

/// POST /api/pages/{id}/publish - Publish a draft
///
/// Publishing a pending draft folds it into the original row and removes
/// the draft; the returned page is the live one.
#[post("/pages/{id}/publish")]
pub async fn publish_page(
    claims: AdminClaims,
    path: web::Path<String>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let id = PageId::new(path.into_inner());

    match context.pages().publish(&id, claims.actor()) {
        Ok(page) => HttpResponse::Ok().json(ApiResponse::success(PageDto::from(page))),
        Err(e) => content_error_response(e),
    }
}
