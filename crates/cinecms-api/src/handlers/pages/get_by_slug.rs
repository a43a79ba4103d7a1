//! Page lookup by slug.

use crate::handlers::content_error_response;
use crate::models::{ApiResponse, LookupParams, PageDto};
use actix_web::{get, web, HttpResponse, Responder};
use cinecms_core::AppContext;
use std::sync::Arc;

/// GET /api/pages/by-slug/{slug} - Look up a page by slug
///
/// Published lookups are served through the content cache; pass
/// `?includeDrafts=true` to bypass it and see the pending draft.
#[get("/pages/by-slug/{slug}")]
pub async fn get_page_by_slug(
    path: web::Path<String>,
    query: web::Query<LookupParams>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let slug = path.into_inner();

    match context.pages().get_by_slug(&slug, query.include_drafts) {
        Ok(page) => HttpResponse::Ok().json(ApiResponse::success(PageDto::from(page))),
        Err(e) => content_error_response(e),
    }
}
