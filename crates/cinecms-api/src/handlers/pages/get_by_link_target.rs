//! Page lookup by link target.

use crate::handlers::content_error_response;
use crate::models::{ApiResponse, LookupParams, PageDto};
use actix_web::{get, web, HttpResponse, Responder};
use cinecms_core::AppContext;
use std::sync::Arc;

/// GET /api/pages/by-link-target/{linkTarget} - Look up a page by its
/// internal navigation key
#[get("/pages/by-link-target/{link_target}")]
pub async fn get_page_by_link_target(
    path: web::Path<String>,
    query: web::Query<LookupParams>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let link_target = path.into_inner();

    match context
        .pages()
        .get_by_link_target(&link_target, query.include_drafts)
    {
        Ok(page) => HttpResponse::Ok().json(ApiResponse::success(PageDto::from(page))),
        Err(e) => content_error_response(e),
    }
}
