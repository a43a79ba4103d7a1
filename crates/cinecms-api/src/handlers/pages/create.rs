//! Page creation handler.

use crate::auth::AdminClaims;
use crate::handlers::content_error_response;
use crate::models::{ApiResponse, CreatePageRequest, PageDto};
use actix_web::{post, web, HttpResponse, Responder};
use cinecms_content::NewPage;
use cinecms_core::AppContext;
use std::sync::Arc;

/// POST /api/pages - Create a new draft page
#[post("/pages")]
pub async fn create_page(
    claims: AdminClaims,
    body: web::Json<CreatePageRequest>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let request = body.into_inner();
    let input = NewPage {
        title: request.title,
        seo_title: request.seo_title,
        meta_description: request.meta_description,
        slug: request.slug,
        link_target: request.link_target,
        components: request.components,
    };

    match context.pages().create(input, claims.actor()) {
        Ok(page) => HttpResponse::Ok().json(ApiResponse::success(PageDto::from(page))),
        Err(e) => content_error_response(e),
    }
}
