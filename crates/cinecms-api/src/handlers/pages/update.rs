//! Page update handler.

use crate::auth::AdminClaims;
use crate::handlers::content_error_response;
use crate::models::{ApiResponse, PageDto, UpdatePageRequest};
use actix_web::{put, web, HttpResponse, Responder};
use cinecms_commons::PageId;
use cinecms_content::UpdatePage;
use cinecms_core::AppContext;
use std::sync::Arc;

/// PUT /api/pages/{id} - Update a page
///
/// Updating a published page creates (or refreshes) its pending draft
/// instead of mutating the live row; the draft is what comes back.
#[put("/pages/{id}")]
pub async fn update_page(
    claims: AdminClaims,
    path: web::Path<String>,
    body: web::Json<UpdatePageRequest>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let id = path.into_inner();
    let request = body.into_inner();

    if request.id != id {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error("ID mismatch"));
    }

    let input = UpdatePage {
        title: request.title,
        seo_title: request.seo_title,
        meta_description: request.meta_description,
        slug: request.slug,
        link_target: request.link_target,
        components: request.components,
    };

    match context
        .pages()
        .update(&PageId::new(id), input, claims.actor())
    {
        Ok(page) => HttpResponse::Ok().json(ApiResponse::success(PageDto::from(page))),
        Err(e) => content_error_response(e),
    }
}
