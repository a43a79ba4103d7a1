//! Page deletion handler.

use crate::auth::AdminClaims;
use crate::handlers::content_error_response;
use crate::models::ApiResponse;
use actix_web::{delete, web, HttpResponse, Responder};
use cinecms_commons::PageId;
use cinecms_core::AppContext;
use std::sync::Arc;

/// DELETE /api/pages/{id} - Soft-delete a page
///
/// The row is flagged deleted, never removed; its slug and link target
/// become reusable immediately.
#[delete("/pages/{id}")]
pub async fn delete_page(
    claims: AdminClaims,
    path: web::Path<String>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let id = PageId::new(path.into_inner());

    match context.pages().delete(&id, claims.actor()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success_with_message((), "Page deleted")),
        Err(e) => content_error_response(e),
    }
}
