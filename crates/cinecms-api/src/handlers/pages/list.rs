//! Paginated page listing.

use crate::handlers::content_error_response;
use crate::models::{ApiResponse, PageDto, PageListParams};
use actix_web::{get, web, HttpResponse, Responder};
use cinecms_commons::PageStatus;
use cinecms_content::ListPagesQuery;
use cinecms_core::AppContext;
use std::str::FromStr;
use std::sync::Arc;

/// GET /api/pages - Paginated listing with search and status filters
#[get("/pages")]
pub async fn list_pages(
    query: web::Query<PageListParams>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let params = query.into_inner();

    let status = match params.status.as_deref() {
        Some(raw) => match PageStatus::from_str(raw) {
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

    let list_query = ListPagesQuery {
        page_number: params.page_number,
        page_size: params.page_size,
        search_term: params.search_term,
        status,
        include_drafts: params.include_drafts,
    };

    match context.pages().list(list_query) {
        Ok(list) => HttpResponse::Ok().json(ApiResponse::success(list.map(PageDto::from))),
        Err(e) => content_error_response(e),
    }
}
