//! Genre endpoints.

use crate::auth::AdminClaims;
use crate::handlers::content_error_response;
use crate::models::ApiResponse;
use actix_web::{get, post, web, HttpResponse, Responder};
use cinecms_commons::Genre;
use cinecms_core::AppContext;
use std::sync::Arc;

/// GET /api/genres - List genres, sorted by name
#[get("/genres")]
pub async fn list_genres(context: web::Data<Arc<AppContext>>) -> impl Responder {
    match context.genres().list() {
        Ok(genres) => HttpResponse::Ok().json(ApiResponse::success(genres)),
        Err(e) => content_error_response(e),
    }
}

/// POST /api/genres/import - Upsert a batch of genres from a catalog feed
#[post("/genres/import")]
pub async fn import_genres(
    _claims: AdminClaims,
    body: web::Json<Vec<Genre>>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    match context.genres().upsert_all(&body.into_inner()) {
        Ok(count) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            count,
            format!("Imported {} genres", count),
        )),
        Err(e) => content_error_response(e),
    }
}
