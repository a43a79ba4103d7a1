//! Movie catalog endpoints.

use crate::auth::AdminClaims;
use crate::handlers::content_error_response;
use crate::models::{ApiResponse, CreateMovieRequest, MovieDto, MovieListParams};
use actix_web::{get, post, web, HttpResponse, Responder};
use cinecms_commons::MovieId;
use cinecms_content::NewMovie;
use cinecms_core::AppContext;
use std::sync::Arc;

/// POST /api/movies - Add a movie to the catalog
#[post("/movies")]
pub async fn create_movie(
    claims: AdminClaims,
    body: web::Json<CreateMovieRequest>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let request = body.into_inner();
    let input = NewMovie {
        title: request.title,
        slug: request.slug,
        overview: request.overview,
        release_date: request.release_date,
        runtime_minutes: request.runtime_minutes,
        poster_path: request.poster_path,
        genres: request.genres,
    };

    match context.movies().create(input, claims.actor()) {
        Ok(movie) => HttpResponse::Ok().json(ApiResponse::success(MovieDto::from(movie))),
        Err(e) => content_error_response(e),
    }
}

/// GET /api/movies/{id} - Fetch one movie
#[get("/movies/{id}")]
pub async fn get_movie(
    path: web::Path<String>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let id = MovieId::new(path.into_inner());

    match context.movies().get(&id) {
        Ok(movie) => HttpResponse::Ok().json(ApiResponse::success(MovieDto::from(movie))),
        Err(e) => content_error_response(e),
    }
}

/// GET /api/movies/by-slug/{slug} - Look up a movie by slug
#[get("/movies/by-slug/{slug}")]
pub async fn get_movie_by_slug(
    path: web::Path<String>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let slug = path.into_inner();

    match context.movies().get_by_slug(&slug) {
        Ok(movie) => HttpResponse::Ok().json(ApiResponse::success(MovieDto::from(movie))),
        Err(e) => content_error_response(e),
    }
}

/// GET /api/movies - Paginated catalog listing
#[get("/movies")]
pub async fn list_movies(
    query: web::Query<MovieListParams>,
    context: web::Data<Arc<AppContext>>,
) -> impl Responder {
    let params = query.into_inner();

    match context
        .movies()
        .list(params.page_number, params.page_size, params.search_term.as_deref())
    {
        Ok(list) => HttpResponse::Ok().json(ApiResponse::success(list.map(MovieDto::from))),
        Err(e) => content_error_response(e),
    }
}
