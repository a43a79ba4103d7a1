//! API route configuration.
//!
//! Note: the by-slug and by-link-target routes are registered before the
//! `{id}` routes so the literal segments win the match.

use crate::handlers;
use actix_web::web;

/// Register all HTTP routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::health::healthz).service(
        web::scope("/api")
            // Pages
            .service(handlers::pages::get_page_by_slug)
            .service(handlers::pages::get_page_by_link_target)
            .service(handlers::pages::list_pages)
            .service(handlers::pages::create_page)
            .service(handlers::pages::update_page)
            .service(handlers::pages::publish_page)
            .service(handlers::pages::delete_page)
            // Jobs
            .service(handlers::jobs::list_jobs)
            .service(handlers::jobs::create_job)
            .service(handlers::jobs::get_job)
            .service(handlers::jobs::start_job)
            .service(handlers::jobs::cancel_job)
            // Movies
            .service(handlers::movies::get_movie_by_slug)
            .service(handlers::movies::list_movies)
            .service(handlers::movies::create_movie)
            .service(handlers::movies::get_movie)
            // Genres
            .service(handlers::genres::list_genres)
            .service(handlers::genres::import_genres)
            // Feature flags
            .service(handlers::flags::list_flags)
            .service(handlers::flags::get_flag)
            .service(handlers::flags::set_flag),
    );
}
