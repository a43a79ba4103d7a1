//! HTTP route registration.
//!
//! Wires the Actix application to the shared `cinecms-api` route
//! configuration so the server entrypoint stays lightweight.

use actix_web::web;

/// Register all HTTP routes for the server.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cinecms_api::routes::configure_routes(cfg);
}
