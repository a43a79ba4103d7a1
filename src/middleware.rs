//! Server-wide middleware constructors: CORS and request logging.

use actix_cors::Cors;
use actix_web::middleware;
use cinecms_configs::ServerConfig;
use log::debug;

/// Build CORS middleware from server configuration.
///
/// An empty origin list (or a `*` entry) allows any origin.
pub fn build_cors_from_config(config: &ServerConfig) -> Cors {
    let origins = &config.security.allowed_origins;

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .max_age(3600);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin();
        debug!("CORS: allowing any origin");
    } else {
        for origin in origins {
            cors = cors.allowed_origin(origin);
        }
        debug!("CORS: allowed origins: {:?}", origins);
    }

    cors
}

/// Build the request logger middleware.
pub fn request_logger() -> middleware::Logger {
    middleware::Logger::default()
}
