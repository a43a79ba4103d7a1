//! # cinecms-api
//!
//! HTTP surface of CineCMS: request/response models, handlers, the admin
//! bearer-token extractor, and route configuration.
//!
//! Every response is wrapped in [`models::ApiResponse`]:
//! `{ success, data, message, errors }`. Validation problems map to 400,
//! missing entities to 404, illegal transitions to 400, missing
//! credentials to 401, and anything unexpected to a generic 500 with the
//! detail kept server-side.

pub mod auth;
pub mod handlers;
pub mod models;
pub mod routes;
