//! Admin authentication extractor.
//!
//! Identity management lives outside this service; requests carry a
//! bearer token checked against the configured admin token, plus an
//! optional `X-User-Id` header naming the acting user for audit fields.
//! Handlers that mutate state take [`AdminClaims`] as a parameter;
//! extraction failure short-circuits the request with a 401 envelope.

use crate::models::ApiResponse;
use actix_web::http::header;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest, HttpResponse, ResponseError};
use cinecms_commons::UserId;
use cinecms_core::AppContext;
use futures_util::future::{ready, Ready};
use std::fmt;
use std::sync::Arc;

/// Claims of an authenticated admin request.
#[derive(Debug, Clone)]
pub struct AdminClaims {
    /// Acting user from `X-User-Id`, when supplied.
    pub user_id: Option<UserId>,
}

impl AdminClaims {
    pub fn actor(&self) -> Option<UserId> {
        self.user_id.clone()
    }
}

#[derive(Debug)]
pub struct Unauthorized(&'static str);

impl fmt::Display for Unauthorized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for Unauthorized {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized().json(ApiResponse::<()>::error(self.0))
    }
}

impl FromRequest for AdminClaims {
    type Error = Unauthorized;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_claims(req))
    }
}

fn extract_claims(req: &HttpRequest) -> Result<AdminClaims, Unauthorized> {
    let context = req
        .app_data::<web::Data<Arc<AppContext>>>()
        .ok_or(Unauthorized("Server misconfigured"))?;

    let expected = &context.config().security.admin_token;
    if expected.is_empty() {
        log::warn!("Rejecting admin request: no admin token configured");
        return Err(Unauthorized("Admin endpoints are disabled"));
    }

    let supplied = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match supplied {
        Some(token) if token == expected => {
            let user_id = req
                .headers()
                .get("X-User-Id")
                .and_then(|value| value.to_str().ok())
                .filter(|id| !id.is_empty())
                .map(UserId::new);
            Ok(AdminClaims { user_id })
        }
        Some(_) => Err(Unauthorized("Invalid admin token")),
        None => Err(Unauthorized("Missing bearer token")),
    }
}
