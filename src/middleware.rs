//! HTTP method override for HTML forms.
//!
//! Browsers only submit `GET` and `POST`, so edit and delete forms post to
//! `...?_method=PATCH` or `...?_method=DELETE` and the request is routed as
//! that method.

use actix_web::Error;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::Method;
use actix_web::middleware::Next;
use serde::Deserialize;

/// Name of the query parameter carrying the overriding method.
pub const METHOD_OVERRIDE_PARAM: &str = "_method";

#[derive(Debug, Deserialize)]
struct OverrideQuery {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Method a request should be routed as, if it asks for an override.
///
/// Only `POST` requests may be overridden, and only to `PATCH` or `DELETE`.
pub fn overridden_method(method: &Method, query_string: &str) -> Option<Method> {
    if *method != Method::POST || query_string.is_empty() {
        return None;
    }

    let query: OverrideQuery = serde_html_form::from_str(query_string).ok()?;

    match query.method?.trim().to_ascii_uppercase().as_str() {
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

/// Rewrites the request method before routing. Register with `middleware::from_fn`.
pub async fn method_override(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if let Some(method) = overridden_method(req.method(), req.query_string()) {
        log::debug!(
            "Routing {} {} as {method} ({METHOD_OVERRIDE_PARAM})",
            req.method(),
            req.path()
        );
        req.head_mut().method = method;
    }

    next.call(req).await
}
