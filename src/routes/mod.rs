use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod main;
pub mod messages;
pub mod tags;
pub mod users;

/// Flash message prepared for the base layout.
#[derive(Debug, Serialize)]
struct Alert {
    level: &'static str,
    content: String,
}

/// Registers every page of the application.
///
/// `/users/new` is registered ahead of `/users/{id}`; ids only match digits anyway.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::show_index)
        .service(users::show_users)
        .service(users::new_user)
        .service(users::add_user)
        .service(users::show_user)
        .service(users::delete_user)
        .service(users::edit_user_form)
        .service(users::edit_user)
        .service(messages::show_user_messages)
        .service(messages::new_message)
        .service(messages::add_message)
        .service(messages::show_message)
        .service(messages::delete_message)
        .service(messages::edit_message_form)
        .service(messages::edit_message)
        .service(tags::show_tags)
        .service(tags::new_tag)
        .service(tags::add_tag)
        .service(tags::show_tag)
        .service(tags::delete_tag)
        .service(tags::edit_tag_form)
        .service(tags::edit_tag);
}

/// Context shared by every page: pending flash messages and the active section.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts: Vec<Alert> = flash_messages
        .iter()
        .map(|message| Alert {
            level: alert_level(message.level()),
            content: message.content().to_string(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

fn alert_level(level: Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// `303 See Other` so that browsers follow up with a `GET`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_with_status(tera, StatusCode::OK, template, context)
}

fn render_with_status(
    tera: &Tera,
    status: StatusCode,
    template: &str,
    context: &Context,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Renders the error page with the given status.
pub fn render_error(tera: &Tera, status: StatusCode, message: &str) -> HttpResponse {
    let mut context = Context::new();
    context.insert("alerts", &Vec::<Alert>::new());
    context.insert("current_page", "error");
    context.insert("status", &status.as_u16());
    context.insert("message", message);
    render_with_status(tera, status, "errors/error.html", &context)
}

pub fn not_found_page(tera: &Tera) -> HttpResponse {
    render_error(tera, StatusCode::NOT_FOUND, "The page you requested does not exist.")
}

pub fn bad_request_page(tera: &Tera, message: &str) -> HttpResponse {
    render_error(tera, StatusCode::BAD_REQUEST, message)
}

/// Maps a failed service call onto an error page; `action` names what failed in the log.
pub fn service_error_response(tera: &Tera, err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => not_found_page(tera),
        ServiceError::Form(message) => bad_request_page(tera, &message),
        ServiceError::Internal(_) => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Fallback for every unmatched request.
pub async fn not_found(tera: web::Data<Tera>) -> HttpResponse {
    not_found_page(&tera)
}
