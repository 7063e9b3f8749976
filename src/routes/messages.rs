use actix_web::{Responder, delete, get, patch, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::decode_form;
use crate::forms::messages::MessageForm;
use crate::repository::DieselRepository;
use crate::routes::{
    bad_request_page, base_context, redirect, render_template, service_error_response,
};
use crate::services::messages::{
    create_message, load_edit_message_page, load_message_page, load_new_message_page,
    load_user_messages, modify_message, remove_message,
};

#[get("/users/{user_id:\\d+}/messages")]
pub async fn show_user_messages(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let user_id = path.into_inner();

    match load_user_messages(repo.get_ref(), user_id) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "users");
            context.insert("user", &data.user);
            context.insert("messages", &data.messages);
            render_template(&tera, "messages/index.html", &context)
        }
        Err(err) => service_error_response(
            &tera,
            err,
            &format!("list messages of user {user_id}"),
        ),
    }
}

#[get("/users/{user_id:\\d+}/newmsg")]
pub async fn new_message(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let user_id = path.into_inner();

    match load_new_message_page(repo.get_ref(), user_id) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "users");
            context.insert("user", &data.user);
            context.insert("tags", &data.tags);
            render_template(&tera, "messages/new.html", &context)
        }
        Err(err) => service_error_response(&tera, err, "load the new message form"),
    }
}

#[post("/users/{user_id:\\d+}/messages")]
pub async fn add_message(
    path: web::Path<i32>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let user_id = path.into_inner();
    let form = match decode_form::<MessageForm>(&body) {
        Ok(form) => form,
        Err(err) => return bad_request_page(&tera, &err.to_string()),
    };

    match create_message(repo.get_ref(), user_id, form) {
        Ok(_) => {
            FlashMessage::success("Message added.").send();
            redirect(&format!("/users/{user_id}/messages"))
        }
        Err(err) => service_error_response(
            &tera,
            err,
            &format!("create message for user {user_id}"),
        ),
    }
}

#[get("/messages/{message_id:\\d+}")]
pub async fn show_message(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let message_id = path.into_inner();

    match load_message_page(repo.get_ref(), message_id) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "users");
            context.insert("message", &data.message);
            context.insert("user", &data.user);
            render_template(&tera, "messages/show.html", &context)
        }
        Err(err) => service_error_response(&tera, err, &format!("load message {message_id}")),
    }
}

#[delete("/messages/{message_id:\\d+}")]
pub async fn delete_message(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let message_id = path.into_inner();

    match remove_message(repo.get_ref(), message_id) {
        Ok(message) => {
            FlashMessage::success("Message deleted.").send();
            redirect(&format!("/users/{}/messages", message.user_id))
        }
        Err(err) => service_error_response(&tera, err, &format!("delete message {message_id}")),
    }
}

#[get("/messages/{message_id:\\d+}/edit")]
pub async fn edit_message_form(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let message_id = path.into_inner();

    match load_edit_message_page(repo.get_ref(), message_id) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "users");
            context.insert("message", &data.message);
            context.insert("tags", &data.tags);
            context.insert("selected", &data.selected);
            render_template(&tera, "messages/edit.html", &context)
        }
        Err(err) => service_error_response(&tera, err, &format!("load message {message_id}")),
    }
}

#[patch("/messages/{message_id:\\d+}")]
pub async fn edit_message(
    path: web::Path<i32>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let message_id = path.into_inner();
    let form = match decode_form::<MessageForm>(&body) {
        Ok(form) => form,
        Err(err) => return bad_request_page(&tera, &err.to_string()),
    };

    match modify_message(repo.get_ref(), message_id, form) {
        Ok(message) => {
            FlashMessage::success("Message updated.").send();
            redirect(&format!("/users/{}/messages", message.user_id))
        }
        Err(err) => service_error_response(&tera, err, &format!("update message {message_id}")),
    }
}
