use actix_web::{Responder, delete, get, patch, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::decode_form;
use crate::forms::users::UserForm;
use crate::repository::DieselRepository;
use crate::routes::{
    bad_request_page, base_context, redirect, render_template, service_error_response,
};
use crate::services::users::{create_user, load_user, load_users, modify_user, remove_user};

#[get("/users")]
pub async fn show_users(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_users(repo.get_ref()) {
        Ok(users) => {
            let mut context = base_context(&flash_messages, "users");
            context.insert("users", &users);
            render_template(&tera, "users/index.html", &context)
        }
        Err(err) => service_error_response(&tera, err, "list users"),
    }
}

#[get("/users/new")]
pub async fn new_user(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "users");
    render_template(&tera, "users/new.html", &context)
}

#[post("/users")]
pub async fn add_user(
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = match decode_form::<UserForm>(&body) {
        Ok(form) => form,
        Err(err) => return bad_request_page(&tera, &err.to_string()),
    };

    match create_user(repo.get_ref(), form) {
        Ok(user) => {
            FlashMessage::success(format!("User {} added.", user.full_name())).send();
            redirect("/users")
        }
        Err(err) => service_error_response(&tera, err, "create user"),
    }
}

#[get("/users/{user_id:\\d+}")]
pub async fn show_user(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let user_id = path.into_inner();

    match load_user(repo.get_ref(), user_id) {
        Ok(user) => {
            let mut context = base_context(&flash_messages, "users");
            context.insert("user", &user);
            render_template(&tera, "users/show.html", &context)
        }
        Err(err) => service_error_response(&tera, err, &format!("load user {user_id}")),
    }
}

#[delete("/users/{user_id:\\d+}")]
pub async fn delete_user(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let user_id = path.into_inner();

    match remove_user(repo.get_ref(), user_id) {
        Ok(()) => {
            FlashMessage::success("User deleted.").send();
            redirect("/users")
        }
        Err(err) => service_error_response(&tera, err, &format!("delete user {user_id}")),
    }
}

#[get("/users/{user_id:\\d+}/edit")]
pub async fn edit_user_form(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let user_id = path.into_inner();

    match load_user(repo.get_ref(), user_id) {
        Ok(user) => {
            let mut context = base_context(&flash_messages, "users");
            context.insert("user", &user);
            render_template(&tera, "users/edit.html", &context)
        }
        Err(err) => service_error_response(&tera, err, &format!("load user {user_id}")),
    }
}

#[patch("/users/{user_id:\\d+}")]
pub async fn edit_user(
    path: web::Path<i32>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let user_id = path.into_inner();
    let form = match decode_form::<UserForm>(&body) {
        Ok(form) => form,
        Err(err) => return bad_request_page(&tera, &err.to_string()),
    };

    match modify_user(repo.get_ref(), user_id, form) {
        Ok(user) => {
            FlashMessage::success(format!("User {} updated.", user.full_name())).send();
            redirect(&format!("/users/{}", user.id))
        }
        Err(err) => service_error_response(&tera, err, &format!("update user {user_id}")),
    }
}
