use actix_web::{Responder, delete, get, patch, routes, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::decode_form;
use crate::forms::tags::TagForm;
use crate::repository::DieselRepository;
use crate::routes::{
    bad_request_page, base_context, redirect, render_template, service_error_response,
};
use crate::services::tags::{
    create_tag, load_edit_tag_page, load_new_tag_page, load_tag_page, load_tags, modify_tag,
    remove_tag,
};

#[get("/tags")]
pub async fn show_tags(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_tags(repo.get_ref()) {
        Ok(tags) => {
            let mut context = base_context(&flash_messages, "tags");
            context.insert("tags", &tags);
            render_template(&tera, "tags/index.html", &context)
        }
        Err(err) => service_error_response(&tera, err, "list tags"),
    }
}

#[get("/tags/new")]
pub async fn new_tag(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_new_tag_page(repo.get_ref()) {
        Ok(messages) => {
            let mut context = base_context(&flash_messages, "tags");
            context.insert("messages", &messages);
            render_template(&tera, "tags/new.html", &context)
        }
        Err(err) => service_error_response(&tera, err, "load the new tag form"),
    }
}

#[routes]
#[post("/tags")]
#[post("/tags/new")]
pub async fn add_tag(
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = match decode_form::<TagForm>(&body) {
        Ok(form) => form,
        Err(err) => return bad_request_page(&tera, &err.to_string()),
    };

    match create_tag(repo.get_ref(), form) {
        Ok(tag) => {
            FlashMessage::success(format!("Tag «{}» added.", tag.name)).send();
            redirect("/tags")
        }
        Err(err) => service_error_response(&tera, err, "create tag"),
    }
}

#[get("/tags/{tag_id:\\d+}")]
pub async fn show_tag(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let tag_id = path.into_inner();

    match load_tag_page(repo.get_ref(), tag_id) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "tags");
            context.insert("tag", &data.tag);
            context.insert("messages", &data.messages);
            render_template(&tera, "tags/show.html", &context)
        }
        Err(err) => service_error_response(&tera, err, &format!("load tag {tag_id}")),
    }
}

#[delete("/tags/{tag_id:\\d+}")]
pub async fn delete_tag(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let tag_id = path.into_inner();

    match remove_tag(repo.get_ref(), tag_id) {
        Ok(()) => {
            FlashMessage::success("Tag deleted.").send();
            redirect("/tags")
        }
        Err(err) => service_error_response(&tera, err, &format!("delete tag {tag_id}")),
    }
}

#[get("/tags/{tag_id:\\d+}/edit")]
pub async fn edit_tag_form(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let tag_id = path.into_inner();

    match load_edit_tag_page(repo.get_ref(), tag_id) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "tags");
            context.insert("tag", &data.tag);
            context.insert("messages", &data.messages);
            context.insert("selected", &data.selected);
            render_template(&tera, "tags/edit.html", &context)
        }
        Err(err) => service_error_response(&tera, err, &format!("load tag {tag_id}")),
    }
}

#[patch("/tags/{tag_id:\\d+}")]
pub async fn edit_tag(
    path: web::Path<i32>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let tag_id = path.into_inner();
    let form = match decode_form::<TagForm>(&body) {
        Ok(form) => form,
        Err(err) => return bad_request_page(&tera, &err.to_string()),
    };

    match modify_tag(repo.get_ref(), tag_id, form) {
        Ok(tag) => {
            FlashMessage::success(format!("Tag «{}» updated.", tag.name)).send();
            redirect("/tags")
        }
        Err(err) => service_error_response(&tera, err, &format!("update tag {tag_id}")),
    }
}
