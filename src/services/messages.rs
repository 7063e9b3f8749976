use std::collections::BTreeSet;

use crate::domain::message::{Message, MessageListQuery};
use crate::domain::tag::Tag;
use crate::domain::user::User;
use crate::forms::messages::MessageForm;
use crate::repository::{MessageReader, MessageWriter, TagReader, UserReader};
use crate::services::{ServiceError, ServiceResult};

/// Data required to render the messages of one user.
pub struct UserMessagesPageData {
    pub user: User,
    /// Messages owned by `user`, ordered by id.
    pub messages: Vec<Message>,
}

/// Data required to render the message creation form.
pub struct NewMessagePageData {
    pub user: User,
    /// Every tag the new message can be labelled with.
    pub tags: Vec<Tag>,
}

/// Data required to render a single message.
pub struct MessagePageData {
    pub message: Message,
    /// Author of the message.
    pub user: User,
}

/// Data required to render the message edit form.
pub struct EditMessagePageData {
    pub message: Message,
    /// Every tag available for selection.
    pub tags: Vec<Tag>,
    /// Tags currently attached to the message.
    pub selected: BTreeSet<i32>,
}

/// Loads a user and the messages it owns.
pub fn load_user_messages<R>(repo: &R, user_id: i32) -> ServiceResult<UserMessagesPageData>
where
    R: UserReader + MessageReader + ?Sized,
{
    let user = repo
        .get_user_by_id(user_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let messages = repo
        .list_messages(MessageListQuery::new().user(user.id))
        .map_err(ServiceError::from)?;

    Ok(UserMessagesPageData { user, messages })
}

/// Loads the author and the selectable tags for the creation form.
pub fn load_new_message_page<R>(repo: &R, user_id: i32) -> ServiceResult<NewMessagePageData>
where
    R: UserReader + TagReader + ?Sized,
{
    let user = repo
        .get_user_by_id(user_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let tags = repo.list_tags().map_err(ServiceError::from)?;

    Ok(NewMessagePageData { user, tags })
}

/// Creates a message for `user_id`. Unknown tag ids are ignored.
pub fn create_message<R>(repo: &R, user_id: i32, form: MessageForm) -> ServiceResult<Message>
where
    R: MessageWriter + ?Sized,
{
    let new_message = form
        .into_new_message(user_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_message(&new_message).map_err(ServiceError::from)
}

/// Loads a message together with its author.
pub fn load_message_page<R>(repo: &R, message_id: i32) -> ServiceResult<MessagePageData>
where
    R: MessageReader + UserReader + ?Sized,
{
    let message = load_message(repo, message_id)?;
    let user = repo
        .get_user_by_id(message.user_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    Ok(MessagePageData { message, user })
}

/// Loads a message and every tag for the edit form.
pub fn load_edit_message_page<R>(repo: &R, message_id: i32) -> ServiceResult<EditMessagePageData>
where
    R: MessageReader + TagReader + ?Sized,
{
    let message = load_message(repo, message_id)?;
    let tags = repo.list_tags().map_err(ServiceError::from)?;
    let selected = message.tag_ids();

    Ok(EditMessagePageData {
        message,
        tags,
        selected,
    })
}

/// Overwrites the content of a message and replaces its tag set.
pub fn modify_message<R>(repo: &R, message_id: i32, form: MessageForm) -> ServiceResult<Message>
where
    R: MessageWriter + ?Sized,
{
    let update = form
        .into_update_message()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_message(message_id, &update).map_err(ServiceError::from)
}

/// Deletes a message and returns it so callers can redirect to its author.
pub fn remove_message<R>(repo: &R, message_id: i32) -> ServiceResult<Message>
where
    R: MessageReader + MessageWriter + ?Sized,
{
    let message = load_message(repo, message_id)?;

    repo.delete_message(message.id)
        .map_err(ServiceError::from)?;

    Ok(message)
}

fn load_message<R>(repo: &R, message_id: i32) -> ServiceResult<Message>
where
    R: MessageReader + ?Sized,
{
    repo.get_message_by_id(message_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}
