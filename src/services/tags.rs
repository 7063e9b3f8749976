use std::collections::BTreeSet;

use crate::domain::message::{Message, MessageListQuery};
use crate::domain::tag::Tag;
use crate::forms::tags::TagForm;
use crate::repository::{MessageReader, TagReader, TagWriter};
use crate::services::{ServiceError, ServiceResult};

/// Data required to render a single tag.
pub struct TagPageData {
    pub tag: Tag,
    /// Messages labelled with the tag, ordered by id.
    pub messages: Vec<Message>,
}

/// Data required to render the tag edit form.
pub struct EditTagPageData {
    pub tag: Tag,
    /// Every message available for selection.
    pub messages: Vec<Message>,
    /// Messages currently labelled with the tag.
    pub selected: BTreeSet<i32>,
}

/// Lists every tag ordered by id.
pub fn load_tags<R>(repo: &R) -> ServiceResult<Vec<Tag>>
where
    R: TagReader + ?Sized,
{
    repo.list_tags().map_err(ServiceError::from)
}

/// Lists every message so the creation form can offer them.
pub fn load_new_tag_page<R>(repo: &R) -> ServiceResult<Vec<Message>>
where
    R: MessageReader + ?Sized,
{
    repo.list_messages(MessageListQuery::new()).map_err(ServiceError::from)
}

/// Creates a tag. Unknown message ids are ignored.
pub fn create_tag<R>(repo: &R, form: TagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let new_tag = form
        .into_new_tag()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_tag(&new_tag).map_err(ServiceError::from)
}

/// Loads a tag and the messages it labels.
pub fn load_tag_page<R>(repo: &R, tag_id: i32) -> ServiceResult<TagPageData>
where
    R: TagReader + ?Sized,
{
    let tag = load_tag(repo, tag_id)?;
    let messages = repo
        .list_messages_for_tag(tag.id)
        .map_err(ServiceError::from)?;

    Ok(TagPageData { tag, messages })
}

/// Loads a tag, every message and the current selection for the edit form.
pub fn load_edit_tag_page<R>(repo: &R, tag_id: i32) -> ServiceResult<EditTagPageData>
where
    R: TagReader + MessageReader + ?Sized,
{
    let tag = load_tag(repo, tag_id)?;
    let selected = repo
        .list_messages_for_tag(tag.id)
        .map_err(ServiceError::from)?
        .into_iter()
        .map(|message| message.id)
        .collect();
    let messages = repo
        .list_messages(MessageListQuery::new())
        .map_err(ServiceError::from)?;

    Ok(EditTagPageData {
        tag,
        messages,
        selected,
    })
}

/// Renames a tag and replaces the set of messages it labels.
pub fn modify_tag<R>(repo: &R, tag_id: i32, form: TagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let update = form
        .into_update_tag()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_tag(tag_id, &update).map_err(ServiceError::from)
}

/// Deletes a tag. Labelled messages are kept.
pub fn remove_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<()>
where
    R: TagWriter + ?Sized,
{
    repo.delete_tag(tag_id).map_err(ServiceError::from)
}

fn load_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<Tag>
where
    R: TagReader + ?Sized,
{
    repo.get_tag_by_id(tag_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}
