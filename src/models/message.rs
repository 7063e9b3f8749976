use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::message::{
    Message as DomainMessage, NewMessage as DomainNewMessage, UpdateMessage as DomainUpdateMessage,
};

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::messages,
    belongs_to(super::user::User, foreign_key = user_id)
)]
pub struct Message {
    pub id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::messages)]
pub struct NewMessage<'a> {
    pub user_id: i32,
    pub content: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::messages)]
pub struct UpdateMessage<'a> {
    pub content: &'a str,
    pub updated_at: NaiveDateTime,
}

// Tags are loaded separately and attached by the repository.
impl From<Message> for DomainMessage {
    fn from(value: Message) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            content: value.content,
            tags: Vec::new(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewMessage> for NewMessage<'a> {
    fn from(value: &'a DomainNewMessage) -> Self {
        Self {
            user_id: value.user_id,
            content: value.content.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateMessage> for UpdateMessage<'a> {
    fn from(value: &'a DomainUpdateMessage) -> Self {
        Self {
            content: value.content.as_str(),
            updated_at: value.updated_at,
        }
    }
}
