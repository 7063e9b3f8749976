use std::collections::BTreeSet;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::tag::Tag;

/// Domain representation of a message written by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Unique identifier of the message.
    pub id: i32,
    /// Identifier of the owning user.
    pub user_id: i32,
    /// Text of the message.
    pub content: String,
    /// Tags attached to the message, ordered by tag id.
    pub tags: Vec<Tag>,
    /// Timestamp for when the message record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the message record.
    pub updated_at: NaiveDateTime,
}

impl Message {
    /// Identifiers of the attached tags.
    pub fn tag_ids(&self) -> BTreeSet<i32> {
        self.tags.iter().map(|tag| tag.id).collect()
    }
}

/// Payload required to insert a new message for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    /// Identifier of the owning user.
    pub user_id: i32,
    /// Text of the message.
    pub content: String,
    /// Tags to attach. Identifiers without a stored tag are dropped.
    pub tag_ids: BTreeSet<i32>,
}

impl NewMessage {
    pub fn new(user_id: i32, content: impl Into<String>) -> Self {
        Self {
            user_id,
            content: content.into(),
            tag_ids: BTreeSet::new(),
        }
    }

    /// Attach the given tags to the message.
    pub fn with_tags(mut self, tag_ids: impl IntoIterator<Item = i32>) -> Self {
        self.tag_ids = tag_ids.into_iter().collect();
        self
    }
}

/// Patch data applied when updating an existing message.
///
/// `tag_ids` replaces the whole set of attached tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMessage {
    pub content: String,
    pub tag_ids: BTreeSet<i32>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateMessage {
    pub fn new(content: impl Into<String>, tag_ids: impl IntoIterator<Item = i32>) -> Self {
        Self {
            content: content.into(),
            tag_ids: tag_ids.into_iter().collect(),
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Query definition used to list messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageListQuery {
    /// Restrict the listing to messages owned by this user.
    pub user_id: Option<i32>,
}

impl MessageListQuery {
    /// Construct a query that targets every stored message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only return messages owned by `user_id`.
    pub fn user(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }
}
