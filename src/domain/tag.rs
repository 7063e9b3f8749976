use std::collections::BTreeSet;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Domain representation of a label that can be attached to many messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier of the tag.
    pub id: i32,
    /// Human-readable name of the tag.
    pub name: String,
    /// Timestamp for when the tag record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the tag record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    /// Human-readable name of the tag.
    pub name: String,
    /// Messages the tag should be attached to. Identifiers without a stored
    /// message are dropped when the tag is persisted.
    pub message_ids: BTreeSet<i32>,
}

impl NewTag {
    /// Construct a new tag payload with a trimmed name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        Self {
            name,
            message_ids: BTreeSet::new(),
        }
    }

    /// Attach the tag to the given messages.
    pub fn with_messages(mut self, message_ids: impl IntoIterator<Item = i32>) -> Self {
        self.message_ids = message_ids.into_iter().collect();
        self
    }
}

/// Patch data applied when updating an existing tag.
///
/// `message_ids` replaces the whole set of associated messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTag {
    /// Updated human-readable name of the tag.
    pub name: String,
    /// Complete set of messages the tag should be attached to afterwards.
    pub message_ids: BTreeSet<i32>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateTag {
    pub fn new(name: impl Into<String>, message_ids: impl IntoIterator<Item = i32>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            message_ids: message_ids.into_iter().collect(),
            updated_at: Local::now().naive_utc(),
        }
    }
}
