use serde::{Deserialize, Serialize};

/// Association between a message and a tag. A pair is stored at most once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageTag {
    /// Identifier of the tagged message.
    pub message_id: i32,
    /// Identifier of the attached tag.
    pub tag_id: i32,
}

impl MessageTag {
    /// Construct a new association between a message and a tag.
    pub fn new(message_id: i32, tag_id: i32) -> Self {
        Self { message_id, tag_id }
    }
}
