use diesel::prelude::*;

use crate::domain::message_tag::MessageTag as DomainMessageTag;

#[derive(Debug, Clone, Copy, Identifiable, Queryable, Insertable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::message_tags,
    primary_key(message_id, tag_id),
    belongs_to(super::message::Message, foreign_key = message_id),
    belongs_to(super::tag::Tag, foreign_key = tag_id)
)]
pub struct MessageTag {
    pub message_id: i32,
    pub tag_id: i32,
}

impl From<MessageTag> for DomainMessageTag {
    fn from(value: MessageTag) -> Self {
        Self {
            message_id: value.message_id,
            tag_id: value.tag_id,
        }
    }
}

impl From<&DomainMessageTag> for MessageTag {
    fn from(value: &DomainMessageTag) -> Self {
        Self {
            message_id: value.message_id,
            tag_id: value.tag_id,
        }
    }
}
