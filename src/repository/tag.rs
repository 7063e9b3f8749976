use diesel::prelude::*;

use crate::domain::message::Message as DomainMessage;
use crate::domain::message_tag::MessageTag as DomainMessageTag;
use crate::domain::tag::{NewTag as DomainNewTag, Tag as DomainTag, UpdateTag as DomainUpdateTag};
use crate::models::message::Message as DbMessage;
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag, UpdateTag as DbUpdateTag};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::message::attach_tags;
use crate::repository::message_tag;
use crate::repository::{DieselRepository, TagReader, TagWriter};

impl TagReader for DieselRepository {
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<DomainTag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let tag = tags::table
            .filter(tags::id.eq(id))
            .first::<DbTag>(&mut conn)
            .optional()?;

        Ok(tag.map(Into::into))
    }

    fn list_tags(&self) -> RepositoryResult<Vec<DomainTag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let db_tags = tags::table.order(tags::id.asc()).load::<DbTag>(&mut conn)?;

        Ok(db_tags.into_iter().map(DomainTag::from).collect())
    }

    fn list_messages_for_tag(&self, tag_id: i32) -> RepositoryResult<Vec<DomainMessage>> {
        use crate::schema::{message_tags, messages};

        let mut conn = self.conn()?;
        let db_messages = messages::table
            .inner_join(message_tags::table)
            .filter(message_tags::tag_id.eq(tag_id))
            .order(messages::id.asc())
            .select(DbMessage::as_select())
            .load::<DbMessage>(&mut conn)?;

        attach_tags(&mut conn, db_messages)
    }
}

impl TagWriter for DieselRepository {
    fn create_tag(&self, new_tag: &DomainNewTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<DomainTag, RepositoryError, _>(|conn| {
            let insertable = DbNewTag::from(new_tag);
            let created = diesel::insert_into(tags::table)
                .values(&insertable)
                .get_result::<DbTag>(conn)?;

            let message_ids = message_tag::existing_message_ids(conn, &new_tag.message_ids)?;
            let pairs: Vec<DomainMessageTag> = message_ids
                .iter()
                .map(|message_id| DomainMessageTag::new(*message_id, created.id))
                .collect();
            message_tag::add_pairs(conn, &pairs)?;

            Ok(created.into())
        })
    }

    fn update_tag(&self, tag_id: i32, updates: &DomainUpdateTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<DomainTag, RepositoryError, _>(|conn| {
            let db_updates = DbUpdateTag::from(updates);
            let updated = diesel::update(tags::table.filter(tags::id.eq(tag_id)))
                .set(&db_updates)
                .get_result::<DbTag>(conn)?;

            message_tag::replace_messages_for_tag(conn, tag_id, &updates.message_ids)?;

            Ok(updated.into())
        })
    }

    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()> {
        use crate::schema::tags;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<(), RepositoryError, _>(|conn| {
            message_tag::remove_pairs_for_tag(conn, tag_id)?;

            let deleted = diesel::delete(tags::table.filter(tags::id.eq(tag_id))).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}
