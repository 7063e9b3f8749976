use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::message::{
        Message as DomainMessage, MessageListQuery, NewMessage as DomainNewMessage,
        UpdateMessage as DomainUpdateMessage,
    },
    domain::message_tag::MessageTag as DomainMessageTag,
    models::message::{
        Message as DbMessage, NewMessage as DbNewMessage, UpdateMessage as DbUpdateMessage,
    },
    repository::errors::{RepositoryError, RepositoryResult},
    repository::message_tag,
    repository::user::ensure_user_exists,
    repository::{DieselRepository, MessageReader, MessageWriter},
};

impl MessageReader for DieselRepository {
    fn get_message_by_id(&self, id: i32) -> RepositoryResult<Option<DomainMessage>> {
        use crate::schema::messages;

        let mut conn = self.conn()?;
        let message = messages::table
            .filter(messages::id.eq(id))
            .first::<DbMessage>(&mut conn)
            .optional()?;

        match message {
            Some(db_message) => Ok(Some(load_message_with_tags(&mut conn, db_message)?)),
            None => Ok(None),
        }
    }

    fn list_messages(&self, query: MessageListQuery) -> RepositoryResult<Vec<DomainMessage>> {
        use crate::schema::messages;

        let mut conn = self.conn()?;

        let mut items = messages::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(user_id) = query.user_id {
            items = items.filter(messages::user_id.eq(user_id));
        }

        let db_messages = items
            .order(messages::id.asc())
            .load::<DbMessage>(&mut conn)?;

        attach_tags(&mut conn, db_messages)
    }
}

impl MessageWriter for DieselRepository {
    fn create_message(&self, new_message: &DomainNewMessage) -> RepositoryResult<DomainMessage> {
        use crate::schema::messages;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<DomainMessage, RepositoryError, _>(|conn| {
            ensure_user_exists(conn, new_message.user_id)?;

            let db_new = DbNewMessage::from(new_message);
            let created = diesel::insert_into(messages::table)
                .values(&db_new)
                .get_result::<DbMessage>(conn)?;

            let tag_ids = message_tag::existing_tag_ids(conn, &new_message.tag_ids)?;
            let pairs: Vec<DomainMessageTag> = tag_ids
                .iter()
                .map(|tag_id| DomainMessageTag::new(created.id, *tag_id))
                .collect();
            message_tag::add_pairs(conn, &pairs)?;

            load_message_with_tags(conn, created)
        })
    }

    fn update_message(
        &self,
        message_id: i32,
        updates: &DomainUpdateMessage,
    ) -> RepositoryResult<DomainMessage> {
        use crate::schema::messages;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<DomainMessage, RepositoryError, _>(|conn| {
            let db_updates = DbUpdateMessage::from(updates);
            let updated = diesel::update(messages::table.filter(messages::id.eq(message_id)))
                .set(&db_updates)
                .get_result::<DbMessage>(conn)?;

            message_tag::replace_tags_for_message(conn, message_id, &updates.tag_ids)?;

            load_message_with_tags(conn, updated)
        })
    }

    fn delete_message(&self, message_id: i32) -> RepositoryResult<()> {
        use crate::schema::messages;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<(), RepositoryError, _>(|conn| {
            message_tag::remove_pairs_for_messages(conn, &[message_id])?;

            let deleted = diesel::delete(messages::table.filter(messages::id.eq(message_id)))
                .execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}

fn load_message_with_tags(
    conn: &mut SqliteConnection,
    db_message: DbMessage,
) -> RepositoryResult<DomainMessage> {
    let mut tags = message_tag::load_tags_for_messages(conn, &[db_message.id])?;
    let mut domain: DomainMessage = db_message.into();
    domain.tags = tags.remove(&domain.id).unwrap_or_default();
    Ok(domain)
}

/// Converts loaded rows into domain messages with their tags attached.
pub(crate) fn attach_tags(
    conn: &mut SqliteConnection,
    db_messages: Vec<DbMessage>,
) -> RepositoryResult<Vec<DomainMessage>> {
    if db_messages.is_empty() {
        return Ok(Vec::new());
    }

    let message_ids: Vec<i32> = db_messages.iter().map(|message| message.id).collect();
    let mut tag_map = message_tag::load_tags_for_messages(conn, &message_ids)?;

    let mut domain_messages = Vec::with_capacity(db_messages.len());
    for db_message in db_messages {
        let mut domain: DomainMessage = db_message.into();
        domain.tags = tag_map.remove(&domain.id).unwrap_or_default();
        domain_messages.push(domain);
    }

    Ok(domain_messages)
}
