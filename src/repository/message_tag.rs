//! Explicit operations over the `message_tags` join table.
//!
//! Every function works on a borrowed connection so the writers can compose
//! them inside a single transaction.

use std::collections::{BTreeSet, HashMap};

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::message_tag::MessageTag as DomainMessageTag;
use crate::domain::tag::Tag as DomainTag;
use crate::models::message_tag::MessageTag as DbMessageTag;
use crate::models::tag::Tag as DbTag;
use crate::repository::errors::RepositoryResult;

/// Subset of `ids` that reference stored tags.
pub fn existing_tag_ids(
    conn: &mut SqliteConnection,
    ids: &BTreeSet<i32>,
) -> RepositoryResult<BTreeSet<i32>> {
    use crate::schema::tags;

    if ids.is_empty() {
        return Ok(BTreeSet::new());
    }

    let ids: Vec<i32> = ids.iter().copied().collect();
    let found = tags::table
        .filter(tags::id.eq_any(&ids))
        .select(tags::id)
        .load::<i32>(conn)?;

    Ok(found.into_iter().collect())
}

/// Subset of `ids` that reference stored messages.
pub fn existing_message_ids(
    conn: &mut SqliteConnection,
    ids: &BTreeSet<i32>,
) -> RepositoryResult<BTreeSet<i32>> {
    use crate::schema::messages;

    if ids.is_empty() {
        return Ok(BTreeSet::new());
    }

    let ids: Vec<i32> = ids.iter().copied().collect();
    let found = messages::table
        .filter(messages::id.eq_any(&ids))
        .select(messages::id)
        .load::<i32>(conn)?;

    Ok(found.into_iter().collect())
}

/// Stores the given pairs, ignoring the ones already present.
///
/// Returns how many new associations were written.
pub fn add_pairs(
    conn: &mut SqliteConnection,
    pairs: &[DomainMessageTag],
) -> RepositoryResult<usize> {
    use crate::schema::message_tags;

    let mut inserted = 0usize;
    for pair in pairs {
        inserted += diesel::insert_or_ignore_into(message_tags::table)
            .values(DbMessageTag::from(pair))
            .execute(conn)?;
    }

    Ok(inserted)
}

/// Removes every association of the given messages.
pub fn remove_pairs_for_messages(
    conn: &mut SqliteConnection,
    message_ids: &[i32],
) -> RepositoryResult<usize> {
    use crate::schema::message_tags;

    if message_ids.is_empty() {
        return Ok(0);
    }

    let removed = diesel::delete(
        message_tags::table.filter(message_tags::message_id.eq_any(message_ids)),
    )
    .execute(conn)?;

    Ok(removed)
}

/// Removes every association of the tag.
pub fn remove_pairs_for_tag(conn: &mut SqliteConnection, tag_id: i32) -> RepositoryResult<usize> {
    use crate::schema::message_tags;

    let removed = diesel::delete(message_tags::table.filter(message_tags::tag_id.eq(tag_id)))
        .execute(conn)?;

    Ok(removed)
}

/// Makes `tag_ids` the complete tag set of the message.
///
/// Identifiers without a stored tag are dropped. Returns the resolved set.
pub fn replace_tags_for_message(
    conn: &mut SqliteConnection,
    message_id: i32,
    tag_ids: &BTreeSet<i32>,
) -> RepositoryResult<BTreeSet<i32>> {
    use crate::schema::message_tags;

    let resolved = existing_tag_ids(conn, tag_ids)?;
    let keep: Vec<i32> = resolved.iter().copied().collect();

    diesel::delete(
        message_tags::table
            .filter(message_tags::message_id.eq(message_id))
            .filter(message_tags::tag_id.ne_all(&keep)),
    )
    .execute(conn)?;

    let pairs: Vec<DomainMessageTag> = resolved
        .iter()
        .map(|tag_id| DomainMessageTag::new(message_id, *tag_id))
        .collect();
    add_pairs(conn, &pairs)?;

    Ok(resolved)
}

/// Makes `message_ids` the complete message set of the tag.
///
/// Identifiers without a stored message are dropped. Returns the resolved set.
pub fn replace_messages_for_tag(
    conn: &mut SqliteConnection,
    tag_id: i32,
    message_ids: &BTreeSet<i32>,
) -> RepositoryResult<BTreeSet<i32>> {
    use crate::schema::message_tags;

    let resolved = existing_message_ids(conn, message_ids)?;
    let keep: Vec<i32> = resolved.iter().copied().collect();

    diesel::delete(
        message_tags::table
            .filter(message_tags::tag_id.eq(tag_id))
            .filter(message_tags::message_id.ne_all(&keep)),
    )
    .execute(conn)?;

    let pairs: Vec<DomainMessageTag> = resolved
        .iter()
        .map(|message_id| DomainMessageTag::new(*message_id, tag_id))
        .collect();
    add_pairs(conn, &pairs)?;

    Ok(resolved)
}

/// Stored associations of a single message, ordered by tag id.
pub fn pairs_for_message(
    conn: &mut SqliteConnection,
    message_id: i32,
) -> RepositoryResult<Vec<DomainMessageTag>> {
    use crate::schema::message_tags;

    let rows = message_tags::table
        .filter(message_tags::message_id.eq(message_id))
        .order(message_tags::tag_id.asc())
        .load::<DbMessageTag>(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Loads the tags of every message in `message_ids` with a single query.
pub fn load_tags_for_messages(
    conn: &mut SqliteConnection,
    message_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainTag>>> {
    use crate::schema::{message_tags, tags};

    if message_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = message_tags::table
        .inner_join(tags::table)
        .filter(message_tags::message_id.eq_any(message_ids))
        .order((message_tags::message_id.asc(), tags::id.asc()))
        .select((message_tags::message_id, DbTag::as_select()))
        .load::<(i32, DbTag)>(conn)?;

    let mut map: HashMap<i32, Vec<DomainTag>> = HashMap::new();
    for (message_id, tag) in rows {
        map.entry(message_id).or_default().push(tag.into());
    }

    Ok(map)
}
