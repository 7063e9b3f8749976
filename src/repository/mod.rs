use crate::db::{DbConnection, DbPool};
use crate::domain::{
    message::{Message, MessageListQuery, NewMessage, UpdateMessage},
    tag::{NewTag, Tag, UpdateTag},
    user::{NewUser, UpdateUser, User},
};

pub mod errors;
pub mod message;
pub mod message_tag;
pub mod tag;
pub mod user;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over user records.
pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    /// All users ordered by id.
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
}

/// Write operations over user records.
pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<User>;
    /// Deletes the user together with its messages and their tag associations.
    fn delete_user(&self, user_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over message records. Returned messages carry their tags.
pub trait MessageReader {
    fn get_message_by_id(&self, id: i32) -> RepositoryResult<Option<Message>>;
    /// Messages matching `query` ordered by id.
    fn list_messages(&self, query: MessageListQuery) -> RepositoryResult<Vec<Message>>;
}

/// Write operations over message records and their tag associations.
pub trait MessageWriter {
    fn create_message(&self, new_message: &NewMessage) -> RepositoryResult<Message>;
    fn update_message(&self, message_id: i32, updates: &UpdateMessage)
    -> RepositoryResult<Message>;
    fn delete_message(&self, message_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over tag records.
pub trait TagReader {
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>>;
    /// All tags ordered by id.
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
    /// Messages the tag is attached to, ordered by id.
    fn list_messages_for_tag(&self, tag_id: i32) -> RepositoryResult<Vec<Message>>;
}

/// Write operations over tag records and their message associations.
pub trait TagWriter {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()>;
}
