//! Fixtures shared by the service unit tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::message::{Message, MessageListQuery, NewMessage, UpdateMessage};
use crate::domain::tag::{NewTag, Tag, UpdateTag};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::mock::{
    MockMessageReader, MockMessageWriter, MockTagReader, MockTagWriter, MockUserReader,
    MockUserWriter,
};
use crate::repository::{MessageReader, MessageWriter, TagReader, TagWriter, UserReader, UserWriter};

pub fn fixed_datetime() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

pub fn sample_user(id: i32, first_name: &str, last_name: &str) -> User {
    User {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        image: None,
        created_at: fixed_datetime(),
        updated_at: fixed_datetime(),
    }
}

pub fn sample_tag(id: i32, name: &str) -> Tag {
    Tag {
        id,
        name: name.to_string(),
        created_at: fixed_datetime(),
        updated_at: fixed_datetime(),
    }
}

pub fn sample_message(id: i32, user_id: i32, content: &str, tags: Vec<Tag>) -> Message {
    Message {
        id,
        user_id,
        content: content.to_string(),
        tags,
        created_at: fixed_datetime(),
        updated_at: fixed_datetime(),
    }
}

/// Combines the per-trait mocks for services that need several of them.
pub struct FakeRepo {
    pub user_reader: MockUserReader,
    pub user_writer: MockUserWriter,
    pub message_reader: MockMessageReader,
    pub message_writer: MockMessageWriter,
    pub tag_reader: MockTagReader,
    pub tag_writer: MockTagWriter,
}

impl FakeRepo {
    pub fn new() -> Self {
        Self {
            user_reader: MockUserReader::new(),
            user_writer: MockUserWriter::new(),
            message_reader: MockMessageReader::new(),
            message_writer: MockMessageWriter::new(),
            tag_reader: MockTagReader::new(),
            tag_writer: MockTagWriter::new(),
        }
    }
}

impl UserReader for FakeRepo {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>> {
        self.user_reader.get_user_by_id(id)
    }

    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        self.user_reader.list_users()
    }
}

impl UserWriter for FakeRepo {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        self.user_writer.create_user(new_user)
    }

    fn update_user(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<User> {
        self.user_writer.update_user(user_id, updates)
    }

    fn delete_user(&self, user_id: i32) -> RepositoryResult<()> {
        self.user_writer.delete_user(user_id)
    }
}

impl MessageReader for FakeRepo {
    fn get_message_by_id(&self, id: i32) -> RepositoryResult<Option<Message>> {
        self.message_reader.get_message_by_id(id)
    }

    fn list_messages(&self, query: MessageListQuery) -> RepositoryResult<Vec<Message>> {
        self.message_reader.list_messages(query)
    }
}

impl MessageWriter for FakeRepo {
    fn create_message(&self, new_message: &NewMessage) -> RepositoryResult<Message> {
        self.message_writer.create_message(new_message)
    }

    fn update_message(
        &self,
        message_id: i32,
        updates: &UpdateMessage,
    ) -> RepositoryResult<Message> {
        self.message_writer.update_message(message_id, updates)
    }

    fn delete_message(&self, message_id: i32) -> RepositoryResult<()> {
        self.message_writer.delete_message(message_id)
    }
}

impl TagReader for FakeRepo {
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>> {
        self.tag_reader.get_tag_by_id(id)
    }

    fn list_tags(&self) -> RepositoryResult<Vec<Tag>> {
        self.tag_reader.list_tags()
    }

    fn list_messages_for_tag(&self, tag_id: i32) -> RepositoryResult<Vec<Message>> {
        self.tag_reader.list_messages_for_tag(tag_id)
    }
}

impl TagWriter for FakeRepo {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag> {
        self.tag_writer.create_tag(new_tag)
    }

    fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag> {
        self.tag_writer.update_tag(tag_id, updates)
    }

    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()> {
        self.tag_writer.delete_tag(tag_id)
    }
}
