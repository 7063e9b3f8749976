use mockall::mock;

use super::{MessageReader, MessageWriter, TagReader, TagWriter, UserReader, UserWriter};
use crate::domain::{
    message::{Message, MessageListQuery, NewMessage, UpdateMessage},
    tag::{NewTag, Tag, UpdateTag},
    user::{NewUser, UpdateUser, User},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub UserReader {}

    impl UserReader for UserReader {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn list_users(&self) -> RepositoryResult<Vec<User>>;
    }
}

mock! {
    pub UserWriter {}

    impl UserWriter for UserWriter {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn update_user(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<User>;
        fn delete_user(&self, user_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub MessageReader {}

    impl MessageReader for MessageReader {
        fn get_message_by_id(&self, id: i32) -> RepositoryResult<Option<Message>>;
        fn list_messages(&self, query: MessageListQuery) -> RepositoryResult<Vec<Message>>;
    }
}

mock! {
    pub MessageWriter {}

    impl MessageWriter for MessageWriter {
        fn create_message(&self, new_message: &NewMessage) -> RepositoryResult<Message>;
        fn update_message(
            &self,
            message_id: i32,
            updates: &UpdateMessage,
        ) -> RepositoryResult<Message>;
        fn delete_message(&self, message_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub TagReader {}

    impl TagReader for TagReader {
        fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>>;
        fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
        fn list_messages_for_tag(&self, tag_id: i32) -> RepositoryResult<Vec<Message>>;
    }
}

mock! {
    pub TagWriter {}

    impl TagWriter for TagWriter {
        fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
        fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
        fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()>;
    }
}
