pub mod message;
pub mod message_tag;
pub mod tag;
pub mod user;
