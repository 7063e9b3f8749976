use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::message::{NewMessage, UpdateMessage};
use crate::forms::sanitize_multiline_text;

/// Maximum allowed length for the message text.
const CONTENT_MAX_LEN: usize = 4096;
const CONTENT_MAX_LEN_VALIDATOR: u64 = CONTENT_MAX_LEN as u64;

/// Result type returned by the message form helpers.
pub type MessageFormResult<T> = Result<T, MessageFormError>;

/// Errors that can occur while processing message forms.
#[derive(Debug, Error)]
pub enum MessageFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Form payload submitted when creating or editing a message.
#[derive(Debug, Deserialize, Validate)]
pub struct MessageForm {
    #[validate(length(max = CONTENT_MAX_LEN_VALIDATOR))]
    pub content: String,
    /// Selected tag identifiers, one `tags` field per checked box.
    #[serde(default)]
    pub tags: Vec<i32>,
}

impl MessageForm {
    /// Validates the payload into a `NewMessage` owned by `user_id`.
    pub fn into_new_message(self, user_id: i32) -> MessageFormResult<NewMessage> {
        self.validate()?;

        Ok(NewMessage::new(user_id, sanitize_multiline_text(&self.content)).with_tags(self.tags))
    }

    /// Validates the payload into an `UpdateMessage` replacing content and tags.
    pub fn into_update_message(self) -> MessageFormResult<UpdateMessage> {
        self.validate()?;

        Ok(UpdateMessage::new(sanitize_multiline_text(&self.content), self.tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::decode_form;

    #[test]
    fn message_form_deduplicates_tags() {
        let form: MessageForm = decode_form(b"content=hi&tags=2&tags=1&tags=2").expect("decodes");

        let new_message = form.into_new_message(4).expect("expected conversion");

        assert_eq!(new_message.user_id, 4);
        assert_eq!(new_message.content, "hi");
        assert_eq!(new_message.tag_ids.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn message_form_without_tags_clears_them() {
        let form: MessageForm = decode_form(b"content=%20edited%20").expect("decodes");

        let update = form.into_update_message().expect("expected conversion");

        assert_eq!(update.content, "edited");
        assert!(update.tag_ids.is_empty());
    }

    #[test]
    fn overlong_content_is_rejected() {
        let form = MessageForm {
            content: "x".repeat(CONTENT_MAX_LEN + 1),
            tags: Vec::new(),
        };

        let result = form.into_update_message();

        assert!(matches!(result, Err(MessageFormError::Validation(_))));
    }
}
