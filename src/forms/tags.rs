use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::tag::{NewTag, UpdateTag};
use crate::forms::sanitize_inline_text;

/// Maximum allowed length for a tag name.
const NAME_MAX_LEN: usize = 255;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Result type returned by the tag form helpers.
pub type TagFormResult<T> = Result<T, TagFormError>;

/// Errors that can occur while processing tag forms.
#[derive(Debug, Error)]
pub enum TagFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Form payload submitted when creating or editing a tag.
#[derive(Debug, Deserialize, Validate)]
pub struct TagForm {
    /// Name entered by the user.
    #[validate(length(max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Selected message identifiers, one `messages` field per checked box.
    #[serde(default)]
    pub messages: Vec<i32>,
}

impl TagForm {
    /// Validates and sanitizes the payload into a domain `NewTag`.
    pub fn into_new_tag(self) -> TagFormResult<NewTag> {
        self.validate()?;

        Ok(NewTag::new(sanitize_inline_text(&self.name)).with_messages(self.messages))
    }

    /// Validates and sanitizes the payload into a domain `UpdateTag`.
    pub fn into_update_tag(self) -> TagFormResult<UpdateTag> {
        self.validate()?;

        Ok(UpdateTag::new(sanitize_inline_text(&self.name), self.messages))
    }
}
