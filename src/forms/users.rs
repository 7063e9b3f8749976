use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::user::{NewUser, UpdateUser};
use crate::forms::sanitize_inline_text;

/// Maximum allowed length for a first or last name.
const NAME_MAX_LEN: usize = 255;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum allowed length for an image URL or path.
const IMAGE_MAX_LEN_VALIDATOR: u64 = 2048;

/// Result type returned by the user form helpers.
pub type UserFormResult<T> = Result<T, UserFormError>;

/// Errors that can occur while processing user forms.
#[derive(Debug, Error)]
pub enum UserFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Form payload submitted when creating or editing a user.
#[derive(Debug, Deserialize, Validate)]
pub struct UserForm {
    #[validate(length(max = NAME_MAX_LEN_VALIDATOR))]
    pub first_name: String,
    #[validate(length(max = NAME_MAX_LEN_VALIDATOR))]
    pub last_name: String,
    /// Profile picture; a blank value clears it.
    #[validate(length(max = IMAGE_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub image: Option<String>,
}

impl UserForm {
    /// Validates and sanitizes the payload into a domain `NewUser`.
    pub fn into_new_user(self) -> UserFormResult<NewUser> {
        self.validate()?;

        let (first_name, last_name, image) = self.sanitized();
        Ok(NewUser::new(first_name, last_name, image))
    }

    /// Validates and sanitizes the payload into a full `UpdateUser` overwrite.
    pub fn into_update_user(self) -> UserFormResult<UpdateUser> {
        self.validate()?;

        let (first_name, last_name, image) = self.sanitized();
        Ok(UpdateUser::new(first_name, last_name, image))
    }

    fn sanitized(self) -> (String, String, Option<String>) {
        let image = self
            .image
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        (
            sanitize_inline_text(&self.first_name),
            sanitize_inline_text(&self.last_name),
            image,
        )
    }
}
