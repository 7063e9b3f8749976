use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Domain representation of a user who owns messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier of the user.
    pub id: i32,
    /// Given name of the user.
    pub first_name: String,
    /// Family name of the user.
    pub last_name: String,
    /// Optional URL or path of the profile picture.
    pub image: Option<String>,
    /// Timestamp for when the user record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the user record.
    pub updated_at: NaiveDateTime,
}

impl User {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload required to insert a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub image: Option<String>,
}

impl NewUser {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            image,
        }
    }
}

/// Full overwrite of the mutable user fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    pub first_name: String,
    pub last_name: String,
    pub image: Option<String>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateUser {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            image,
            updated_at: Local::now().naive_utc(),
        }
    }
}
