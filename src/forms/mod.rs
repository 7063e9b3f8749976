use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod messages;
pub mod tags;
pub mod users;

/// The request body is not a well-formed form submission for the target type.
#[derive(Debug, Error)]
#[error("malformed form data: {0}")]
pub struct FormDecodeError(String);

/// Decodes an `application/x-www-form-urlencoded` body.
///
/// Unlike `web::Form`, repeated keys such as `tags=1&tags=2` collect into a
/// `Vec` field.
pub fn decode_form<T: DeserializeOwned>(body: &[u8]) -> Result<T, FormDecodeError> {
    serde_html_form::from_bytes(body).map_err(|err| FormDecodeError(err.to_string()))
}

/// Trims the input and collapses inner whitespace runs into single spaces.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Trims the input and normalizes line endings, keeping line breaks.
pub(crate) fn sanitize_multiline_text(input: &str) -> String {
    input
        .trim()
        .replace("\r\n", "\n")
        .chars()
        .filter(|ch| *ch == '\n' || *ch == '\t' || !ch.is_control())
        .collect()
}
