pub use errors::{ServiceError, ServiceResult};

pub mod errors;
pub mod messages;
pub mod tags;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;
