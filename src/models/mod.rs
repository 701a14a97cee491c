//! Domain models
//!
//! Records serialize to the persisted camelCase JSON layout of the
//! collections in the key-value store.

pub mod enums;
pub mod equipment;
pub mod maintenance;
pub mod notification;
pub mod rental;
pub mod user;

use uuid::Uuid;

/// Generate a record id: a type-hint prefix (`eq`, `r`, `m`) followed by
/// the first 8 hex characters of a random v4 UUID.
pub fn prefixed_id(prefix: &str) -> String {
    let uid = Uuid::new_v4().simple().to_string();
    format!("{}{}", prefix, &uid[..8])
}
