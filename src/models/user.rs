//! User model

use serde::{Deserialize, Serialize};

use super::enums::Role;

/// Identity record. Users are created at initialization and are immutable
/// within this core. The password is stored and compared in plaintext,
/// exactly as the persisted data it manages (authentication security is an
/// explicit non-goal).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub role: Role,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
