//! User account types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee account.
///
/// The password hash never leaves the server: it is skipped on
/// serialization so API responses cannot leak it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub name: String,
    pub employee_id: String,
}

/// Registration payload. The password arrives in plaintext over the request
/// body and is hashed before storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub employee_id: String,
}
