//! Session model
//!
//! Sign-in contract: `POST /auth/signin {username, password}` answers with
//! the full user payload including the bearer token.

use serde::{Deserialize, Deserializer, Serialize};

use crate::nav::Role;

/// Signed-in user as returned by `/auth/signin`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub id: u64,
    pub username: String,
    #[serde(default, deserialize_with = "role_from_str")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

fn role_from_str<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Role, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(Role::parse).unwrap_or_default())
}

/// Body of `/auth/signin` and `/auth/signup`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Client-side check before any request is sent
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.is_empty() {
            return Err("Please enter a username");
        }
        if self.password.is_empty() {
            return Err("Please enter a password");
        }
        Ok(())
    }

    /// Registration adds a confirmation field
    pub fn validate_registration(&self, confirm_password: &str) -> Result<(), &'static str> {
        self.validate()?;
        if confirm_password.is_empty() {
            return Err("Please confirm your password");
        }
        if self.password != confirm_password {
            return Err("Passwords do not match");
        }
        Ok(())
    }
}
