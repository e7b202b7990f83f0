//! API credential resolution.
//!
//! The only supported authentication is a pre-issued static token read from
//! the `TODOIST_TOKEN` environment variable. Resolution happens while the
//! command is constructed, before any network activity.

use std::env;

use thiserror::Error;

/// Environment variable holding the API token.
pub const TOKEN_VAR: &str = "TODOIST_TOKEN";

/// No usable token in the environment.
///
/// The display text is the full guidance message shown to the user.
#[derive(Debug, Error)]
#[error(
    "no API token found\nPlease add a valid token to your environment as `TODOIST_TOKEN`, eg. by running `export TODOIST_TOKEN=\"MY_API_TOKEN\"`.\nYou can find your token at: https://todoist.com/Users/viewPrefs?page=authorizations."
)]
pub struct MissingCredential;

/// The API token identifying the user to the remote service.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// Read the token from the environment.
    ///
    /// An empty value counts as missing.
    pub fn resolve() -> Result<Self, MissingCredential> {
        Self::from_env(env::var(TOKEN_VAR).ok())
    }

    fn from_env(value: Option<String>) -> Result<Self, MissingCredential> {
        match value {
            Some(token) if !token.is_empty() => Ok(Self(token)),
            _ => Err(MissingCredential),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
