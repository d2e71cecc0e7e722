//! User Models

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::ids::TypedId;

/// User Id
pub type UserId = TypedId<User>;

/// User Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    #[serde(rename = "nombre")]
    pub name: String,

    pub email: String,

    pub password: Password,

    #[serde(rename = "activo")]
    pub active: bool,
}

/// Credential carried on the user record.
///
/// Exchanged verbatim on the wire; never printed by `Debug` and wiped from
/// memory on drop. No hashing happens here.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(**redacted**)")
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
