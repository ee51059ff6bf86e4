//! Dashboard roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Role of a dashboard user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Privileged back-office role; validates ordered quantities.
    Admin,
    /// Customer account; confirms validated quantities.
    Client,
    /// Field collaborator; confirms validated quantities and works tasks.
    #[serde(rename = "collaborateur")]
    Collaborator,
    /// Default authoring role; captures ordered quantities.
    User,
}

impl Role {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Client => "client",
            Self::Collaborator => "collaborateur",
            Self::User => "user",
        }
    }

    /// Returns whether the role bypasses ownership checks.
    #[must_use]
    pub const fn is_privileged(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Returns whether the role confirms validated quantities.
    #[must_use]
    pub const fn is_confirmer(self) -> bool {
        matches!(self, Self::Client | Self::Collaborator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "client" => Ok(Self::Client),
            "collaborateur" | "collaborator" => Ok(Self::Collaborator),
            "user" => Ok(Self::User),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Error returned while parsing a role name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
