//! Role and status enumerations.
//!
//! Both are embedded verbatim in issued token claims, so their serde
//! representation is the lowercase wire form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Authorization role assigned to an identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular member, the default for newly created identities.
    #[default]
    Member,
    /// Administrative role.
    Admin,
}

impl Role {
    /// Returns the lowercase string form used in claims and storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status of an identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Account is active and may sign in.
    #[default]
    Active,
    /// Account is disabled; callers decide how to treat it.
    Disabled,
}

impl Status {
    /// Returns the lowercase string form used in claims and storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
