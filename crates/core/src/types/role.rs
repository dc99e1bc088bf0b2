//! Client roles and role predicates.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown role name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid role: {0} (expected `none` or `admin`)")]
pub struct RoleError(pub String);

/// Role of a client, gating access to the analytics screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular client.
    #[default]
    None,
    /// Can see sales analytics and purchase history.
    Admin,
}

impl Role {
    /// Whether this role is [`Role::Admin`].
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this role is exactly `required`.
    #[must_use]
    pub fn has_role(self, required: Self) -> bool {
        self == required
    }

    /// Whether this role may open admin-only features (best sellers,
    /// bought products).
    #[must_use]
    pub const fn can_access_admin_features(self) -> bool {
        self.is_admin()
    }
}

/// Free-standing form of [`Role::is_admin`].
#[must_use]
pub const fn is_admin(role: Role) -> bool {
    role.is_admin()
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "admin" => Ok(Self::Admin),
            _ => Err(RoleError(s.to_owned())),
        }
    }
}
