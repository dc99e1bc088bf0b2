//! Client (user) entity.

use serde::Serialize;

use grocery_core::{ClientId, Email, Role};

use super::ValidationError;
use super::model::{Model, impl_entity};

/// A client that can log in and own grocery lists.
///
/// Implements `Debug` manually to redact the password hash, and never
/// serializes it.
#[derive(Clone, Serialize)]
pub struct Client {
    /// Identifier and display name.
    #[serde(flatten)]
    pub model: Model<ClientId>,
    /// Login email address.
    pub email: Email,
    /// Access role.
    pub role: Role,
    #[serde(skip_serializing)]
    password_hash: String,
}

impl_entity!(Client, ClientId);

impl Client {
    /// Create a client with [`Role::None`].
    ///
    /// `password_hash` is the encoded output of
    /// [`hash_password`](crate::services::auth::hash_password), never a
    /// plain-text password.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BlankName`, `ValidationError::InvalidEmail`,
    /// or `ValidationError::BlankPasswordHash`.
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        email: &str,
        password_hash: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let password_hash = password_hash.into();
        if password_hash.trim().is_empty() {
            return Err(ValidationError::BlankPasswordHash);
        }
        Ok(Self {
            model: Model::new(id, name)?,
            email: Email::parse(email)?,
            role: Role::default(),
            password_hash,
        })
    }

    /// Set the role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Encoded salted password hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    #[must_use]
    pub fn has_role(&self, required: Role) -> bool {
        self.role.has_role(required)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("model", &self.model)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use grocery_core::EmailError;

    use super::*;

    fn client() -> Client {
        Client::new(ClientId::new(1), "M.J. Curie", "user1@mail.com", "c2FsdA==").unwrap()
    }

    #[test]
    fn test_defaults_to_no_role() {
        let client = client();
        assert_eq!(client.role, Role::None);
        assert!(!client.is_admin());
        assert!(client.has_role(Role::None));
    }

    #[test]
    fn test_with_admin_role() {
        let client = client().with_role(Role::Admin);
        assert!(client.is_admin());
        assert!(client.role.can_access_admin_features());
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Client::new(ClientId::new(1), "X", "user1@mail.com", " ").unwrap_err(),
            ValidationError::BlankPasswordHash
        );
        assert_eq!(
            Client::new(ClientId::new(1), "X", "no-at", "hash").unwrap_err(),
            ValidationError::InvalidEmail(EmailError::InvalidAtSymbol)
        );
    }

    #[test]
    fn test_debug_redacts_hash() {
        let debug = format!("{:?}", client());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("c2FsdA=="));
    }

    #[test]
    fn test_serialize_skips_hash() {
        let json = serde_json::to_value(client()).unwrap();
        assert_eq!(json["name"], "M.J. Curie");
        assert_eq!(json["email"], "user1@mail.com");
        assert!(json.get("password_hash").is_none());
    }
}
