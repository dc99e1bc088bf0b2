//! Credential commands.

use secrecy::{ExposeSecret, SecretString};
use tracing::info;

use grocery_app::Database;
use grocery_app::services::auth::{self, AuthService};

/// Log in and report the client that was found.
///
/// # Errors
///
/// Returns an error for a malformed email or wrong credentials.
pub fn login(
    db: &Database,
    email: &str,
    password: &SecretString,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = AuthService::new(db).login(email, password)?;

    info!(
        client_id = %client.id(),
        name = client.name(),
        role = %client.role,
        admin_features = client.role.can_access_admin_features(),
        "Login succeeded"
    );
    Ok(())
}

/// Hash a password and log the encoded result for use in a seed fixture.
///
/// # Errors
///
/// Returns an error if the password is blank.
pub fn hash_password(password: &SecretString) -> Result<(), Box<dyn std::error::Error>> {
    let encoded = auth::hash_password(password.expose_secret())?;
    info!(password_hash = %encoded, "Password hashed");
    Ok(())
}
