/**
 * User Accounts
 *
 * Registration and credential checks on top of the document store.
 * Passwords are hashed with bcrypt at the configured cost; only the hash is
 * ever stored.
 */

use crate::backend::error::BackendError;
use crate::backend::store::DocumentStore;
use crate::shared::error::FieldError;
use crate::shared::user::normalize_email;
use crate::shared::User;

/// Message for both unknown email and wrong password
pub const INVALID_CREDENTIALS: &str = "Invalid Credentials";

/// Hash a password with bcrypt
///
/// # Errors
///
/// `BackendError::Internal` if hashing fails (e.g. an out-of-range cost).
pub fn hash_password(password: &str, cost: u32) -> Result<String, BackendError> {
    bcrypt::hash(password, cost).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::internal(format!("bcrypt hash failed: {}", e))
    })
}

/// Check a password against a stored bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, BackendError> {
    bcrypt::verify(password, hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        BackendError::internal(format!("bcrypt verify failed: {}", e))
    })
}

/// Create a user account
///
/// # Arguments
///
/// * `store` - Document store
/// * `name` - Display name
/// * `email` - Email address, normalized before lookup and storage
/// * `password` - Cleartext password, hashed before storage
/// * `cost` - bcrypt cost
///
/// # Errors
///
/// * `Conflict("User already exists")` - Email already registered
/// * `Internal` - Hashing or store failure
pub async fn register_user(
    store: &dyn DocumentStore,
    name: &str,
    email: &str,
    password: &str,
    cost: u32,
) -> Result<User, BackendError> {
    let email = normalize_email(email);

    if store.find_user_by_email(&email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(BackendError::conflict("User already exists"));
    }

    let password_hash = hash_password(password, cost)?;
    let user = User::new(name.trim().to_string(), email, password_hash);

    // A concurrent registration can still win the race; the store's unique
    // email constraint turns that into the same conflict.
    store.insert_user(&user).await?;

    Ok(user)
}

/// Look up a user by email and check the password
///
/// # Errors
///
/// `Validation([{msg: "Invalid Credentials"}])` for an unknown email or a
/// wrong password alike.
pub async fn check_credentials(
    store: &dyn DocumentStore,
    email: &str,
    password: &str,
) -> Result<User, BackendError> {
    let email = normalize_email(email);
    let invalid = || BackendError::Validation(vec![FieldError::message(INVALID_CREDENTIALS)]);

    let Some(user) = store.find_user_by_email(&email).await? else {
        tracing::warn!("User not found: {}", email);
        return Err(invalid());
    };

    if !verify_password(password, &user.password)? {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(invalid());
    }

    Ok(user)
}
