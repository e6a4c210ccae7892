/**
 * Authentication Handler Types
 *
 * Request and response bodies for registration, login and the current-user
 * lookup. Request fields default to empty so that a missing field surfaces
 * as a field-level validation error instead of a body rejection.
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::Validator;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Email address, also the login identifier
    pub email: String,
    /// Cleartext password (hashed before storage)
    pub password: String,
}

impl RegisterRequest {
    /// Check name, email format and password length
    pub fn validate(&self) -> Result<(), SharedError> {
        Validator::new()
            .required("name", &self.name, "Name is required")
            .email("email", self.email.trim(), "Please add a valid email")
            .min_len(
                "password",
                &self.password,
                6,
                "Please enter a password with 6 or more chars",
            )
            .finish()
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    /// Must be present; an empty string is checked against the hash
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        Validator::new()
            .email("email", self.email.trim(), "Please add a valid email")
            .present("password", self.password.as_ref(), "Password is required")
            .finish()
    }
}

/// Token response returned by registration and login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub token: String,
}
