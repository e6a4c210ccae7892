/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/users.
 *
 * # Registration Process
 *
 * 1. Validate name, email format and password length
 * 2. Reject an email that is already registered
 * 3. Hash the password with bcrypt
 * 4. Store the user with a Gravatar avatar
 * 5. Return a signed token
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{RegisterRequest, TokenResponse};
use crate::backend::auth::users::register_user;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - `{errors}` for invalid fields or an existing email
/// * `500 Internal Server Error` - Hashing, store or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/users HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "Jane", "email": "jane@example.com", "password": "secret1" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = body?;
    tracing::info!("Register request for email: {}", request.email);

    request.validate().map_err(|e| {
        tracing::warn!("Registration rejected: {}", e);
        e
    })?;

    let user = register_user(
        state.store.as_ref(),
        &request.name,
        &request.email,
        &request.password,
        state.config.bcrypt_cost,
    )
    .await?;
    let token = state.tokens.issue(user.id)?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok(Json(TokenResponse { token }))
}
