/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /api/auth.
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same `Invalid Credentials`
 *   response
 * - Passwords are compared with bcrypt and never logged
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::users::check_credentials;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Invalid fields, or `{errors: [{msg: "Invalid Credentials"}]}`
/// * `500 Internal Server Error` - Store or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "jane@example.com", "password": "secret1" }
/// ```
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = body?;
    tracing::info!("Login request for: {}", request.email);

    request.validate()?;
    let password = request.password.unwrap_or_default();

    let user = check_credentials(state.store.as_ref(), &request.email, &password).await?;
    let token = state.tokens.issue(user.id)?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(TokenResponse { token }))
}
