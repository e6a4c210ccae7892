/**
 * Current User Handler
 *
 * GET /api/auth returns the caller's user record without the password hash.
 */

use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::PublicUser;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing or invalid token
/// * `404 Not Found` - The token's user no longer exists
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "name": "Jane",
///   "email": "jane@example.com",
///   "avatar": "https://www.gravatar.com/avatar/...",
///   "date": "2024-01-01T00:00:00Z"
/// }
/// ```
pub async fn get_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<PublicUser>, BackendError> {
    let user = state.store.find_user(auth.id()).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", auth.id());
        BackendError::not_found("User not found")
    })?;

    Ok(Json(PublicUser::from(user)))
}
