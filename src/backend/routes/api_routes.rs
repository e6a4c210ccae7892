/**
 * API Route Handlers
 *
 * This module wires the `/api` endpoints to their handlers.
 *
 * # Routes
 *
 * ## Users and auth
 * - `POST /api/users` - Register
 * - `POST /api/auth` - Login
 * - `GET /api/auth` - Current user (private)
 *
 * ## Profiles
 * - `GET|POST|DELETE /api/profile`
 * - `GET /api/profile/me`, `GET /api/profile/user/{user_id}`
 * - `PUT /api/profile/experience`, `DELETE /api/profile/experience/{exp_id}`
 * - `PUT /api/profile/education`, `DELETE /api/profile/education/{edu_id}`
 * - `GET /api/profile/github/{username}`
 *
 * ## Posts (all private)
 * - `GET|POST /api/posts`, `GET|DELETE /api/posts/{id}`
 * - `PUT /api/posts/like/{id}`, `PUT /api/posts/unlike/{id}`
 * - `POST /api/posts/comment/{id}`, `DELETE /api/posts/comment/{id}/{comment_id}`
 */

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::posts;
use crate::backend::profile;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State for the posts auth layer
///
/// # Authentication
///
/// Private profile and auth routes authenticate through the `AuthUser`
/// extractor. The posts router is private as a whole and is wrapped in
/// `auth_middleware`.
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    router
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(post_routes(app_state))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(register))
        .route("/api/auth", post(login).get(get_me))
}

fn profile_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/profile",
            get(profile::list_profiles)
                .post(profile::upsert_profile)
                .delete(profile::delete_profile),
        )
        .route("/api/profile/me", get(profile::get_my_profile))
        .route("/api/profile/user/{user_id}", get(profile::get_profile_by_user))
        .route("/api/profile/experience", put(profile::add_experience))
        .route(
            "/api/profile/experience/{exp_id}",
            delete(profile::delete_experience),
        )
        .route("/api/profile/education", put(profile::add_education))
        .route(
            "/api/profile/education/{edu_id}",
            delete(profile::delete_education),
        )
        .route("/api/profile/github/{username}", get(profile::github_repos))
}

fn post_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/posts", post(posts::create_post).get(posts::list_posts))
        .route(
            "/api/posts/{id}",
            get(posts::get_post).delete(posts::delete_post),
        )
        .route("/api/posts/like/{id}", put(posts::like_post))
        .route("/api/posts/unlike/{id}", put(posts::unlike_post))
        .route("/api/posts/comment/{id}", post(posts::add_comment))
        .route(
            "/api/posts/comment/{id}/{comment_id}",
            delete(posts::delete_comment),
        )
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware))
}
