/**
 * GitHub Repository Proxy
 *
 * GET /api/profile/github/{username} forwards to the GitHub REST API and
 * returns the user's five oldest-created public repositories unchanged.
 * Configured OAuth app credentials are passed along to raise the rate limit.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{StatusCode, Url};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

pub const NO_GITHUB_PROFILE_MSG: &str = "No Github profile found";

/// Build the upstream URL for `username`'s repositories
pub fn repos_url(config: &AppConfig, username: &str) -> Result<Url, BackendError> {
    let mut url = Url::parse(&config.github_api_url)
        .map_err(|e| BackendError::internal(format!("invalid github_api_url: {}", e)))?;

    url.path_segments_mut()
        .map_err(|_| BackendError::internal("github_api_url cannot be a base"))?
        .pop_if_empty()
        .extend(["users", username, "repos"]);

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("per_page", "5");
        query.append_pair("sort", "created:asc");
        if let (Some(id), Some(secret)) = (
            config.github_client_id.as_deref(),
            config.github_client_secret.as_deref(),
        ) {
            query.append_pair("client_id", id);
            query.append_pair("client_secret", secret);
        }
    }

    Ok(url)
}

/// Fetch the repository listing
///
/// # Errors
///
/// * `NotFound("No Github profile found")` - Upstream answered with anything but 200
/// * `Internal` - Transport failure or a non-JSON body
pub async fn fetch_repos(
    client: &reqwest::Client,
    config: &AppConfig,
    username: &str,
) -> Result<serde_json::Value, BackendError> {
    let url = repos_url(config, username)?;

    let response = client
        .get(url)
        .header(USER_AGENT, concat!("devconnect/", env!("CARGO_PKG_VERSION")))
        .header(ACCEPT, "application/vnd.github+json")
        .send()
        .await
        .map_err(|e| BackendError::internal(format!("GitHub request failed: {}", e)))?;

    if response.status() != StatusCode::OK {
        tracing::warn!(
            "GitHub returned {} for user {}",
            response.status(),
            username
        );
        return Err(BackendError::not_found(NO_GITHUB_PROFILE_MSG));
    }

    response
        .json()
        .await
        .map_err(|e| BackendError::internal(format!("GitHub response was not JSON: {}", e)))
}

/// GET /api/profile/github/{username}
pub async fn github_repos(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<serde_json::Value>, BackendError> {
    let repos = fetch_repos(&state.http, &state.config, &username).await?;
    Ok(Json(repos))
}
