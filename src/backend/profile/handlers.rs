/**
 * Profile Handlers
 *
 * CRUD for the caller's profile and its experience and education lists,
 * plus the public read paths.
 *
 * Every mutation is a read-modify-write of the whole profile document:
 * load, apply the change in memory, save.
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::{AppState, Store};
use crate::shared::profile::{EducationRequest, ExperienceRequest, ProfileRequest};
use crate::shared::{Profile, ProfileView, UserSummary};

pub const NO_PROFILE_MSG: &str = "There is no profile for this user";
pub const PROFILE_NOT_FOUND_MSG: &str = "Profile not found";

/// `{ "msg": ... }` acknowledgement body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}

/// Parse a path id; anything that is not a UUID cannot name a document
pub(crate) fn parse_id(raw: &str, not_found: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::warn!("Malformed id in path: {}", raw);
        BackendError::not_found(not_found)
    })
}

/// Join the owner's name and avatar into a profile
async fn populate(store: &Store, profile: Profile) -> Result<ProfileView, BackendError> {
    let owner = store
        .find_user(profile.user)
        .await?
        .map(|u| u.summary())
        .unwrap_or_else(|| UserSummary::missing(profile.user));
    Ok(ProfileView::new(profile, owner))
}

async fn load_own_profile(store: &Store, user: Uuid) -> Result<Profile, BackendError> {
    store.find_profile_by_user(user).await?.ok_or_else(|| {
        tracing::warn!("No profile for user {}", user);
        BackendError::not_found(NO_PROFILE_MSG)
    })
}

/// GET /api/profile/me
pub async fn get_my_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ProfileView>, BackendError> {
    let profile = load_own_profile(&state.store, auth.id()).await?;
    Ok(Json(populate(&state.store, profile).await?))
}

/// GET /api/profile
pub async fn list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileView>>, BackendError> {
    let profiles = state.store.list_profiles().await?;
    let mut views = Vec::with_capacity(profiles.len());
    for profile in profiles {
        views.push(populate(&state.store, profile).await?);
    }
    Ok(Json(views))
}

/// GET /api/profile/user/{user_id}
pub async fn get_profile_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileView>, BackendError> {
    let user_id = parse_id(&user_id, PROFILE_NOT_FOUND_MSG)?;
    let profile = state
        .store
        .find_profile_by_user(user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(PROFILE_NOT_FOUND_MSG))?;
    Ok(Json(populate(&state.store, profile).await?))
}

/// POST /api/profile
///
/// Creates the caller's profile, or merges the provided fields into the
/// existing one. Fields absent from the request keep their stored value;
/// the social links are replaced as a whole.
///
/// # Errors
///
/// * `400 Bad Request` - Missing status or skills
pub async fn upsert_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<Json<Profile>, BackendError> {
    let Json(request) = body?;
    let fields = request.into_fields()?;

    let profile = match state.store.find_profile_by_user(auth.id()).await? {
        Some(mut existing) => {
            existing.apply(fields);
            tracing::info!("Updating profile for user {}", auth.id());
            existing
        }
        None => {
            tracing::info!("Creating profile for user {}", auth.id());
            Profile::create(auth.id(), fields)
        }
    };

    state.store.save_profile(&profile).await?;
    Ok(Json(profile))
}

/// DELETE /api/profile
///
/// Removes the caller's profile and user record. Posts written by the user
/// are left in place.
pub async fn delete_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MessageResponse>, BackendError> {
    state.store.delete_profile_by_user(auth.id()).await?;
    state.store.delete_user(auth.id()).await?;

    tracing::info!("Deleted profile and user {}", auth.id());
    Ok(Json(MessageResponse { msg: "User Deleted" }))
}

/// PUT /api/profile/experience
pub async fn add_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<ExperienceRequest>, JsonRejection>,
) -> Result<Json<Profile>, BackendError> {
    let Json(request) = body?;
    let experience = request.into_experience()?;

    let mut profile = load_own_profile(&state.store, auth.id()).await?;
    profile.add_experience(experience);
    state.store.save_profile(&profile).await?;

    Ok(Json(profile))
}

/// DELETE /api/profile/experience/{exp_id}
pub async fn delete_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(exp_id): Path<String>,
) -> Result<Json<Profile>, BackendError> {
    let exp_id = parse_id(&exp_id, "Experience not found")?;

    let mut profile = load_own_profile(&state.store, auth.id()).await?;
    profile.remove_experience(exp_id)?;
    state.store.save_profile(&profile).await?;

    Ok(Json(profile))
}

/// PUT /api/profile/education
pub async fn add_education(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<EducationRequest>, JsonRejection>,
) -> Result<Json<Profile>, BackendError> {
    let Json(request) = body?;
    let education = request.into_education()?;

    let mut profile = load_own_profile(&state.store, auth.id()).await?;
    profile.add_education(education);
    state.store.save_profile(&profile).await?;

    Ok(Json(profile))
}

/// DELETE /api/profile/education/{edu_id}
pub async fn delete_education(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(edu_id): Path<String>,
) -> Result<Json<Profile>, BackendError> {
    let edu_id = parse_id(&edu_id, "Education not found")?;

    let mut profile = load_own_profile(&state.store, auth.id()).await?;
    profile.remove_education(edu_id)?;
    state.store.save_profile(&profile).await?;

    Ok(Json(profile))
}
