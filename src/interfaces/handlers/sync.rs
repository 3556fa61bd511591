use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::entities::sync::{CodeChefSyncResponse, LeetCodeSyncResponse, Platform, SyncRequest};
use crate::errors::AppError;
use crate::AppState;

/// Scrapes the CodeChef rating for `username` and stores it, creating the
/// profile if needed.
#[post("/codechef")]
pub async fn sync_codechef(
    state: web::Data<AppState>,
    body: web::Json<SyncRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    request.validate().map_err(AppError::from)?;

    let (rating, profile) = state
        .sync
        .sync_codechef(&request.profile_id, &request.username)
        .await?;

    Ok(HttpResponse::Ok().json(CodeChefSyncResponse {
        profile_id: request.profile_id,
        username: request.username,
        platform: Platform::CodeChef,
        rating,
        profile,
    }))
}

/// Fetches LeetCode solve counts for `username`. 404 if the profile has never
/// been stored.
#[post("/leetcode")]
pub async fn sync_leetcode(
    state: web::Data<AppState>,
    body: web::Json<SyncRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    request.validate().map_err(AppError::from)?;

    let (stats, profile) = state
        .sync
        .sync_leetcode(&request.profile_id, &request.username)
        .await?;

    Ok(HttpResponse::Ok().json(LeetCodeSyncResponse {
        profile_id: request.profile_id,
        username: request.username,
        platform: Platform::LeetCode,
        stats,
        profile,
    }))
}
