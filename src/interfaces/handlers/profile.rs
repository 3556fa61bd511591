use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::entities::field_update::{ListAppend, ListField, SkillsOp};
use crate::entities::profile::{Badge, NewProject, TestedSkill};
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FieldUpdateRequest {
    #[validate(length(min = 1, message = "profileId must not be empty"))]
    pub profile_id: String,
    pub value: Value,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BadgeMergeRequest {
    #[validate(length(min = 1, message = "profileId must not be empty"))]
    pub profile_id: String,
    pub value: Vec<Badge>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddProjectRequest {
    #[validate(length(min = 1, message = "profileId must not be empty"))]
    pub profile_id: String,
    pub project: NewProject,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProjectRequest {
    #[validate(length(min = 1, message = "profileId must not be empty"))]
    pub profile_id: String,
    pub project_id: Uuid,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddTestedSkillRequest {
    #[validate(length(min = 1, message = "profileId must not be empty"))]
    pub profile_id: String,
    pub tested_skill: TestedSkill,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SkillsPatchRequest {
    #[validate(length(min = 1, message = "profileId must not be empty"))]
    pub profile_id: String,
    #[serde(flatten)]
    pub op: SkillsOp,
}

/// Fetches a profile, creating an empty one on first access.
#[get("/{profile_id}")]
pub async fn get_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let profile = state.profiles.get_or_create(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Merges a batch of badges into an existing profile.
#[post("/badges")]
pub async fn merge_badges(
    state: web::Data<AppState>,
    body: web::Json<BadgeMergeRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    request.validate().map_err(AppError::from)?;

    let profile = state
        .profiles
        .merge_badges(&request.profile_id, request.value)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Appends a project, assigning its stable id.
#[post("/projects")]
pub async fn add_project(
    state: web::Data<AppState>,
    body: web::Json<AddProjectRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    request.validate().map_err(AppError::from)?;

    let profile = state
        .profiles
        .append_list_item(&request.profile_id, ListAppend::Project(request.project))
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Removes a project by its stable id; unmatched ids are a no-op.
#[delete("/projects")]
pub async fn delete_project(
    state: web::Data<AppState>,
    body: web::Json<DeleteProjectRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    request.validate().map_err(AppError::from)?;

    let profile = state
        .profiles
        .remove_project_by_id(&request.profile_id, request.project_id)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Appends one assessment result to the append-only `testedSkills` list.
#[post("/skills/tested")]
pub async fn add_tested_skill(
    state: web::Data<AppState>,
    body: web::Json<AddTestedSkillRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    request.validate().map_err(AppError::from)?;

    let profile = state
        .profiles
        .append_list_item(
            &request.profile_id,
            ListAppend::TestedSkill(request.tested_skill),
        )
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Incremental skills mutation: `{"profileId", "op": "replace"|"add"|"remove",
/// "value": [..]}`.
#[patch("/skills")]
pub async fn patch_skills(
    state: web::Data<AppState>,
    body: web::Json<SkillsPatchRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    request.validate().map_err(AppError::from)?;

    let profile = state
        .profiles
        .mutate_skills(&request.profile_id, request.op)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Whitelisted single-field update. Registered after the fixed-path routes so
/// `badges`/`projects` never reach the generic policy.
#[post("/{field}")]
pub async fn update_field(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<FieldUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    request.validate().map_err(AppError::from)?;

    let profile = state
        .profiles
        .apply_field_update(&request.profile_id, &path.into_inner(), request.value)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Positional removal from a list-typed field.
#[delete("/{profile_id}/{field}/{index}")]
pub async fn delete_list_item(
    state: web::Data<AppState>,
    path: web::Path<(String, String, i64)>,
) -> Result<HttpResponse, AppError> {
    let (profile_id, field, index) = path.into_inner();
    let field: ListField = field.parse()?;

    let profile = state
        .profiles
        .remove_list_item_by_index(&profile_id, field, index)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}
