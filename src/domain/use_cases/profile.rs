use serde_json::Value;
use uuid::Uuid;

use crate::entities::field_update::{FieldUpdate, ListAppend, ListField, SkillsOp};
use crate::entities::profile::{Badge, Profile};
use crate::errors::AppError;
use crate::interfaces::repositories::profile::ProfileRepository;

/// The profile update/merge use case. Every mutating operation is a single
/// fetch, an in-memory mutation, and a single upsert; a failure before the
/// write leaves the stored document untouched.
pub struct ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub repo: R,
}

impl<R> ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: R) -> Self {
        ProfileHandler { repo }
    }

    /// Fetches the profile, creating and persisting an empty one on first
    /// access. Absence is not an error for this operation.
    pub async fn get_or_create(&self, profile_id: &str) -> Result<Profile, AppError> {
        if let Some(profile) = self.repo.fetch(profile_id).await? {
            return Ok(profile);
        }

        let profile = Profile::new(profile_id);
        self.repo.upsert(&profile).await?;
        tracing::info!(profile_id, "created empty profile on first access");
        Ok(profile)
    }

    /// Applies a whitelisted field update with upsert semantics. The policy
    /// lookup and value deserialization happen before the store is touched,
    /// so an invalid request performs no write.
    pub async fn apply_field_update(
        &self,
        profile_id: &str,
        field: &str,
        value: Value,
    ) -> Result<Profile, AppError> {
        let update = FieldUpdate::parse(field, value)?;

        let mut profile = self
            .repo
            .fetch(profile_id)
            .await?
            .unwrap_or_else(|| Profile::new(profile_id));

        update.apply(&mut profile);
        self.repo.upsert(&profile).await?;
        Ok(profile)
    }

    /// Appends one item to an append-capable list field, upserting the
    /// profile if absent. Projects get their stable id assigned here.
    pub async fn append_list_item(
        &self,
        profile_id: &str,
        item: ListAppend,
    ) -> Result<Profile, AppError> {
        let mut profile = self
            .repo
            .fetch(profile_id)
            .await?
            .unwrap_or_else(|| Profile::new(profile_id));

        match item {
            ListAppend::Project(project) => profile.projects.push(project.into_entry()),
            ListAppend::TestedSkill(tested) => profile.tested_skills.push(tested),
        }

        self.repo.upsert(&profile).await?;
        Ok(profile)
    }

    /// Removes the element at `index` from the named list. Bounds are checked
    /// against the stored list before anything is written.
    pub async fn remove_list_item_by_index(
        &self,
        profile_id: &str,
        field: ListField,
        index: i64,
    ) -> Result<Profile, AppError> {
        let mut profile = self
            .repo
            .fetch(profile_id)
            .await?
            .ok_or_else(|| AppError::ProfileNotFound(profile_id.to_string()))?;

        let len = field.len(&profile);
        if index < 0 || index as usize >= len {
            return Err(AppError::IndexOutOfRange { index, len });
        }

        field.remove_at(&mut profile, index as usize);
        self.repo.upsert(&profile).await?;
        tracing::debug!(profile_id, %field, index, "removed list item");
        Ok(profile)
    }

    /// Removes the project whose stable id matches. A missing match is a
    /// successful no-op; a missing profile is not.
    pub async fn remove_project_by_id(
        &self,
        profile_id: &str,
        project_id: Uuid,
    ) -> Result<Profile, AppError> {
        let mut profile = self
            .repo
            .fetch(profile_id)
            .await?
            .ok_or_else(|| AppError::ProfileNotFound(profile_id.to_string()))?;

        let before = profile.projects.len();
        profile.projects.retain(|p| p.id != project_id);

        if profile.projects.len() == before {
            return Ok(profile);
        }

        self.repo.upsert(&profile).await?;
        Ok(profile)
    }

    /// Merges a badge batch into an existing profile, persisting once for the
    /// whole batch. Re-applying the same batch changes nothing.
    pub async fn merge_badges(
        &self,
        profile_id: &str,
        badges: Vec<Badge>,
    ) -> Result<Profile, AppError> {
        let mut profile = self
            .repo
            .fetch(profile_id)
            .await?
            .ok_or_else(|| AppError::ProfileNotFound(profile_id.to_string()))?;

        profile.merge_badges(badges);
        self.repo.upsert(&profile).await?;
        Ok(profile)
    }

    /// Canonical skills mutation (replace / add / remove), upserting if the
    /// profile does not exist yet.
    pub async fn mutate_skills(
        &self,
        profile_id: &str,
        op: SkillsOp,
    ) -> Result<Profile, AppError> {
        let mut profile = self
            .repo
            .fetch(profile_id)
            .await?
            .unwrap_or_else(|| Profile::new(profile_id));

        op.apply(&mut profile.skills);
        self.repo.upsert(&profile).await?;
        Ok(profile)
    }
}
