use async_trait::async_trait;

use crate::entities::profile::Profile;
use crate::entities::sync::LeetCodeCounts;
use crate::errors::AppError;
use crate::interfaces::repositories::profile::ProfileRepository;

/// Outbound port to the coding-judge services. Implementations return
/// `UpstreamUnavailable` on transport or non-2xx failures; extraction
/// failures degrade to zeroed stats instead of erroring.
#[async_trait]
pub trait JudgeGateway: Send + Sync {
    async fn codechef_rating(&self, username: &str) -> Result<i64, AppError>;
    async fn leetcode_counts(&self, username: &str) -> Result<LeetCodeCounts, AppError>;
}

#[async_trait]
impl<T> JudgeGateway for std::sync::Arc<T>
where
    T: JudgeGateway + ?Sized,
{
    async fn codechef_rating(&self, username: &str) -> Result<i64, AppError> {
        (**self).codechef_rating(username).await
    }

    async fn leetcode_counts(&self, username: &str) -> Result<LeetCodeCounts, AppError> {
        (**self).leetcode_counts(username).await
    }
}

/// Normalizes judge responses into profile fields. Each sync is one idempotent
/// fetch-and-overwrite; repeated calls with unchanged upstream state store the
/// same result.
pub struct StatSyncHandler<R, G>
where
    R: ProfileRepository,
    G: JudgeGateway,
{
    pub repo: R,
    pub gateway: G,
}

impl<R, G> StatSyncHandler<R, G>
where
    R: ProfileRepository,
    G: JudgeGateway,
{
    pub fn new(repo: R, gateway: G) -> Self {
        StatSyncHandler { repo, gateway }
    }

    /// Fetches the CodeChef rating and stores it with upsert semantics: a
    /// missing profile is created around the synced stats.
    pub async fn sync_codechef(
        &self,
        profile_id: &str,
        username: &str,
    ) -> Result<(i64, Profile), AppError> {
        let rating = self.gateway.codechef_rating(username).await?;

        let mut profile = self
            .repo
            .fetch(profile_id)
            .await?
            .unwrap_or_else(|| Profile::new(profile_id));

        profile.code_chef.username = username.to_string();
        profile.code_chef.rating = rating;

        self.repo.upsert(&profile).await?;
        tracing::info!(profile_id, username, rating, "synced CodeChef stats");
        Ok((rating, profile))
    }

    /// Fetches LeetCode solve counts and stores them. Unlike the CodeChef
    /// path this does NOT upsert: syncing an unknown profile is a 404. The
    /// asymmetry is inherited behavior, kept deliberately and pinned by the
    /// test suite.
    pub async fn sync_leetcode(
        &self,
        profile_id: &str,
        username: &str,
    ) -> Result<(LeetCodeCounts, Profile), AppError> {
        let counts = self.gateway.leetcode_counts(username).await?;

        let mut profile = self
            .repo
            .fetch(profile_id)
            .await?
            .ok_or_else(|| AppError::ProfileNotFound(profile_id.to_string()))?;

        profile.leet_code.username = username.to_string();
        profile.leet_code.total_solved = counts.total_solved;
        profile.leet_code.easy_solved = counts.easy_solved;
        profile.leet_code.medium_solved = counts.medium_solved;
        profile.leet_code.hard_solved = counts.hard_solved;

        self.repo.upsert(&profile).await?;
        tracing::info!(profile_id, username, total = counts.total_solved, "synced LeetCode stats");
        Ok((counts, profile))
    }
}
