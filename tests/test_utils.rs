use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;

use skillpath_backend::{
    entities::profile::Profile,
    entities::sync::LeetCodeCounts,
    errors::AppError,
    repositories::{memory::MemoryProfileRepo, profile::ProfileRepository},
    use_cases::{
        profile::ProfileHandler,
        stat_sync::{JudgeGateway, StatSyncHandler},
    },
    AppState, DynJudgeGateway, DynProfileRepo,
};

pub fn profile_handler() -> ProfileHandler<MemoryProfileRepo> {
    ProfileHandler::new(MemoryProfileRepo::new())
}

/// In-memory repository that counts writes, for asserting how many times an
/// operation persisted.
#[derive(Clone, Default)]
pub struct CountingRepo {
    inner: MemoryProfileRepo,
    upserts: Arc<AtomicUsize>,
}

impl CountingRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert_count(&self) -> usize {
        self.upserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileRepository for CountingRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        self.inner.check_connection().await
    }

    async fn fetch(&self, profile_id: &str) -> Result<Option<Profile>, AppError> {
        self.inner.fetch(profile_id).await
    }

    async fn upsert(&self, profile: &Profile) -> Result<(), AppError> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        self.inner.upsert(profile).await
    }
}

/// Judge gateway returning canned stats.
pub struct StubJudge {
    pub rating: i64,
    pub counts: LeetCodeCounts,
}

impl Default for StubJudge {
    fn default() -> Self {
        StubJudge {
            rating: 1764,
            counts: LeetCodeCounts {
                total_solved: 120,
                easy_solved: 60,
                medium_solved: 45,
                hard_solved: 15,
            },
        }
    }
}

#[async_trait]
impl JudgeGateway for StubJudge {
    async fn codechef_rating(&self, _username: &str) -> Result<i64, AppError> {
        Ok(self.rating)
    }

    async fn leetcode_counts(&self, _username: &str) -> Result<LeetCodeCounts, AppError> {
        Ok(self.counts)
    }
}

pub fn sync_handler() -> StatSyncHandler<MemoryProfileRepo, StubJudge> {
    StatSyncHandler::new(MemoryProfileRepo::new(), StubJudge::default())
}

/// App state over the in-memory repo and the canned judge, for driving the
/// real route tree with `actix_web::test`.
pub fn test_state() -> web::Data<AppState> {
    let repo: DynProfileRepo = Arc::new(MemoryProfileRepo::new());
    let gateway: DynJudgeGateway = Arc::new(StubJudge::default());
    web::Data::new(AppState::from_parts(repo, gateway))
}
