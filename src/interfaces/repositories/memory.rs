use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::{
    entities::profile::Profile, errors::AppError, repositories::profile::ProfileRepository,
};

/// Document store backed by an in-process map. Used by the test suite and for
/// running locally without Postgres.
#[derive(Clone, Default)]
pub struct MemoryProfileRepo {
    docs: Arc<DashMap<String, Profile>>,
}

impl MemoryProfileRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn fetch(&self, profile_id: &str) -> Result<Option<Profile>, AppError> {
        Ok(self.docs.get(profile_id).map(|entry| entry.clone()))
    }

    async fn upsert(&self, profile: &Profile) -> Result<(), AppError> {
        self.docs
            .insert(profile.profile_id.clone(), profile.clone());
        Ok(())
    }
}
