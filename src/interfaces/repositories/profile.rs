use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    entities::profile::Profile, errors::AppError, repositories::sqlx_repo::SqlxProfileRepo,
};

/// Keyed-document access to stored profiles. One row per profile; the whole
/// document is read and written as a unit, so the single-row upsert is the
/// atomicity boundary.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn fetch(&self, profile_id: &str) -> Result<Option<Profile>, AppError>;
    async fn upsert(&self, profile: &Profile) -> Result<(), AppError>;
}

#[async_trait]
impl<T> ProfileRepository for Arc<T>
where
    T: ProfileRepository + ?Sized,
{
    async fn check_connection(&self) -> Result<(), AppError> {
        (**self).check_connection().await
    }

    async fn fetch(&self, profile_id: &str) -> Result<Option<Profile>, AppError> {
        (**self).fetch(profile_id).await
    }

    async fn upsert(&self, profile: &Profile) -> Result<(), AppError> {
        (**self).upsert(profile).await
    }
}

impl SqlxProfileRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProfileRepo { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn fetch(&self, profile_id: &str) -> Result<Option<Profile>, AppError> {
        let doc: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT doc FROM profiles WHERE profile_id = $1")
                .bind(profile_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::from)?;

        doc.map(serde_json::from_value)
            .transpose()
            .map_err(AppError::from)
    }

    async fn upsert(&self, profile: &Profile) -> Result<(), AppError> {
        let doc = serde_json::to_value(profile)?;

        sqlx::query(
            r#"
            INSERT INTO profiles (profile_id, doc, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (profile_id)
            DO UPDATE SET doc = EXCLUDED.doc, updated_at = NOW()
            "#,
        )
        .bind(&profile.profile_id)
        .bind(&doc)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(())
    }
}
