use std::sync::Arc;

mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{db, judges};
pub use interfaces::{handlers, repositories, routes};

use judges::HttpJudgeGateway;
use repositories::{profile::ProfileRepository, sqlx_repo::SqlxProfileRepo};
use use_cases::{
    profile::ProfileHandler,
    stat_sync::{JudgeGateway, StatSyncHandler},
};

pub type DynProfileRepo = Arc<dyn ProfileRepository>;
pub type DynJudgeGateway = Arc<dyn JudgeGateway>;

pub type AppProfileHandler = ProfileHandler<DynProfileRepo>;
pub type AppSyncHandler = StatSyncHandler<DynProfileRepo, DynJudgeGateway>;

pub struct AppState {
    pub profiles: AppProfileHandler,
    pub sync: AppSyncHandler,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let repo: DynProfileRepo = Arc::new(SqlxProfileRepo::new(pool));
        let gateway: DynJudgeGateway = Arc::new(HttpJudgeGateway::new(config));
        Self::from_parts(repo, gateway)
    }

    /// Assembles the state from any repository and judge gateway; the test
    /// suite uses this with the in-memory repo and a canned gateway.
    pub fn from_parts(repo: DynProfileRepo, gateway: DynJudgeGateway) -> Self {
        AppState {
            profiles: ProfileHandler::new(repo.clone()),
            sync: StatSyncHandler::new(repo, gateway),
        }
    }
}
