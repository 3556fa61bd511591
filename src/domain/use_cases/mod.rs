pub mod profile;
pub mod stat_sync;
