pub mod memory;
pub mod profile;
pub mod sqlx_repo;
