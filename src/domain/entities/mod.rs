pub mod field_update;
pub mod profile;
pub mod sync;
