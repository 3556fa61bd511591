pub mod home;
pub mod profile;
pub mod sync;
pub mod system;
