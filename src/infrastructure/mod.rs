pub mod db;
pub mod judges;
