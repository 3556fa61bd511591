use derive_more::Display;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::profile::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[display("codechef")]
    CodeChef,
    #[display("leetcode")]
    LeetCode,
}

/// Solve counts per difficulty bucket as reported by the LeetCode GraphQL
/// endpoint; any bucket missing upstream is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeCounts {
    pub total_solved: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    #[validate(length(min = 1, message = "profileId must not be empty"))]
    pub profile_id: String,
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeChefSyncResponse {
    pub profile_id: String,
    pub username: String,
    pub platform: Platform,
    pub rating: i64,
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeSyncResponse {
    pub profile_id: String,
    pub username: String,
    pub platform: Platform,
    pub stats: LeetCodeCounts,
    pub profile: Profile,
}
