use serde::Deserialize;
use serde_json::json;

use crate::entities::sync::LeetCodeCounts;

pub const SOLVED_QUERY: &str = r#"
query userProblemsSolved($username: String!) {
    matchedUser(username: $username) {
        submitStatsGlobal {
            acSubmissionNum {
                difficulty
                count
            }
        }
    }
}
"#;

pub fn query_body(username: &str) -> serde_json::Value {
    json!({
        "query": SOLVED_QUERY,
        "variables": { "username": username }
    })
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    submit_stats_global: Option<SubmitStats>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStats {
    #[serde(default)]
    ac_submission_num: Vec<Bucket>,
}

#[derive(Debug, Deserialize)]
struct Bucket {
    difficulty: String,
    count: u32,
}

/// Pulls the per-difficulty accepted-submission counts out of the GraphQL
/// response. A missing bucket, a null `matchedUser` (unknown username) or an
/// unexpected shape all yield zeroes.
pub fn extract_counts(body: &serde_json::Value) -> LeetCodeCounts {
    let parsed: GraphqlResponse = match serde_json::from_value(body.clone()) {
        Ok(parsed) => parsed,
        Err(_) => return LeetCodeCounts::default(),
    };

    let buckets = parsed
        .data
        .and_then(|d| d.matched_user)
        .and_then(|u| u.submit_stats_global)
        .map(|s| s.ac_submission_num)
        .unwrap_or_default();

    let count_for = |difficulty: &str| {
        buckets
            .iter()
            .find(|b| b.difficulty == difficulty)
            .map(|b| b.count)
            .unwrap_or(0)
    };

    LeetCodeCounts {
        total_solved: count_for("All"),
        easy_solved: count_for("Easy"),
        medium_solved: count_for("Medium"),
        hard_solved: count_for("Hard"),
    }
}
