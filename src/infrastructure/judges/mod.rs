pub mod codechef;
pub mod leetcode;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::entities::sync::LeetCodeCounts;
use crate::errors::AppError;
use crate::settings::AppConfig;
use crate::use_cases::stat_sync::JudgeGateway;

/// Live HTTP adapter for both judges: CodeChef is a page scrape, LeetCode a
/// GraphQL call. Transport and non-2xx failures become `UpstreamUnavailable`;
/// extraction failures degrade to zeroed stats.
pub struct HttpJudgeGateway {
    client: Client,
    codechef_base_url: Url,
    leetcode_graphql_url: Url,
}

impl HttpJudgeGateway {
    pub fn new(config: &AppConfig) -> Self {
        HttpJudgeGateway {
            client: Client::new(),
            codechef_base_url: config.codechef_base_url.clone(),
            leetcode_graphql_url: config.leetcode_graphql_url.clone(),
        }
    }
}

#[async_trait]
impl JudgeGateway for HttpJudgeGateway {
    async fn codechef_rating(&self, username: &str) -> Result<i64, AppError> {
        let url = self
            .codechef_base_url
            .join(&format!("users/{username}"))
            .map_err(|e| AppError::UpstreamUnavailable(format!("bad CodeChef URL: {e}")))?;

        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;

        Ok(codechef::extract_rating(&html))
    }

    async fn leetcode_counts(&self, username: &str) -> Result<LeetCodeCounts, AppError> {
        let response = self
            .client
            .post(self.leetcode_graphql_url.clone())
            .header("User-Agent", "Mozilla/5.0")
            .json(&leetcode::query_body(username))
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;
        Ok(leetcode::extract_counts(&body))
    }
}
