use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

use super::types::{Comment, CombinedStatus, PullRequest};
use super::{ClientError, HostingClient};
use crate::config::GitHubConfig;

/// Largest page GitHub serves. Only the first page is read.
const PER_PAGE: &str = "100";

/// `HostingClient` backed by the GitHub REST v3 API.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl RestClient {
    pub fn new(config: &GitHubConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.api_url, path);
        debug!(%url, "GitHub API request");

        let mut request = self
            .http
            .get(&url)
            .header("User-Agent", "pr-reviewer")
            .header("Accept", "application/vnd.github+json")
            .query(query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl HostingClient for RestClient {
    #[instrument(skip(self))]
    async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequest>, ClientError> {
        let pulls: Vec<PullRequest> = self
            .get_json(
                &format!("/repos/{owner}/{repo}/pulls"),
                &[("state", "open"), ("per_page", PER_PAGE)],
            )
            .await?;
        debug!(count = pulls.len(), "received open pull requests");
        Ok(pulls)
    }

    #[instrument(skip(self))]
    async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequest, ClientError> {
        self.get_json(&format!("/repos/{owner}/{repo}/pulls/{number}"), &[])
            .await
    }

    #[instrument(skip(self))]
    async fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<Comment>, ClientError> {
        let comments: Vec<Comment> = self
            .get_json(
                &format!("/repos/{owner}/{repo}/issues/{number}/comments"),
                &[("per_page", PER_PAGE)],
            )
            .await?;
        debug!(count = comments.len(), "received comments");
        Ok(comments)
    }

    #[instrument(skip(self))]
    async fn get_combined_status(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> Result<CombinedStatus, ClientError> {
        let status: CombinedStatus = self
            .get_json(&format!("/repos/{owner}/{repo}/commits/{sha}/status"), &[])
            .await?;
        debug!(state = %status.state, "received combined status");
        Ok(status)
    }
}
