//! In-memory `HostingClient` for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use super::types::{BranchRef, Comment, CombinedStatus, PullRequest, StatusState};
use super::{ClientError, HostingClient};

/// Build a PR the way the GitHub API would describe it.
pub fn pull_request(number: u64, title: &str, mergeable: Option<bool>, sha: &str) -> PullRequest {
    PullRequest {
        number,
        title: title.to_string(),
        head: BranchRef {
            sha: sha.to_string(),
            ref_name: format!("branch-{number}"),
            repo: None,
        },
        base: None,
        mergeable,
    }
}

pub fn comment(body: &str) -> Comment {
    Comment {
        id: 0,
        body: Some(body.to_string()),
    }
}

/// Canned responses keyed by PR number (comments) and head SHA (statuses).
/// Unconfigured comments are empty; unconfigured statuses are `Unknown`.
#[derive(Default)]
pub struct MockClient {
    pulls: Vec<PullRequest>,
    comments: HashMap<u64, Vec<Comment>>,
    statuses: HashMap<String, CombinedStatus>,
    comment_delays: HashMap<u64, Duration>,
    fail_list: bool,
    fail_comments_for: Option<u64>,
    fail_status_for: Option<String>,
    comment_calls: Mutex<Vec<u64>>,
}

impl MockClient {
    pub fn new(pulls: Vec<PullRequest>) -> Self {
        Self {
            pulls,
            ..Self::default()
        }
    }

    pub fn with_comments(mut self, number: u64, bodies: &[&str]) -> Self {
        self.comments
            .insert(number, bodies.iter().map(|body| comment(body)).collect());
        self
    }

    pub fn with_status(mut self, sha: &str, state: StatusState) -> Self {
        self.statuses
            .insert(sha.to_string(), CombinedStatus::new(state, sha));
        self
    }

    /// Delay the comment fetch of one PR, to shuffle completion order.
    pub fn with_comment_delay(mut self, number: u64, delay: Duration) -> Self {
        self.comment_delays.insert(number, delay);
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_comments_for(mut self, number: u64) -> Self {
        self.fail_comments_for = Some(number);
        self
    }

    pub fn failing_status_for(mut self, sha: &str) -> Self {
        self.fail_status_for = Some(sha.to_string());
        self
    }

    /// PR numbers whose comments were requested, in call order.
    pub fn comment_calls(&self) -> Vec<u64> {
        self.comment_calls.lock().unwrap().clone()
    }

    fn injected(message: &str) -> ClientError {
        ClientError::Api {
            status: 500,
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl HostingClient for MockClient {
    async fn list_pull_requests(
        &self,
        _owner: &str,
        _repo: &str,
    ) -> Result<Vec<PullRequest>, ClientError> {
        if self.fail_list {
            return Err(Self::injected("list failed"));
        }
        Ok(self.pulls.clone())
    }

    async fn get_pull_request(
        &self,
        _owner: &str,
        _repo: &str,
        number: u64,
    ) -> Result<PullRequest, ClientError> {
        self.pulls
            .iter()
            .find(|pr| pr.number == number)
            .cloned()
            .ok_or_else(|| ClientError::Api {
                status: 404,
                message: "Not Found".to_string(),
            })
    }

    async fn list_comments(
        &self,
        _owner: &str,
        _repo: &str,
        number: u64,
    ) -> Result<Vec<Comment>, ClientError> {
        self.comment_calls.lock().unwrap().push(number);
        if let Some(delay) = self.comment_delays.get(&number) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail_comments_for == Some(number) {
            return Err(Self::injected("comments failed"));
        }
        Ok(self.comments.get(&number).cloned().unwrap_or_default())
    }

    async fn get_combined_status(
        &self,
        _owner: &str,
        _repo: &str,
        sha: &str,
    ) -> Result<CombinedStatus, ClientError> {
        if self.fail_status_for.as_deref() == Some(sha) {
            return Err(Self::injected("status failed"));
        }
        Ok(self
            .statuses
            .get(sha)
            .cloned()
            .unwrap_or_else(|| CombinedStatus::new(StatusState::Unknown, sha)))
    }
}
