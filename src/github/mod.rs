pub mod rest;
pub mod types;

#[cfg(test)]
pub mod mock;

pub use rest::RestClient;
pub use types::{Comment, CombinedStatus, PullRequest, RepoRef, StatusState};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("GitHub API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GitHub API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid repository: {0}")]
    InvalidRepo(String),
}

/// The slice of the hosting service API the review engine needs.
/// Implementations are shared by concurrently evaluated PRs, hence Send + Sync.
#[async_trait]
pub trait HostingClient: Send + Sync {
    /// Open pull requests of a repository.
    async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<PullRequest>, ClientError>;

    /// A single pull request, open or not.
    async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequest, ClientError>;

    /// Comments on the PR's discussion thread.
    async fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<Comment>, ClientError>;

    /// Combined CI status of a commit.
    async fn get_combined_status(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> Result<CombinedStatus, ClientError>;
}

/// Parse repository coordinates from `owner/repo` or a GitHub repository URL
/// (`https://github.com/owner/repo`, optionally ending in `.git` or `/`).
pub fn parse_repo(input: &str) -> Result<RepoRef, ClientError> {
    let invalid = || ClientError::InvalidRepo(input.to_string());

    let path = if input.contains("://") {
        let parsed = reqwest::Url::parse(input).map_err(|_| invalid())?;
        if parsed.host_str() != Some("github.com") {
            return Err(invalid());
        }
        parsed.path().to_string()
    } else {
        input.to_string()
    };

    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
    let [owner, repo] = segments.as_slice() else {
        return Err(invalid());
    };
    let repo = repo.strip_suffix(".git").unwrap_or(*repo);
    if !is_repo_name(owner) || !is_repo_name(repo) {
        return Err(invalid());
    }

    Ok(RepoRef {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

/// GitHub owner and repository names only use `[A-Za-z0-9._-]`. Anything
/// else would end up unescaped in an API path.
fn is_repo_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}
