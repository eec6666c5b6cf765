use serde::{Deserialize, Deserializer};

/// An open pull request as reported by the GitHub API.
/// Read-only: this tool never changes a PR.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    /// PR number (e.g., 42)
    pub number: u64,
    /// PR title
    pub title: String,
    /// Head branch; `head.sha` is the commit CI reports against
    pub head: BranchRef,
    /// Base branch, carrying the owning repository
    #[serde(default)]
    pub base: Option<BranchRef>,
    /// GitHub's own mergeability flag. `None` while GitHub is still
    /// computing it, which happens right after a PR is opened or pushed to.
    #[serde(default)]
    pub mergeable: Option<bool>,
}

impl PullRequest {
    /// `owner/repo` of the repository the PR targets, when the payload has it.
    pub fn repository(&self) -> Option<&str> {
        self.base
            .as_ref()
            .and_then(|base| base.repo.as_ref())
            .map(|repo| repo.full_name.as_str())
    }
}

/// One side (head or base) of a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchRef {
    /// Commit SHA the branch points at
    pub sha: String,
    /// Branch name
    #[serde(rename = "ref", default)]
    pub ref_name: String,
    #[serde(default)]
    pub repo: Option<RepoSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub full_name: String,
}

/// A comment on the PR's issue thread.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: u64,
    /// Comment text. GitHub may send `null` for an emptied comment.
    #[serde(default)]
    pub body: Option<String>,
}

impl Comment {
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Rolled-up CI state for a single commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusState {
    Success,
    Pending,
    Failure,
    Error,
    #[default]
    Unknown,
}

impl StatusState {
    /// Map a GitHub state label. Matching is exact; anything unrecognised is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "success" => StatusState::Success,
            "pending" => StatusState::Pending,
            "failure" => StatusState::Failure,
            "error" => StatusState::Error,
            _ => StatusState::Unknown,
        }
    }
}

impl std::fmt::Display for StatusState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusState::Success => write!(f, "success"),
            StatusState::Pending => write!(f, "pending"),
            StatusState::Failure => write!(f, "failure"),
            StatusState::Error => write!(f, "error"),
            StatusState::Unknown => write!(f, "unknown"),
        }
    }
}

/// Combined status of all CI checks reported against one commit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CombinedStatus {
    #[serde(default, deserialize_with = "state_label")]
    pub state: StatusState,
    #[serde(default)]
    pub sha: String,
}

impl CombinedStatus {
    pub fn new(state: StatusState, sha: impl Into<String>) -> Self {
        Self {
            state,
            sha: sha.into(),
        }
    }
}

fn state_label<'de, D>(deserializer: D) -> Result<StatusState, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label
        .as_deref()
        .map(StatusState::from_label)
        .unwrap_or_default())
}

/// Coordinates of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
