/// Merge-relevant facts about one open PR, gathered in a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestInfo {
    /// PR number (e.g., 42)
    pub number: u64,
    /// PR title
    pub title: String,
    /// GitHub reported the PR as mergeable
    pub mergeable: bool,
    /// Net +1/-1 votes across the discussion thread
    pub comment_score: i64,
    /// Combined CI status of the head commit is `success`
    pub tests_passed: bool,
}
