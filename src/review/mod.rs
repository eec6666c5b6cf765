pub mod checks;
pub mod filter;
pub mod score;
pub mod tickets;
pub mod types;

pub use checks::{is_mergeable, passed_tests};
pub use score::score;
pub use tickets::aggregate_score;
pub use types::PullRequestInfo;

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info, instrument};

use crate::github::{ClientError, HostingClient, PullRequest};

/// Evaluate every open PR of a repository, one at a time.
///
/// Fails on the first client error; no partial list is returned.
pub async fn build_all<C>(
    client: &C,
    owner: &str,
    repo: &str,
    filters: &[String],
) -> Result<Vec<PullRequestInfo>, ClientError>
where
    C: HostingClient + ?Sized,
{
    build_all_with(client, owner, repo, filters, 1).await
}

/// Like [`build_all`], evaluating up to `concurrency` PRs at once.
///
/// Results keep the order the PRs were listed in, whatever order the
/// evaluations finish in. A `concurrency` of 0 is treated as 1.
#[instrument(skip(client, filters), fields(filters = filters.len()))]
pub async fn build_all_with<C>(
    client: &C,
    owner: &str,
    repo: &str,
    filters: &[String],
    concurrency: usize,
) -> Result<Vec<PullRequestInfo>, ClientError>
where
    C: HostingClient + ?Sized,
{
    let pulls = client.list_pull_requests(owner, repo).await?;
    let listed = pulls.len();
    let selected: Vec<PullRequest> = pulls
        .into_iter()
        .filter(|pr| filter::matches(pr, filters))
        .collect();
    info!(listed, selected = selected.len(), "evaluating open pull requests");

    stream::iter(&selected)
        .map(|pr| evaluate(client, owner, repo, pr))
        .buffered(concurrency.max(1))
        .try_collect::<Vec<_>>()
        .await
}

/// Evaluate a single PR by number, whether or not it is still open.
#[instrument(skip(client))]
pub async fn build_one<C>(
    client: &C,
    owner: &str,
    repo: &str,
    number: u64,
) -> Result<PullRequestInfo, ClientError>
where
    C: HostingClient + ?Sized,
{
    let pr = client.get_pull_request(owner, repo, number).await?;
    evaluate(client, owner, repo, &pr).await
}

async fn evaluate<C>(
    client: &C,
    owner: &str,
    repo: &str,
    pr: &PullRequest,
) -> Result<PullRequestInfo, ClientError>
where
    C: HostingClient + ?Sized,
{
    let mergeable = is_mergeable(pr);
    let (comment_score, tests_passed) = tokio::try_join!(
        aggregate_score(client, owner, repo, pr.number),
        passed_tests(client, pr, owner, repo),
    )?;

    debug!(
        pr = pr.number,
        repository = pr.repository().unwrap_or(repo),
        mergeable,
        comment_score,
        tests_passed,
        "evaluated pull request"
    );

    Ok(PullRequestInfo {
        number: pr.number,
        title: pr.title.clone(),
        mergeable,
        comment_score,
        tests_passed,
    })
}
