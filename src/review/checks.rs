use tracing::{debug, instrument};

use crate::github::{ClientError, HostingClient, PullRequest, StatusState};

/// GitHub's mergeability flag; "not computed yet" counts as not mergeable.
pub fn is_mergeable(pr: &PullRequest) -> bool {
    pr.mergeable.unwrap_or(false)
}

/// Whether the combined CI status of the PR's head commit is `success`.
///
/// Only the latest snapshot is read, so a CI run started after the fetch
/// is not seen.
#[instrument(skip(client, pr), fields(pr = pr.number, sha = %pr.head.sha))]
pub async fn passed_tests<C>(
    client: &C,
    pr: &PullRequest,
    owner: &str,
    repo: &str,
) -> Result<bool, ClientError>
where
    C: HostingClient + ?Sized,
{
    let status = client.get_combined_status(owner, repo, &pr.head.sha).await?;
    debug!(state = %status.state, "combined status");
    Ok(status.state == StatusState::Success)
}
