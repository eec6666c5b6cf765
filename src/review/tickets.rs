use tracing::{debug, instrument};

use super::score::score;
use crate::github::{ClientError, HostingClient};

/// Sum of the votes in every comment on a PR's discussion thread.
///
/// Comments are consumed as the client returns them; fetch errors are
/// passed through untouched.
#[instrument(skip(client))]
pub async fn aggregate_score<C>(
    client: &C,
    owner: &str,
    repo: &str,
    number: u64,
) -> Result<i64, ClientError>
where
    C: HostingClient + ?Sized,
{
    let comments = client.list_comments(owner, repo, number).await?;

    let total = comments
        .iter()
        .map(|comment| {
            let vote = score(comment.body());
            if vote != 0 {
                debug!(comment_id = comment.id, vote, "counted vote");
            }
            vote
        })
        .sum();

    debug!(comments = comments.len(), score = total, "aggregated comment score");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::mock::{pull_request, MockClient};

    #[tokio::test]
    async fn test_no_comments_scores_zero() {
        let client = MockClient::new(vec![pull_request(1, "PR", Some(true), "s")]);
        assert_eq!(aggregate_score(&client, "o", "r", 1).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_sums_individual_scores() {
        let client = MockClient::new(vec![]).with_comments(
            3,
            &["LGTM +1", ":+1:", "-1 needs tests", "Oops +1 :-1:", "thanks"],
        );
        assert_eq!(aggregate_score(&client, "o", "r", 3).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_negative_total() {
        let client = MockClient::new(vec![]).with_comments(4, &["-1", ":-1:", "+1"]);
        assert_eq!(aggregate_score(&client, "o", "r", 4).await.unwrap(), -1);
    }

    #[tokio::test]
    async fn test_propagates_fetch_error() {
        let client = MockClient::new(vec![]).failing_comments_for(9);
        let err = aggregate_score(&client, "o", "r", 9).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 500, .. }));
    }
}
