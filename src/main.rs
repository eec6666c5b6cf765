use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error, info, info_span, Instrument};
use tracing_subscriber::EnvFilter;

use pr_reviewer::config::Config;
use pr_reviewer::github::{self, RepoRef, RestClient};
use pr_reviewer::report::{self, MergePolicy, Report};
use pr_reviewer::review;

/// PR Reviewer — CLI tool that checks the open Pull Requests of GitHub
/// repositories and reports which of them are ready to be merged.
#[derive(Parser, Debug)]
#[command(name = "pr-reviewer", version, about)]
struct Cli {
    /// Repositories to check (e.g., org/repo or https://github.com/org/repo)
    #[arg(required = true)]
    repos: Vec<String>,

    /// Config file (defaults to .pr-reviewer.toml in the current directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Optional output file path for markdown report
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only check PRs whose title contains this text (repeatable)
    #[arg(short, long = "filter")]
    filters: Vec<String>,

    /// Number of PRs evaluated at once
    #[arg(short = 'j', long)]
    concurrency: Option<usize>,

    /// Minimum net +1/-1 comment score for a PR to be ready
    #[arg(long, allow_negative_numbers = true)]
    required_score: Option<i64>,

    /// Check a single PR by number instead of every open PR
    #[arg(long)]
    pr: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("loading configuration");
    let config = Config::load(cli.config.as_deref())?;
    if config.github.token.is_none() {
        info!("no GitHub token configured, using unauthenticated requests");
    }

    let repos = cli
        .repos
        .iter()
        .map(|repo| github::parse_repo(repo))
        .collect::<Result<Vec<RepoRef>, _>>()?;

    let filters = if cli.filters.is_empty() {
        config.review.filters.clone()
    } else {
        cli.filters.clone()
    };
    let concurrency = cli.concurrency.unwrap_or(config.review.concurrency);
    let policy = MergePolicy {
        required_score: cli.required_score.unwrap_or(config.review.required_score),
    };
    debug!(?filters, concurrency, required_score = policy.required_score, "review settings");

    let client = RestClient::new(&config.github)?;

    let mut reports = Vec::with_capacity(repos.len());
    let mut failed = 0usize;
    for repo in &repos {
        let span = info_span!("review", repo = %repo);
        let evaluated = match cli.pr {
            Some(number) => review::build_one(&client, &repo.owner, &repo.repo, number)
                .instrument(span)
                .await
                .map(|info| vec![info]),
            None => review::build_all_with(&client, &repo.owner, &repo.repo, &filters, concurrency)
                .instrument(span)
                .await,
        };

        match evaluated {
            Ok(infos) => {
                let built = report::build(&repo.to_string(), infos, policy);
                info!(
                    repo = %repo,
                    prs = built.verdicts.len(),
                    ready = built.eligible().count(),
                    "repository checked"
                );
                reports.push(built);
            }
            Err(err) => {
                error!(repo = %repo, error = %err, "skipping repository");
                failed += 1;
            }
        }
    }

    report::output(&reports, cli.output.as_deref())?;
    summarize(&reports);

    if failed > 0 {
        return Err(
            format!("{} of {} repositories could not be checked", failed, repos.len()).into(),
        );
    }
    Ok(())
}

fn summarize(reports: &[Report]) {
    let ready: usize = reports.iter().map(|r| r.eligible().count()).sum();
    let total: usize = reports.iter().map(|r| r.verdicts.len()).sum();
    info!(ready, total, "done");
}
