pub mod types;

pub use types::{Blocker, MergePolicy, Report, Verdict};

use crate::review::PullRequestInfo;
use colored::Colorize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report file: {0}")]
    FileWrite(#[from] std::io::Error),
}

/// Turn the evaluated PRs of one repository into merge verdicts.
pub fn build(repository: &str, infos: Vec<PullRequestInfo>, policy: MergePolicy) -> Report {
    let verdicts = infos
        .into_iter()
        .map(|info| Verdict::new(info, policy))
        .collect();

    Report {
        repository: repository.to_string(),
        policy,
        verdicts,
    }
}

/// Print the reports to the terminal, or write them as markdown when a path is given.
#[instrument(skip(reports), fields(repositories = reports.len()))]
pub fn output(reports: &[Report], output_path: Option<&Path>) -> Result<(), ReportError> {
    match output_path {
        None => {
            debug!("writing report to terminal");
            for report in reports {
                print_terminal_report(report);
            }
            Ok(())
        }
        Some(path) => {
            debug!(path = %path.display(), "writing report to file");
            std::fs::write(path, render_markdown(reports))?;
            Ok(())
        }
    }
}

/// Terminal layout:
///
/// ═══ org/repo (required score: 1) ═══
/// ✔ #42 "Add OAuth2 login flow"  score +2 | mergeable | CI passed
/// ✘ #43 "WIP"  score +0 | not mergeable | CI not passed
///     - conflicts or mergeability unknown
///     - CI has not passed
///     - score 0 below required 1
///
/// 1 of 2 pull requests ready to merge
fn print_terminal_report(report: &Report) {
    println!();
    println!(
        "═══ {} (required score: {}) ═══",
        report.repository.bold(),
        report.policy.required_score
    );

    if report.verdicts.is_empty() {
        println!("  No open pull requests.");
    }

    for verdict in &report.verdicts {
        let info = &verdict.info;
        let mark = if verdict.is_eligible() {
            "✔".green().bold()
        } else {
            "✘".red().bold()
        };
        println!(
            "{} #{} \"{}\"  score {:+} | {} | {}",
            mark,
            info.number,
            info.title,
            info.comment_score,
            flag(info.mergeable, "mergeable", "not mergeable"),
            flag(info.tests_passed, "CI passed", "CI not passed"),
        );
        for blocker in &verdict.blockers {
            println!("    - {}", blocker);
        }
    }

    println!();
    println!(
        "{} of {} pull requests ready to merge",
        report.eligible().count(),
        report.verdicts.len()
    );
}

fn flag(value: bool, yes: &str, no: &str) -> colored::ColoredString {
    if value {
        yes.green()
    } else {
        no.yellow()
    }
}

/// Markdown layout, one section per repository:
///
/// ## org/repo
/// | PR | Title | Score | Mergeable | CI | Ready |
fn render_markdown(reports: &[Report]) -> String {
    let mut md = String::from("# Merge readiness\n\n");

    for report in reports {
        md.push_str(&format!("## {}\n\n", report.repository));
        md.push_str(&format!(
            "**Required score:** {} | **Ready:** {} of {}\n\n",
            report.policy.required_score,
            report.eligible().count(),
            report.verdicts.len()
        ));

        if report.verdicts.is_empty() {
            md.push_str("No open pull requests.\n\n");
            continue;
        }

        md.push_str("| PR | Title | Score | Mergeable | CI | Ready |\n");
        md.push_str("|---|---|---|---|---|---|\n");
        for verdict in &report.verdicts {
            let info = &verdict.info;
            let ready = if verdict.is_eligible() {
                "yes".to_string()
            } else {
                let reasons: Vec<String> = verdict.blockers.iter().map(|b| b.to_string()).collect();
                format!("no: {}", reasons.join("; "))
            };
            md.push_str(&format!(
                "| #{} | {} | {:+} | {} | {} | {} |\n",
                info.number,
                info.title.replace('|', "\\|"),
                info.comment_score,
                yes_no(info.mergeable),
                yes_no(info.tests_passed),
                ready
            ));
        }
        md.push('\n');
    }

    md
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
