use crate::review::PullRequestInfo;

/// Thresholds a PR has to meet on top of being mergeable with green CI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergePolicy {
    /// Minimum net comment score
    pub required_score: i64,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self { required_score: 1 }
    }
}

/// Why a PR cannot be merged automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocker {
    NotMergeable,
    TestsNotPassed,
    ScoreTooLow { score: i64, required: i64 },
}

impl std::fmt::Display for Blocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Blocker::NotMergeable => write!(f, "conflicts or mergeability unknown"),
            Blocker::TestsNotPassed => write!(f, "CI has not passed"),
            Blocker::ScoreTooLow { score, required } => {
                write!(f, "score {} below required {}", score, required)
            }
        }
    }
}

/// Decision for one PR.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub info: PullRequestInfo,
    /// Empty when the PR is eligible
    pub blockers: Vec<Blocker>,
}

impl Verdict {
    pub fn new(info: PullRequestInfo, policy: MergePolicy) -> Self {
        let mut blockers = Vec::new();
        if !info.mergeable {
            blockers.push(Blocker::NotMergeable);
        }
        if !info.tests_passed {
            blockers.push(Blocker::TestsNotPassed);
        }
        if info.comment_score < policy.required_score {
            blockers.push(Blocker::ScoreTooLow {
                score: info.comment_score,
                required: policy.required_score,
            });
        }
        Self { info, blockers }
    }

    pub fn is_eligible(&self) -> bool {
        self.blockers.is_empty()
    }
}

/// All verdicts for one repository.
#[derive(Debug)]
pub struct Report {
    /// `owner/repo`
    pub repository: String,
    pub policy: MergePolicy,
    /// One verdict per evaluated PR, in list order
    pub verdicts: Vec<Verdict>,
}

impl Report {
    pub fn eligible(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| v.is_eligible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(mergeable: bool, comment_score: i64, tests_passed: bool) -> PullRequestInfo {
        PullRequestInfo {
            number: 1,
            title: "Test PR".to_string(),
            mergeable,
            comment_score,
            tests_passed,
        }
    }

    #[test]
    fn test_eligible_verdict() {
        let verdict = Verdict::new(info(true, 1, true), MergePolicy::default());
        assert!(verdict.is_eligible());
    }

    #[test]
    fn test_all_blockers_listed() {
        let verdict = Verdict::new(info(false, 0, false), MergePolicy { required_score: 2 });
        assert_eq!(
            verdict.blockers,
            vec![
                Blocker::NotMergeable,
                Blocker::TestsNotPassed,
                Blocker::ScoreTooLow { score: 0, required: 2 },
            ]
        );
    }

    #[test]
    fn test_zero_required_score_accepts_silence() {
        let verdict = Verdict::new(info(true, 0, true), MergePolicy { required_score: 0 });
        assert!(verdict.is_eligible());
    }

    #[test]
    fn test_blocker_display() {
        assert_eq!(Blocker::TestsNotPassed.to_string(), "CI has not passed");
        assert_eq!(
            Blocker::ScoreTooLow { score: -1, required: 1 }.to_string(),
            "score -1 below required 1"
        );
    }
}
