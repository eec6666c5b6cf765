use crate::github::PullRequest;

/// Keep a PR when no filters are given or its title contains any of them.
/// Matching is case-insensitive; blank filters are ignored.
pub fn matches(pr: &PullRequest, filters: &[String]) -> bool {
    let mut fragments = filters
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .peekable();

    if fragments.peek().is_none() {
        return true;
    }

    let title = pr.title.to_lowercase();
    fragments.any(|fragment| title.contains(&fragment.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::mock::pull_request;

    fn filters(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let pr = pull_request(1, "Anything", None, "");
        assert!(matches(&pr, &[]));
        assert!(matches(&pr, &filters(&["", "  "])));
    }

    #[test]
    fn test_title_fragment_case_insensitive() {
        let pr = pull_request(1, "Bump Serde to 1.0.200", None, "");
        assert!(matches(&pr, &filters(&["bump"])));
        assert!(matches(&pr, &filters(&["docs", "SERDE"])));
        assert!(!matches(&pr, &filters(&["docs"])));
    }
}
