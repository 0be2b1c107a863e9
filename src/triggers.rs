use std::sync::RwLock;

const GITHUB_HOST: &str = "github.com";

/// One navigation-event filter: host equality plus a path fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFilter {
    pub host: String,
    pub path_contains: String,
}

/// Filters for a watched-repo list: `{repo}/pull` per repo, or the
/// catch-all `/pull` when no repos are configured.
pub fn filters_for_repos(repos: &[String]) -> Vec<UrlFilter> {
    if repos.is_empty() {
        return vec![UrlFilter {
            host: GITHUB_HOST.to_string(),
            path_contains: "/pull".to_string(),
        }];
    }

    repos
        .iter()
        .map(|repo| UrlFilter {
            host: GITHUB_HOST.to_string(),
            path_contains: format!("{repo}/pull"),
        })
        .collect()
}

/// Decides which page navigations start a reconciliation pass.
///
/// `update` swaps the whole filter set in one step, so there is no window
/// where navigations are matched against a partially registered set.
pub struct NavigationSubscription {
    filters: RwLock<Vec<UrlFilter>>,
}

impl NavigationSubscription {
    pub fn new(repos: &[String]) -> Self {
        Self {
            filters: RwLock::new(filters_for_repos(repos)),
        }
    }

    pub fn update(&self, repos: &[String]) {
        let filters = filters_for_repos(repos);
        tracing::debug!(filters = filters.len(), "swapping navigation filters");
        *self.filters.write().expect("filter lock poisoned") = filters;
    }

    pub fn matches(&self, url: &str) -> bool {
        let Ok(parsed) = reqwest::Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        let path = parsed.path();

        self.filters
            .read()
            .expect("filter lock poisoned")
            .iter()
            .any(|filter| host == filter.host && path.contains(&filter.path_contains))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repos(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_filter_matches_any_repo_pull_page() {
        let subscription = NavigationSubscription::new(&[]);
        assert!(subscription.matches("https://github.com/org/repo/pulls"));
        assert!(subscription.matches("https://github.com/org/repo/pull/42"));
        assert!(!subscription.matches("https://github.com/org/repo/issues"));
    }

    #[test]
    fn test_other_hosts_never_match() {
        let subscription = NavigationSubscription::new(&[]);
        assert!(!subscription.matches("https://gitlab.com/org/repo/pull/1"));
        assert!(!subscription.matches("not a url"));
    }

    #[test]
    fn test_watched_repos_narrow_the_match() {
        let subscription = NavigationSubscription::new(&repos(&["org/repo"]));
        assert!(subscription.matches("https://github.com/org/repo/pulls"));
        assert!(!subscription.matches("https://github.com/other/project/pulls"));
    }

    #[test]
    fn test_update_swaps_filters() {
        let subscription = NavigationSubscription::new(&repos(&["org/repo"]));
        assert!(!subscription.matches("https://github.com/other/project/pulls"));

        subscription.update(&repos(&["other/project"]));
        assert!(subscription.matches("https://github.com/other/project/pulls"));
        assert!(!subscription.matches("https://github.com/org/repo/pulls"));

        subscription.update(&[]);
        assert!(subscription.matches("https://github.com/org/repo/pulls"));
    }
}
