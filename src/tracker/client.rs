use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::issue::IssueStatus;
use crate::tracker::{wire, IssueDirectory};

/// REST client for the YouTrack issue tracker.
///
/// Authentication is session-based: the cookie store carries the tracker's
/// login session across requests, the same way the original runs inside an
/// already-authenticated browser session.
pub struct YouTrackClient {
    http: reqwest::Client,
}

impl YouTrackClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self { http })
    }

    /// Build the batched status query: one logical OR over all ids, with the
    /// State field expanded. The filter syntax uses literal `+` separators,
    /// so the query string is assembled by hand rather than percent-encoded.
    fn status_query_url(tracker_url: &str, issue_ids: &[String]) -> String {
        let filter = issue_ids
            .iter()
            .map(|id| format!("issue+ID:+{id}"))
            .collect::<Vec<_>>()
            .join("+or+");

        format!(
            "{tracker_url}/rest/issue?filter={filter}&max={}&with=State",
            issue_ids.len()
        )
    }
}

#[async_trait]
impl IssueDirectory for YouTrackClient {
    async fn fetch_statuses(
        &self,
        tracker_url: &str,
        issue_ids: &[String],
    ) -> Result<HashMap<String, IssueStatus>> {
        if tracker_url.is_empty() {
            return Err(Error::NoTrackerUrlConfigured);
        }
        if issue_ids.is_empty() {
            return Err(Error::NoIssuesFound);
        }

        let url = Self::status_query_url(tracker_url, issue_ids);
        tracing::debug!(url = %url, ids = issue_ids.len(), "querying tracker for issue statuses");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let code = response.status().as_u16();
        if !(200..300).contains(&code) {
            return Err(Error::HttpStatus(code));
        }

        let list: wire::IssueList = response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;

        let mut statuses = HashMap::new();
        for issue in list.issue {
            match wire::map_status(&issue) {
                Ok(status) => {
                    statuses.insert(issue.id, status);
                }
                Err(e) => {
                    tracing::warn!(issue = %issue.id, error = %e, "skipping issue without usable State");
                }
            }
        }

        tracing::debug!(resolved = statuses.len(), "tracker lookup finished");
        Ok(statuses)
    }
}
