pub mod client;
pub mod wire;

pub use client::YouTrackClient;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::issue::IssueStatus;

/// Seam to the issue tracker: one batched status lookup per call.
#[async_trait]
pub trait IssueDirectory: Send + Sync {
    /// Resolve the current workflow state for each of `issue_ids`.
    ///
    /// Exactly one round trip. Ids the tracker does not return are simply
    /// absent from the result map.
    async fn fetch_statuses(
        &self,
        tracker_url: &str,
        issue_ids: &[String],
    ) -> Result<HashMap<String, IssueStatus>>;
}
