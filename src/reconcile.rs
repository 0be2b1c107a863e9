use std::collections::HashMap;

use crate::error::Error;
use crate::issue::{extract_issue_id, issue_link, IssueStatus};
use crate::notify::Notifier;
use crate::page::{LabelContent, PageSurface};
use crate::tracker::IssueDirectory;

/// One on-page title and what we resolved for it during a pass.
#[derive(Debug)]
struct PullRequestEntry<T> {
    title: T,
    issue_id: Option<String>,
    issue_link: String,
    status: IssueStatus,
}

/// What a reconciliation pass did, for logging and tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Titles found on the page.
    pub titles: usize,
    /// Distinct issue ids recognized across the titles.
    pub matched: usize,
    /// Labels created or updated.
    pub labeled: usize,
}

/// Drives one scan-fetch-update cycle against a page.
///
/// Each pass is stateless given its inputs: the page is re-scanned and the
/// title-to-label association re-discovered every time. Overlapping passes
/// are not coordinated; label writes are idempotent, so last-to-complete
/// wins.
pub struct Reconciler<P, D, N> {
    page: P,
    directory: D,
    notifier: N,
}

impl<P, D, N> Reconciler<P, D, N>
where
    P: PageSurface,
    D: IssueDirectory,
    N: Notifier,
{
    pub fn new(page: P, directory: D, notifier: N) -> Self {
        Self {
            page,
            directory,
            notifier,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub async fn run(&mut self, tracker_url: &str) -> ReconcileOutcome {
        let mut outcome = ReconcileOutcome::default();

        if tracker_url.is_empty() {
            self.notifier.notify("Please set YouTrack url in options");
            return outcome;
        }

        let mut entries = self.scan(tracker_url);
        outcome.titles = entries.len();

        let ids = unique_ids(&entries);
        outcome.matched = ids.len();

        if !ids.is_empty() {
            let statuses = match self.directory.fetch_statuses(tracker_url, &ids).await {
                Ok(statuses) => statuses,
                Err(Error::HttpStatus(401)) => {
                    self.notifier.notify("Please login to YouTrack");
                    return outcome;
                }
                Err(e) => {
                    // Best-effort enhancement: transient tracker trouble is
                    // not surfaced to the user.
                    tracing::debug!(error = %e, "status fetch failed, leaving labels untouched");
                    return outcome;
                }
            };
            merge_statuses(&mut entries, &statuses);
        }

        for entry in &entries {
            self.apply_label(entry);
            outcome.labeled += 1;
        }

        tracing::debug!(
            titles = outcome.titles,
            matched = outcome.matched,
            labeled = outcome.labeled,
            "reconciliation pass finished"
        );
        outcome
    }

    fn scan(&self, tracker_url: &str) -> Vec<PullRequestEntry<P::Title>> {
        self.page
            .pull_request_titles()
            .into_iter()
            .map(|title| {
                let text = self.page.title_text(&title);
                let issue_id = extract_issue_id(&text).map(str::to_string);
                let link = issue_id
                    .as_deref()
                    .map(|id| issue_link(tracker_url, id))
                    .unwrap_or_default();

                PullRequestEntry {
                    title,
                    issue_id,
                    issue_link: link,
                    status: IssueStatus::unknown(),
                }
            })
            .collect()
    }

    fn apply_label(&mut self, entry: &PullRequestEntry<P::Title>) {
        let content = LabelContent {
            text: entry.status.value.clone(),
            href: entry.issue_link.clone(),
            background: entry.status.color.bg.clone(),
            foreground: entry.status.color.fg.clone(),
        };

        let mut label = match self.page.find_label(&entry.title) {
            Some(existing) => existing,
            None => self.page.create_label(&entry.title),
        };
        self.page.write_label(&mut label, &content);
    }
}

/// Ids in page encounter order, deduplicated (several PRs may reference the
/// same issue).
fn unique_ids<T>(entries: &[PullRequestEntry<T>]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for entry in entries {
        if let Some(id) = &entry.issue_id {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
    }
    ids
}

fn merge_statuses<T>(
    entries: &mut [PullRequestEntry<T>],
    statuses: &HashMap<String, IssueStatus>,
) {
    for entry in entries.iter_mut() {
        if let Some(id) = &entry.issue_id {
            if let Some(status) = statuses.get(id) {
                entry.status = status.clone();
            }
        }
    }
}
