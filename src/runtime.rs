//! Host wiring: settings changes, navigation events, and the message channel
//! that starts reconciliation passes.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::Settings;
use crate::notify::Notifier;
use crate::page::PageSurface;
use crate::reconcile::Reconciler;
use crate::tracker::IssueDirectory;
use crate::triggers::NavigationSubscription;

/// Message that asks the page side for one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileRequest {
    pub tracker_url: String,
}

/// Settings source of truth; publishes every change to subscribers.
pub struct SettingsStore {
    tx: watch::Sender<Settings>,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        let (tx, _) = watch::channel(initial.normalize());
        Self { tx }
    }

    pub fn set(&self, settings: Settings) {
        let settings = settings.normalize();
        tracing::info!(
            tracker_url = %settings.tracker_url,
            watched_repos = settings.watched_repos.len(),
            "settings updated"
        );
        self.tx.send_replace(settings);
    }

    pub fn current(&self) -> Settings {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.tx.subscribe()
    }
}

/// Routes navigation events into reconcile requests.
///
/// Holds the navigation subscription and keeps its filters in step with the
/// watched-repo setting.
pub struct TriggerRouter {
    subscription: Arc<NavigationSubscription>,
    settings: watch::Receiver<Settings>,
    requests: mpsc::UnboundedSender<ReconcileRequest>,
}

impl TriggerRouter {
    pub fn new(store: &SettingsStore, requests: mpsc::UnboundedSender<ReconcileRequest>) -> Self {
        let settings = store.subscribe();
        let subscription = Arc::new(NavigationSubscription::new(
            &settings.borrow().watched_repos,
        ));
        Self {
            subscription,
            settings,
            requests,
        }
    }

    /// Feed one completed navigation (page load or history update). A match
    /// sends a reconcile request carrying the current tracker URL.
    pub fn page_navigated(&self, url: &str) {
        if !self.subscription.matches(url) {
            return;
        }

        let tracker_url = self.settings.borrow().tracker_url.clone();
        tracing::debug!(url = %url, "navigation matched, requesting reconciliation");
        let _ = self.requests.send(ReconcileRequest { tracker_url });
    }

    /// Re-apply navigation filters whenever the watched-repo list changes.
    /// Other settings changes are ignored.
    pub fn spawn_settings_watcher(&self) -> JoinHandle<()> {
        let subscription = Arc::clone(&self.subscription);
        let mut settings = self.settings.clone();
        let mut last_repos = settings.borrow().watched_repos.clone();

        tokio::spawn(async move {
            while settings.changed().await.is_ok() {
                let repos = settings.borrow().watched_repos.clone();
                if repos != last_repos {
                    subscription.update(&repos);
                    last_repos = repos;
                }
            }
        })
    }
}

/// Page-side agent: runs one reconciliation pass per incoming request, to
/// completion, in arrival order.
pub struct PageAgent<P, D, N> {
    reconciler: Reconciler<P, D, N>,
}

impl<P, D, N> PageAgent<P, D, N>
where
    P: PageSurface,
    D: IssueDirectory,
    N: Notifier,
{
    pub fn new(reconciler: Reconciler<P, D, N>) -> Self {
        Self { reconciler }
    }

    pub async fn run(mut self, mut requests: mpsc::UnboundedReceiver<ReconcileRequest>) {
        while let Some(request) = requests.recv().await {
            let outcome = self.reconciler.run(&request.tracker_url).await;
            tracing::info!(
                titles = outcome.titles,
                matched = outcome.matched,
                labeled = outcome.labeled,
                "reconciliation pass finished"
            );
        }
    }
}
