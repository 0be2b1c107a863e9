use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

/// User-facing notification sink consumed by the reconciler.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Where the panel renders: the host's notice element, a terminal, a test
/// recorder.
pub trait NoticeSurface: Send + Sync + 'static {
    fn show(&self, text: &str);
    fn hide(&self);
}

const MESSAGE_PREFIX: &str = "Github YouTrack issue link: ";
const DEFAULT_HIDE_AFTER: Duration = Duration::from_secs(5);

/// Notification panel that owns its auto-hide timer.
///
/// Each `notify` call aborts the previous hide task before scheduling a new
/// one, so a burst of notifications keeps the latest message visible for the
/// full duration. The timer lives inside the panel; there is no shared
/// global state between callers.
pub struct NoticePanel<S> {
    surface: Arc<S>,
    hide_after: Duration,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl<S: NoticeSurface> NoticePanel<S> {
    pub fn new(surface: S) -> Self {
        Self::with_hide_after(surface, DEFAULT_HIDE_AFTER)
    }

    pub fn with_hide_after(surface: S, hide_after: Duration) -> Self {
        Self {
            surface: Arc::new(surface),
            hide_after,
            timer: Mutex::new(None),
        }
    }
}

impl<S: NoticeSurface> Notifier for NoticePanel<S> {
    fn notify(&self, message: &str) {
        self.surface.show(&format!("{MESSAGE_PREFIX}{message}"));

        let mut timer = self.timer.lock().expect("notice timer lock poisoned");
        if let Some(previous) = timer.take() {
            previous.abort();
        }

        let surface = Arc::clone(&self.surface);
        let hide_after = self.hide_after;
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(hide_after).await;
            surface.hide();
        }));
    }
}
