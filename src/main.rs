use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ytlink::config::Settings;
use ytlink::notify::{NoticePanel, NoticeSurface};
use ytlink::page::{MemoryPage, PageSurface};
use ytlink::reconcile::Reconciler;
use ytlink::tracker::YouTrackClient;

#[derive(Parser)]
#[command(
    name = "ytlink",
    about = "Resolve YouTrack status labels for pull-request titles"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Tracker URL, overriding the configured one
    #[arg(long)]
    tracker_url: Option<String>,

    /// Pull-request titles to label
    titles: Vec<String>,
}

/// Notices go to stderr; the label listing owns stdout.
struct StderrSurface;

impl NoticeSurface for StderrSurface {
    fn show(&self, text: &str) {
        eprintln!("{text}");
    }

    fn hide(&self) {}
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    let tracker_url = cli.tracker_url.unwrap_or(settings.tracker_url);

    let page = MemoryPage::new(cli.titles);
    let client = YouTrackClient::new()?;
    let panel = NoticePanel::new(StderrSurface);

    let mut reconciler = Reconciler::new(page, client, panel);
    let outcome = reconciler.run(&tracker_url).await;

    tracing::info!(
        titles = outcome.titles,
        matched = outcome.matched,
        labeled = outcome.labeled,
        "reconciliation pass finished"
    );

    let page = reconciler.page();
    for title in page.pull_request_titles() {
        let text = page.title_text(&title);
        match page.label(title) {
            Some(label) if !label.href.is_empty() => {
                println!("{text}  [{} {}/{}]  {}", label.text, label.background, label.foreground, label.href);
            }
            Some(label) => {
                println!("{text}  [{} {}/{}]", label.text, label.background, label.foreground);
            }
            None => println!("{text}"),
        }
    }

    Ok(())
}
