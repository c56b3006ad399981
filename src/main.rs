//! # Hacker News Digest
//!
//! A small resident mailer that scrapes the newest Hacker News articles
//! once a day and emails them as an HTML digest to a configured list of
//! recipients.
//!
//! ## Pipeline
//!
//! Each run is three linear stages:
//! 1. **Fetch**: one GET against the listing page
//! 2. **Extract**: pull `(title, link)` pairs out of the markup
//! 3. **Notify**: render an HTML list and submit it over STARTTLS SMTP
//!
//! The fetch and the send are best-effort: a failure degrades the run (an
//! empty digest still goes out, an undeliverable digest still ends the run
//! cleanly) and shows up in logs and in the run summary. The only fatal
//! error is bad configuration, rejected at startup before any network I/O.
//!
//! ## Usage
//!
//! ```sh
//! EMAIL_USERNAME=digest@example.com EMAIL_PASSWORD=app-password \
//!     hacker_news_digest --recipients a@example.com,b@example.com --hour 6
//! ```
//!
//! With `--once` the pipeline runs a single pass and exits, for deployments
//! where cron owns the cadence.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod mailer;
mod models;
mod outputs;
mod scheduler;
mod scrapers;
mod utils;

use cli::Cli;
use config::MailerConfig;
use mailer::SmtpMailer;
use models::{Digest, RunSummary};
use utils::{ensure_writable_dir, truncate_for_log};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    info!("hacker_news_digest starting up");

    // .env is a local development convenience; deployments set the
    // environment directly.
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    debug!(
        source_url = %args.source_url,
        recipients = args.recipients.len(),
        once = args.once,
        "Parsed CLI arguments"
    );

    let config = match MailerConfig::from_cli(&args) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration rejected; refusing to start");
            return Err(Box::new(e) as Box<dyn Error>);
        }
    };

    // Early check: a read-only archive path should fail now, not at the
    // first scheduled run.
    if let Some(dir) = &config.archive_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(path = %dir, error = %e, "Archive directory is not writable");
            return Err(e);
        }
    }

    let mailer = SmtpMailer::from_config(&config);
    info!(
        source = %config.source_url,
        relay = %config.smtp_host,
        recipients = config.recipients.len(),
        "Digest mailer configured"
    );

    if args.once {
        let summary = run_digest(&config, &mailer).await;
        info!(
            articles = summary.article_count,
            delivered = summary.delivered(),
            "Single run complete"
        );
        return Ok(());
    }

    info!(send_time = %config.send_time, "Scheduling daily digest");
    loop {
        let now = Local::now().naive_local();
        let next = scheduler::next_run(now, config.send_time);
        let wait = scheduler::sleep_duration(now, next);
        info!(next = %next, wait_secs = wait.as_secs(), "Sleeping until next scheduled run");
        sleep(wait).await;

        let summary = run_digest(&config, &mailer).await;
        info!(
            articles = summary.article_count,
            delivered = summary.delivered(),
            fetch_degraded = summary.fetch_degraded.is_some(),
            "Scheduled run complete"
        );
    }
}

/// Execute one fetch → extract → notify pass.
///
/// Never fails: every non-configuration problem degrades into the returned
/// [`RunSummary`] instead.
#[instrument(level = "info", skip_all)]
async fn run_digest(config: &MailerConfig, mailer: &SmtpMailer) -> RunSummary {
    let fetched = scrapers::hackernews::fetch_front_page(config.source_url.as_str()).await;
    let fetch_degraded = fetched.degradation().cloned();
    if let Some(degradation) = &fetch_degraded {
        warn!(%degradation, "Continuing with an empty digest");
    }
    let markup = fetched.ok().unwrap_or_default();

    let articles = scrapers::hackernews::extract_articles(&markup);
    info!(count = articles.len(), "Extracted articles");

    let digest = Digest::new(articles);

    if let Some(dir) = &config.archive_dir {
        if let Err(e) = outputs::json::write_digest(&digest, dir).await {
            error!(error = %e, "Failed to archive digest; continuing");
        }
    }

    let body = outputs::html::render_article_list(&digest.articles);
    debug!(preview = %truncate_for_log(&body, 300), "Rendered digest body");

    let delivery = mailer.deliver(&config.subject, body).await;

    RunSummary {
        fetch_degraded,
        article_count: digest.articles.len(),
        delivery,
    }
}
