//! Command-line interface definitions for the digest mailer.
//!
//! All options can be provided as flags or environment variables; the mail
//! credential pair (`EMAIL_USERNAME` / `EMAIL_PASSWORD`) is normally passed
//! through the environment. Raw values collected here are validated into a
//! [`MailerConfig`](crate::config::MailerConfig) at startup.

use crate::scrapers::hackernews::NEWEST_URL;
use clap::Parser;

/// Command-line arguments for the digest mailer.
///
/// # Examples
///
/// ```sh
/// # One digest now, then exit (cron owns the cadence)
/// hacker_news_digest --recipients a@example.com,b@example.com --once
///
/// # Stay resident and send every day at 06:30 local time
/// hacker_news_digest --recipients a@example.com --hour 6 --minute 30
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Listing page to scrape for article entries
    #[arg(long, env = "DIGEST_SOURCE_URL", default_value = NEWEST_URL)]
    pub source_url: String,

    /// Digest recipients, comma separated
    #[arg(
        short,
        long,
        env = "DIGEST_RECIPIENTS",
        value_delimiter = ',',
        required = true
    )]
    pub recipients: Vec<String>,

    /// Mail account the digest is submitted from
    #[arg(long, env = "EMAIL_USERNAME")]
    pub email_username: Option<String>,

    /// Password or app credential for the mail account
    #[arg(long, env = "EMAIL_PASSWORD", hide_env_values = true)]
    pub email_password: Option<String>,

    /// Display name used on the From header
    #[arg(long, default_value = "HackerMan")]
    pub sender_name: String,

    /// Mail relay host
    #[arg(long, env = "SMTP_HOST", default_value = "smtp.gmail.com")]
    pub smtp_host: String,

    /// Mail relay submission port (STARTTLS)
    #[arg(long, env = "SMTP_PORT", default_value_t = 587)]
    pub smtp_port: u16,

    /// Subject line of the digest email
    #[arg(long, default_value = "Latest Hacker News Articles")]
    pub subject: String,

    /// Hour of day (local clock) to send the digest
    #[arg(long, default_value_t = 0)]
    pub hour: u32,

    /// Minute of the hour to send the digest
    #[arg(long, default_value_t = 0)]
    pub minute: u32,

    /// Directory to archive each sent digest as JSON
    #[arg(long, env = "DIGEST_ARCHIVE_DIR")]
    pub archive_dir: Option<String>,

    /// Run the pipeline once and exit instead of scheduling daily
    #[arg(long)]
    pub once: bool,
}
