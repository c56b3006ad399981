//! Runtime configuration, validated once at startup.
//!
//! The original sin this module exists to avoid: discovering a missing mail
//! credential at send time, after the page has already been scraped. All
//! required settings are checked here, before any network I/O, and the
//! process refuses to start on the first [`ConfigError`].

use crate::cli::Cli;
use crate::error::ConfigError;
use chrono::NaiveTime;
use lettre::Address;
use lettre::message::Mailbox;
use url::Url;

/// Validated configuration for the digest mailer.
///
/// Sender and recipient addresses are held as parsed [`Mailbox`] values, so
/// message composition downstream cannot fail on address syntax.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Listing page scraped each run.
    pub source_url: Url,
    /// Sender identity, display name included.
    pub sender: Mailbox,
    /// Credential used to authenticate against the relay.
    pub password: String,
    /// Mail relay host.
    pub smtp_host: String,
    /// Mail relay submission port.
    pub smtp_port: u16,
    /// Everyone who receives the digest. Never empty.
    pub recipients: Vec<Mailbox>,
    /// Subject line of the digest email.
    pub subject: String,
    /// Local wall-clock time of the daily send.
    pub send_time: NaiveTime,
    /// Where to archive sent digests as JSON, if anywhere.
    pub archive_dir: Option<String>,
}

impl MailerConfig {
    /// Validate raw CLI/environment values into a usable configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: a missing credential, an
    /// unparseable address or URL, an empty recipient list, or an
    /// out-of-range schedule time.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let username = cli
            .email_username
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingSetting("EMAIL_USERNAME"))?;
        let password = cli
            .email_password
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingSetting("EMAIL_PASSWORD"))?;

        let address: Address = username
            .parse()
            .map_err(|_| ConfigError::InvalidSender(username.to_string()))?;
        let sender = Mailbox::new(Some(cli.sender_name.clone()), address);

        let source_url =
            Url::parse(&cli.source_url).map_err(|source| ConfigError::InvalidSourceUrl {
                url: cli.source_url.clone(),
                source,
            })?;

        if cli.recipients.is_empty() {
            return Err(ConfigError::NoRecipients);
        }
        let recipients = cli
            .recipients
            .iter()
            .map(|raw| {
                raw.trim()
                    .parse::<Mailbox>()
                    .map_err(|_| ConfigError::InvalidRecipient(raw.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let send_time = NaiveTime::from_hms_opt(cli.hour, cli.minute, 0).ok_or(
            ConfigError::InvalidSchedule {
                hour: cli.hour,
                minute: cli.minute,
            },
        )?;

        Ok(Self {
            source_url,
            sender,
            password: password.to_string(),
            smtp_host: cli.smtp_host.clone(),
            smtp_port: cli.smtp_port,
            recipients,
            subject: cli.subject.clone(),
            send_time,
            archive_dir: cli.archive_dir.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Built directly rather than via Cli::parse_from so ambient
    // EMAIL_USERNAME/EMAIL_PASSWORD variables cannot leak into the tests.
    fn base_cli() -> Cli {
        Cli {
            source_url: "https://news.ycombinator.com/newest".to_string(),
            recipients: vec!["a@example.com".to_string(), "b@example.com".to_string()],
            email_username: Some("digest@example.com".to_string()),
            email_password: Some("app-password".to_string()),
            sender_name: "HackerMan".to_string(),
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            subject: "Latest Hacker News Articles".to_string(),
            hour: 0,
            minute: 0,
            archive_dir: None,
            once: false,
        }
    }

    #[test]
    fn test_valid_config() {
        let config = MailerConfig::from_cli(&base_cli()).unwrap();

        assert_eq!(config.sender.email.to_string(), "digest@example.com");
        assert_eq!(config.sender.name.as_deref(), Some("HackerMan"));
        assert_eq!(config.recipients.len(), 2);
        assert_eq!(config.source_url.as_str(), "https://news.ycombinator.com/newest");
        assert_eq!(config.send_time, NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_missing_username_is_fatal() {
        let mut cli = base_cli();
        cli.email_username = None;

        let err = MailerConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSetting("EMAIL_USERNAME")));
    }

    #[test]
    fn test_empty_password_is_fatal() {
        let mut cli = base_cli();
        cli.email_password = Some(String::new());

        let err = MailerConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSetting("EMAIL_PASSWORD")));
    }

    #[test]
    fn test_unparseable_sender_is_fatal() {
        let mut cli = base_cli();
        cli.email_username = Some("not an address".to_string());

        let err = MailerConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSender(_)));
    }

    #[test]
    fn test_empty_recipient_list_is_fatal() {
        let mut cli = base_cli();
        cli.recipients.clear();

        let err = MailerConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::NoRecipients));
    }

    #[test]
    fn test_malformed_recipient_is_fatal() {
        let mut cli = base_cli();
        cli.recipients.push("not-an-address".to_string());

        let err = MailerConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRecipient(addr) if addr == "not-an-address"));
    }

    #[test]
    fn test_recipient_whitespace_is_trimmed() {
        let mut cli = base_cli();
        cli.recipients = vec!["a@example.com".to_string(), " b@example.com".to_string()];

        let config = MailerConfig::from_cli(&cli).unwrap();
        assert_eq!(config.recipients[1].email.to_string(), "b@example.com");
    }

    #[test]
    fn test_malformed_source_url_is_fatal() {
        let mut cli = base_cli();
        cli.source_url = "not a url".to_string();

        let err = MailerConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSourceUrl { .. }));
    }

    #[test]
    fn test_out_of_range_schedule_is_fatal() {
        let mut cli = base_cli();
        cli.hour = 24;

        let err = MailerConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSchedule { hour: 24, minute: 0 }
        ));
    }
}
