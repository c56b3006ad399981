//! Error types for the digest mailer.
//!
//! Configuration problems are the one fatal error class: everything else in
//! the pipeline degrades and is carried as a
//! [`Degradation`](crate::models::Degradation) value instead.

use thiserror::Error;

/// A fatal configuration problem, detected at startup before any network
/// I/O.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required setting {0} (flag or environment variable)")]
    MissingSetting(&'static str),

    #[error("invalid sender address `{0}`")]
    InvalidSender(String),

    #[error("no digest recipients configured")]
    NoRecipients,

    #[error("invalid recipient address `{0}`")]
    InvalidRecipient(String),

    #[error("invalid source URL `{url}`: {source}")]
    InvalidSourceUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("schedule time {hour:02}:{minute:02} is out of range")]
    InvalidSchedule { hour: u32, minute: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_setting_names_the_variable() {
        let e = ConfigError::MissingSetting("EMAIL_USERNAME");
        assert!(e.to_string().contains("EMAIL_USERNAME"));
    }

    #[test]
    fn test_invalid_schedule_is_zero_padded() {
        let e = ConfigError::InvalidSchedule { hour: 7, minute: 5 };
        assert!(e.to_string().contains("07:05"));
    }
}
