//! Data models for the digest pipeline.
//!
//! This module defines the structures that flow through one run:
//! - [`Article`]: a single entry extracted from the listing page
//! - [`Digest`]: the ordered articles assembled in one run
//! - [`Outcome`] / [`Degradation`]: the result of a best-effort stage
//! - [`RunSummary`]: what one run produced, for logging and tests
//!
//! The fetch and send stages are deliberately non-fatal: a failure degrades
//! the run instead of aborting it. [`Outcome`] makes that visible as a value
//! so callers and tests can observe degradation without reading log output.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One article entry extracted from the listing page.
///
/// The title is the anchor's visible text and the link is the `href`
/// attribute exactly as it appears in the markup. Relative links (Ask HN
/// style `item?id=...` entries) are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Visible text of the article anchor.
    pub title: String,
    /// The anchor's `href`, taken verbatim.
    pub link: String,
}

/// The ordered set of articles assembled in one pipeline run.
///
/// Article order matches document order on the source page. A digest lives
/// for one run: it is rendered into a single email, optionally archived as
/// JSON, then discarded.
#[derive(Debug, Serialize, Deserialize)]
pub struct Digest {
    /// The date the digest was assembled, in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The local time the digest was assembled.
    pub local_time: String,
    /// Extracted articles in document order.
    pub articles: Vec<Article>,
}

impl Digest {
    /// Assemble a digest from extracted articles, stamped with the local
    /// clock.
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            local_date: Local::now().date_naive().to_string(),
            local_time: Local::now().time().to_string(),
            articles,
        }
    }
}

/// The pipeline stage a degradation occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Fetching the listing page.
    Fetch,
    /// Submitting the digest email.
    Send,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Fetch => write!(f, "fetch"),
            Stage::Send => write!(f, "send"),
        }
    }
}

/// A recoverable failure in a best-effort stage.
///
/// The run keeps going (an empty digest still gets rendered, a failed send
/// still ends the run cleanly), but the degradation is carried up to the
/// caller instead of being swallowed at the failure site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degradation {
    /// Which stage degraded.
    pub stage: Stage,
    /// Human-readable reason, from the underlying error.
    pub reason: String,
}

impl Degradation {
    /// A degradation in the fetch stage.
    pub fn fetch(reason: impl fmt::Display) -> Self {
        Self {
            stage: Stage::Fetch,
            reason: reason.to_string(),
        }
    }

    /// A degradation in the send stage.
    pub fn send(reason: impl fmt::Display) -> Self {
        Self {
            stage: Stage::Send,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} degraded: {}", self.stage, self.reason)
    }
}

/// Result of a best-effort pipeline stage.
///
/// Unlike `Result`, a `Degraded` outcome is not an error to propagate with
/// `?`: the pipeline continues with a fallback (empty markup, undelivered
/// mail) and the shell decides what to log.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The stage produced its value.
    Ok(T),
    /// The stage failed and the run continues degraded.
    Degraded(Degradation),
}

impl<T> Outcome<T> {
    /// True if this outcome carries a degradation.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded(_))
    }

    /// The value, if the stage succeeded.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Degraded(_) => None,
        }
    }

    /// The degradation, if the stage failed.
    pub fn degradation(&self) -> Option<&Degradation> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Degraded(d) => Some(d),
        }
    }
}

/// What one pipeline run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// Set when the listing fetch degraded and the digest fell back to empty.
    pub fetch_degraded: Option<Degradation>,
    /// Number of articles in the digest that was rendered and sent.
    pub article_count: usize,
    /// Outcome of the mail submission.
    pub delivery: Outcome<()>,
}

impl RunSummary {
    /// True if the relay accepted the digest email.
    pub fn delivered(&self) -> bool {
        !self.delivery.is_degraded()
    }
}
