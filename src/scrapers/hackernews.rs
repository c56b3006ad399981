//! Hacker News listing scraper.
//!
//! Fetches the [newest page](https://news.ycombinator.com/newest) and
//! extracts one entry per story. Each story row carries a
//! `<span class="titleline">` container whose first anchor holds the title
//! and link, which is the only structural assumption made here.
//!
//! # Markup pattern
//!
//! ```text
//! <span class="titleline">
//!     <a href="https://a.example/x">Title A</a>
//!     <span class="sitebit">...</span>
//! </span>
//! ```
//!
//! Links are taken verbatim from the `href` attribute. Self posts link
//! relatively (`item?id=...`) and stay that way: the digest reproduces
//! exactly what the page said.

use crate::models::{Article, Degradation, Outcome};
use scraper::{Html, Selector};
use tracing::{debug, info, instrument, warn};

/// Default listing page scraped each run.
pub const NEWEST_URL: &str = "https://news.ycombinator.com/newest";

/// Fetch the raw markup of the listing page.
///
/// A 2xx response yields the body. Any transport error or non-2xx status is
/// logged and returned as a [`Degradation`] so the run can continue with an
/// empty digest. No retry, no timeout beyond the transport defaults.
#[instrument(level = "info")]
pub async fn fetch_front_page(url: &str) -> Outcome<String> {
    let response = match reqwest::get(url).await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, %url, "Listing page fetch failed");
            return Outcome::Degraded(Degradation::fetch(e));
        }
    };

    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, %url, "Listing page returned an error status");
            return Outcome::Degraded(Degradation::fetch(e));
        }
    };

    match response.text().await {
        Ok(body) => {
            info!(bytes = body.len(), %url, "Fetched listing page");
            Outcome::Ok(body)
        }
        Err(e) => {
            warn!(error = %e, %url, "Failed reading listing page body");
            Outcome::Degraded(Degradation::fetch(e))
        }
    }
}

/// Extract article entries from listing page markup.
///
/// Selects every `span.titleline` container and takes the first anchor
/// inside each: title from the anchor's visible text, link from its `href`
/// verbatim. Matches are returned in document order.
///
/// Empty markup (a degraded fetch) and markup with no matches (the page
/// structure changed, or there are genuinely no stories) both produce an
/// empty vector rather than an error.
pub fn extract_articles(markup: &str) -> Vec<Article> {
    if markup.is_empty() {
        return Vec::new();
    }

    let document = Html::parse_document(markup);
    // Infallible on these literals.
    let titleline = Selector::parse("span.titleline").unwrap();
    let anchor = Selector::parse("a").unwrap();

    let mut articles = Vec::new();
    for container in document.select(&titleline) {
        let Some(link) = container.select(&anchor).next() else {
            debug!("Title line without an anchor; skipping");
            continue;
        };
        let Some(href) = link.value().attr("href") else {
            debug!("Title anchor without an href; skipping");
            continue;
        };

        articles.push(Article {
            title: link.text().collect::<String>(),
            link: href.to_string(),
        });
    }

    articles
}
