//! HTML rendering for the digest email body.

use crate::models::Article;

/// Render articles as an HTML unordered list.
///
/// One `<li><a href=LINK>TITLE</a></li>` per article, in digest order. An
/// empty digest renders as `<ul></ul>` and still gets sent. Output depends
/// only on the input slice, so rendering the same digest twice yields
/// byte-identical HTML.
///
/// Titles and links are stored verbatim from the page; entity escaping
/// happens here, at the rendering boundary.
pub fn render_article_list(articles: &[Article]) -> String {
    let mut body = String::from("<ul>");
    for article in articles {
        body.push_str("<li><a href=\"");
        push_escaped(&mut body, &article.link);
        body.push_str("\">");
        push_escaped(&mut body, &article.title);
        body.push_str("</a></li>");
    }
    body.push_str("</ul>");
    body
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
