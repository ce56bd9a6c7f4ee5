//! HTML to article reduction.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};
use wikiquiz_core::Article;
use wikiquiz_error::{ExtractError, ExtractErrorKind, ExtractResult};

/// Substring every accepted article URL must contain.
pub const ARTICLE_PATH_MARKER: &str = "wikipedia.org/wiki/";

const UNTITLED: &str = "Untitled";
const SUMMARY_PARAGRAPHS: usize = 2;
const MAX_HEADINGS: usize = 30;
const SKIPPED_SECTIONS: [&str; 3] = ["references", "external links", "see also"];

const TITLE_SELECTOR: &str = "#firstHeading";
const CONTENT_SELECTOR: &str = "div#mw-content-text";
const HEADLINE_SELECTOR: &str = "h2 .mw-headline, h3 .mw-headline";
// Skins since 2023 drop the headline span and wrap bare headings instead.
const HEADING_SELECTOR: &str = "div.mw-heading h2, div.mw-heading h3";
const BODY_SELECTOR: &str = "p, li";

static CITATION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\d+\]").expect("Valid citation regex"));

/// Whether `url` points at a Wikipedia article.
///
/// # Examples
///
/// ```
/// use wikiquiz_extract::is_article_url;
///
/// assert!(is_article_url("https://en.wikipedia.org/wiki/Rust_(programming_language)"));
/// assert!(!is_article_url("https://example.com/wiki/Rust"));
/// ```
pub fn is_article_url(url: &str) -> bool {
    url.contains(ARTICLE_PATH_MARKER)
}

/// Remove numeric citation markers, collapse whitespace runs and trim.
///
/// # Examples
///
/// ```
/// use wikiquiz_extract::clean_text;
///
/// assert_eq!(clean_text("  Paris[1] is\n the   capital.[23] "), "Paris is the capital.");
/// ```
pub fn clean_text(text: &str) -> String {
    let stripped = CITATION_MARKER.replace_all(text, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reduce an article page to its [`Article`] fields.
///
/// # Errors
///
/// Returns a `Parse` error if the page has no `div#mw-content-text` container.
#[instrument(skip(html), fields(html_len = html.len()))]
pub fn parse_article(url: &str, html: &str) -> ExtractResult<Article> {
    let document = Html::parse_document(html);

    let title = document
        .select(&selector(TITLE_SELECTOR)?)
        .next()
        .map(element_text)
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    let content = document
        .select(&selector(CONTENT_SELECTOR)?)
        .next()
        .ok_or_else(|| {
            ExtractError::new(ExtractErrorKind::Parse(
                "Could not find Wikipedia article content.".to_string(),
            ))
        })?;

    let summary_parts: Vec<String> = content
        .select(&selector("p")?)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .take(SUMMARY_PARAGRAPHS)
        .collect();
    let summary = (!summary_parts.is_empty()).then(|| summary_parts.join(" "));

    let sections = section_headings(content)?;

    let full_text = content
        .select(&selector(BODY_SELECTOR)?)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    debug!(
        title = %title,
        sections = sections.len(),
        text_len = full_text.len(),
        "Parsed article"
    );

    Ok(Article {
        url: url.to_string(),
        title,
        summary,
        sections,
        full_text,
        raw_html: html.to_string(),
    })
}

fn section_headings(content: ElementRef<'_>) -> ExtractResult<Vec<String>> {
    let headline = selector(HEADLINE_SELECTOR)?;
    let mut headings: Vec<ElementRef<'_>> = content.select(&headline).take(MAX_HEADINGS).collect();
    if headings.is_empty() {
        let heading = selector(HEADING_SELECTOR)?;
        headings = content.select(&heading).take(MAX_HEADINGS).collect();
    }

    Ok(headings
        .into_iter()
        .map(element_text)
        .filter(|text| {
            !text.is_empty() && !SKIPPED_SECTIONS.contains(&text.to_lowercase().as_str())
        })
        .collect())
}

fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

fn selector(css: &str) -> ExtractResult<Selector> {
    Selector::parse(css).map_err(|e| {
        ExtractError::new(ExtractErrorKind::Parse(format!(
            "invalid selector {:?}: {}",
            css, e
        )))
    })
}
