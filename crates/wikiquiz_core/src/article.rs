//! Extracted article content.

use serde::{Deserialize, Serialize};

/// Structured text pulled from a Wikipedia article page.
///
/// # Examples
///
/// ```
/// use wikiquiz_core::Article;
///
/// let article = Article {
///     url: "https://en.wikipedia.org/wiki/Rust".to_string(),
///     title: "Rust".to_string(),
///     summary: Some("Rust is a language.".to_string()),
///     sections: vec!["History".to_string()],
///     full_text: "Rust is a language.".to_string(),
///     raw_html: "<html></html>".to_string(),
/// };
///
/// assert_eq!(article.sections.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Source URL, exactly as requested
    pub url: String,
    /// Cleaned page heading, or "Untitled"
    pub title: String,
    /// First two non-empty paragraphs joined by a space
    pub summary: Option<String>,
    /// Section headings in document order
    pub sections: Vec<String>,
    /// Newline-joined paragraph and list item text
    pub full_text: String,
    /// Response body as fetched
    pub raw_html: String,
}
