//! Wikipedia article extraction.
//!
//! [`WikipediaExtractor`] fetches an article page and reduces it to an
//! [`Article`](wikiquiz_core::Article): title, short summary, section headings
//! and the plain body text. Parsing is exposed separately through
//! [`parse_article`] so it can be exercised without a network.
//!
//! # Example
//!
//! ```no_run
//! use wikiquiz_extract::WikipediaExtractor;
//! use wikiquiz_interface::ArticleSource;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = WikipediaExtractor::new()?;
//! let article = extractor
//!     .extract("https://en.wikipedia.org/wiki/Alan_Turing")
//!     .await?;
//! println!("{}: {} sections", article.title, article.sections.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extractor;
mod parse;

pub use extractor::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ExtractorConfig, WikipediaExtractor,
};
pub use parse::{ARTICLE_PATH_MARKER, clean_text, is_article_url, parse_article};
