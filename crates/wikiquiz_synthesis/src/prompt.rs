//! Prompt template.

use wikiquiz_core::Article;

/// Maximum number of body text characters sent to the model.
pub const MAX_TEXT_CHARS: usize = 12_000;

/// Maximum number of section headings listed in the prompt.
pub const MAX_PROMPT_SECTIONS: usize = 20;

/// System instruction sent ahead of every article.
pub const SYSTEM_PROMPT: &str = "You are a precise education content generator. \
You MUST only use facts present in the article text. \
Return STRICT JSON only. No markdown. No extra text.";

/// The first `max_chars` characters of `text`, never splitting a code point.
///
/// # Examples
///
/// ```
/// use wikiquiz_synthesis::clip_chars;
///
/// assert_eq!(clip_chars("héllo", 2), "hé");
/// assert_eq!(clip_chars("short", 100), "short");
/// ```
pub fn clip_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Render the user message for an article.
pub fn user_prompt(article: &Article) -> String {
    let sections = article
        .sections
        .iter()
        .take(MAX_PROMPT_SECTIONS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"Wikipedia Article Title: {title}

Article Summary:
{summary}

Article Sections:
{sections}

Article Text (may be long, clipped):
{text}

TASK:
Return a single JSON object with EXACT keys:
- key_entities: {{ "people": [...], "organizations": [...], "locations": [...] }}
- quiz: array of 5 to 10 objects, each:
  {{
    "question": "...",
    "options": ["A", "B", "C", "D"],
    "answer": "exactly one of the options",
    "difficulty": "easy" | "medium" | "hard",
    "explanation": "1-2 sentences grounded in the article"
  }}
- related_topics: 5 to 10 strings (Wikipedia topic names)

CONSTRAINTS:
- No hallucinations: if unsure, avoid that fact.
- Options must be plausible and grounded in the article context.
- answer must match one option exactly.
- Keep explanations short and specific.

Return STRICT JSON only."#,
        title = article.title,
        summary = article.summary.as_deref().unwrap_or(""),
        sections = sections,
        text = clip_chars(&article.full_text, MAX_TEXT_CHARS),
    )
}
