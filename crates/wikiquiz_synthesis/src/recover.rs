//! JSON object recovery from free-form model replies.

use serde_json::Value;
use tracing::{debug, instrument, trace};
use wikiquiz_error::{SynthesisError, SynthesisResult};

/// Keys the synthesized object must carry.
pub const REQUIRED_KEYS: [&str; 3] = ["key_entities", "quiz", "related_topics"];

/// Strip a leading ```` ``` ```` / ```` ```json ```` fence and a trailing ```` ``` ````.
///
/// # Examples
///
/// ```
/// use wikiquiz_synthesis::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
/// assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
/// ```
pub fn strip_code_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix("```") {
        text = rest.strip_prefix("json").unwrap_or(rest).trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }
    text
}

/// Byte spans `(start, end_inclusive)` of every balanced top-level `{...}` in `text`.
///
/// Braces inside JSON strings do not count, and escaped quotes do not end a
/// string. Text outside any object is skipped without interpretation, so
/// stray quotes in surrounding prose are harmless. An object left open at the
/// end of the text produces no span.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn find_object_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string = false;
    let mut escape = false;

    for (i, &b) in text.as_bytes().iter().enumerate() {
        if depth == 0 {
            if b == b'{' {
                depth = 1;
                start = i;
            }
            continue;
        }

        if in_string {
            if escape {
                escape = false;
                continue;
            }
            match b {
                b'\\' => escape = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    spans.push((start, i));
                }
            }
            _ => {}
        }
    }

    trace!(count = spans.len(), open_depth = depth, "Scanned for JSON objects");
    spans
}

/// Recover the first JSON object carrying [`REQUIRED_KEYS`] from a model reply.
///
/// Candidates are tried in order; one that fails to parse or lacks a required
/// key is skipped in favor of the next.
///
/// # Errors
///
/// Returns a `Generation` error if the reply holds no balanced object, if no
/// candidate parses, or if no parsed candidate has all required keys.
///
/// # Examples
///
/// ```
/// use wikiquiz_synthesis::recover_json_object;
///
/// let reply = "Sure! {\"key_entities\": {}, \"quiz\": [], \"related_topics\": []} Enjoy.";
/// let value = recover_json_object(reply).unwrap();
/// assert!(value["quiz"].is_array());
/// ```
#[instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn recover_json_object(raw: &str) -> SynthesisResult<Value> {
    let text = strip_code_fences(raw);
    let spans = find_object_spans(text);
    if spans.is_empty() {
        return Err(SynthesisError::generation("LLM did not return a JSON object."));
    }

    let mut parse_error = None;
    let mut missing_keys = false;

    for (start, end) in spans {
        match serde_json::from_str::<Value>(&text[start..=end]) {
            Ok(Value::Object(map)) => {
                if REQUIRED_KEYS.iter().all(|key| map.contains_key(*key)) {
                    debug!(start, end, "Recovered JSON object");
                    return Ok(Value::Object(map));
                }
                missing_keys = true;
            }
            Ok(_) => {}
            Err(e) => {
                debug!(start, end, error = %e, "Skipping malformed JSON candidate");
                parse_error.get_or_insert(e);
            }
        }
    }

    if missing_keys {
        return Err(SynthesisError::generation(
            "LLM JSON missing required keys (quiz/related_topics/key_entities).",
        ));
    }

    Err(SynthesisError::generation(match parse_error {
        Some(e) => format!("LLM returned malformed JSON: {}", e),
        None => "LLM did not return a JSON object.".to_string(),
    }))
}
