//! Pulling JSON out of free-form model output.
//!
//! Models asked for "JSON only" still wrap it in Markdown fences or lead with
//! a sentence. Extraction takes the first balanced object or array and parses
//! that.

use serde_json::Value;

/// Strip a surrounding ```json fence if present.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "JSON", ...) on the opening line.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Byte range of the first balanced `{...}` or `[...]`, honoring strings.
fn balanced_span(text: &str) -> Option<(usize, usize)> {
    let start = text.find(&['{', '['][..])?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some((start, start + offset + ch.len_utf8()));
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse the JSON value embedded in `text`.
pub fn extract_json(text: &str) -> Result<Value, String> {
    let body = strip_code_fence(text);
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        return Ok(value);
    }
    let (start, end) =
        balanced_span(body).ok_or_else(|| "no JSON object or array in output".to_string())?;
    serde_json::from_str(&body[start..end]).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_json_parses() {
        assert_eq!(extract_json(r#"{"a": 1}"#).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn fenced_json_parses() {
        let text = "```json\n[{\"q\": \"x\"}]\n```";
        assert_eq!(extract_json(text).unwrap(), json!([{"q": "x"}]));
    }

    #[test]
    fn leading_prose_is_skipped() {
        let text = "Here is your plan:\n{\"title\": \"Plan {A}\", \"days\": [1, 2]}\nGood luck!";
        assert_eq!(
            extract_json(text).unwrap(),
            json!({"title": "Plan {A}", "days": [1, 2]})
        );
    }

    #[test]
    fn escaped_quotes_inside_strings_do_not_end_the_span() {
        let text = r#"Answer: {"q": "He said \"F = ma}\"", "n": 2} trailing"#;
        assert_eq!(extract_json(text).unwrap()["n"], 2);
    }

    #[test]
    fn prose_without_json_is_an_error() {
        assert!(extract_json("Sorry, I cannot help with that.").is_err());
        assert!(extract_json("{ unbalanced").is_err());
    }
}
