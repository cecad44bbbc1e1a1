//! JSON candidate extraction
//!
//! The model is asked for pure JSON but replies with free text: the object
//! may arrive inside a markdown fence, wrapped in prose, or bare. This
//! module isolates the best candidate substring; parsing it is the
//! caller's job.
//!
//! Priority order:
//! 1. the inner content of a ```json fence;
//! 2. the balanced `{...}` span starting at the first `{` (string- and
//!    escape-aware, so braces inside JSON strings don't break it);
//! 3. the full reply text.

/// Isolate the JSON candidate from a model reply.
pub fn extract_json_candidate(text: &str) -> String {
    if let Some(inner) = fenced_json_block(text) {
        return strip_stray_fences(inner);
    }

    if let Some(span) = balanced_object_span(text) {
        return strip_stray_fences(span);
    }

    strip_stray_fences(text)
}

/// Inner content of the first ```json fence, if it is properly closed.
fn fenced_json_block(text: &str) -> Option<&str> {
    let start = text.find("```json")? + "```json".len();
    let end = text[start..].find("```")?;
    Some(text[start..start + end].trim())
}

/// The balanced brace-delimited span starting at the first `{`.
///
/// Tracks string and escape state so that `"}"` inside a JSON string does
/// not terminate the scan. Returns `None` when the first `{` is never
/// closed.
fn balanced_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Remove fence markers that survived extraction.
fn strip_stray_fences(candidate: &str) -> String {
    candidate.replace("```json", "").replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_wins() {
        let text = "Here's the analysis:\n```json\n{\"score\": 80}\n```\nThat's it.";
        assert_eq!(extract_json_candidate(text), "{\"score\": 80}");
    }

    #[test]
    fn test_prose_wrapped_object() {
        let text = "Sure! The result is {\"score\": 80, \"summary\": \"ok\"} - let me know.";
        assert_eq!(
            extract_json_candidate(text),
            "{\"score\": 80, \"summary\": \"ok\"}"
        );
    }

    #[test]
    fn test_bare_object_untouched() {
        let text = "{\"score\": 80}";
        assert_eq!(extract_json_candidate(text), text);
    }

    #[test]
    fn test_nested_objects_kept_whole() {
        let text = "prefix {\"a\": {\"b\": {\"c\": 1}}} suffix";
        assert_eq!(extract_json_candidate(text), "{\"a\": {\"b\": {\"c\": 1}}}");
    }

    #[test]
    fn test_braces_inside_strings_ignored() {
        let text = r#"note {"summary": "uses {braces} and a \" quote", "score": 3} end"#;
        assert_eq!(
            extract_json_candidate(text),
            r#"{"summary": "uses {braces} and a \" quote", "score": 3}"#
        );
    }

    #[test]
    fn test_trailing_prose_brace_not_captured() {
        // A stray closing brace in prose after the object must not extend
        // the candidate.
        let text = "{\"a\": 1} and then a footnote } here";
        assert_eq!(extract_json_candidate(text), "{\"a\": 1}");
    }

    #[test]
    fn test_unclosed_object_falls_back_to_full_text() {
        let text = "broken {\"a\": 1";
        assert_eq!(extract_json_candidate(text), "broken {\"a\": 1");
    }

    #[test]
    fn test_no_json_falls_back_to_full_text() {
        let text = "the model refused to answer";
        assert_eq!(extract_json_candidate(text), text);
    }

    #[test]
    fn test_unterminated_fence_falls_through_to_scanner() {
        let text = "```json\n{\"a\": 1}";
        assert_eq!(extract_json_candidate(text), "{\"a\": 1}");
    }

    #[test]
    fn test_stray_fence_markers_stripped() {
        let text = "```json\n{\"a\": 1}\n``` trailing ```";
        assert_eq!(extract_json_candidate(text), "{\"a\": 1}");
    }
}
