const MAX_SNIPPET_LENGTH: usize = 300;
const MAX_ERROR_LENGTH: usize = 2_000;

/// Cap a source snippet for transport in a scan report.
pub fn truncate_snippet(snippet: &str) -> String {
    if snippet.len() <= MAX_SNIPPET_LENGTH {
        snippet.to_string()
    } else {
        let mut end = MAX_SNIPPET_LENGTH;
        while !snippet.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &snippet[..end])
    }
}

pub fn truncate_error(error: &str) -> String {
    if error.len() <= MAX_ERROR_LENGTH {
        error.to_string()
    } else {
        let mut end = MAX_ERROR_LENGTH;
        while !error.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &error[..end])
    }
}
