const MAX_VISIBLE_LENGTH: usize = 100;

/// Sanitizes prompt text for safe logging: trims, caps the visible length
/// and redacts credential-looking fragments.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let visible_end = char_boundary_at_most(trimmed, MAX_VISIBLE_LENGTH);
    let sanitized = if visible_end < trimmed.len() {
        format!(
            "{}... ({} chars total)",
            &trimmed[..visible_end],
            trimmed.chars().count()
        )
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&sanitized)
}

// Largest char boundary <= max_bytes, so the cap never splits a scalar.
fn char_boundary_at_most(text: &str, max_bytes: usize) -> usize {
    if text.len() <= max_bytes {
        return text.len();
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    end
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("secret=", "secret=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}
