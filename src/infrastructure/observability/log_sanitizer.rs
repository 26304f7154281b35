const MAX_VISIBLE_CHARS: usize = 100;

/// Shortens operator prompts and transcripts for safe logging and redacts
/// anything that looks like an inline secret. Truncation counts characters,
/// not bytes; prompts are routinely Japanese.
pub fn sanitize_excerpt(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let chars = trimmed.chars().count();
    let excerpt = if chars > MAX_VISIBLE_CHARS {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, chars)
    } else {
        trimmed.to_string()
    };

    redact_secrets(&excerpt)
}

fn redact_secrets(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("secret=", "secret=[REDACTED]"),
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
