//! Input sanitization for character fields.
//!
//! Free-text fields lose markup and control characters; URL fields only
//! lose control characters, since their syntax is checked separately.

/// Remove HTML-like tags.
///
/// A `<` followed by whitespace (or at the very end of the input) is kept
/// as a literal character. Any other `<` opens a tag that runs to the next
/// `>`; an unterminated tag swallows the rest of the input.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_tag = false;

    while let Some(c) = chars.next() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
            continue;
        }
        if c == '<' {
            match chars.peek() {
                Some(next) if !next.is_whitespace() => in_tag = true,
                _ => out.push(c),
            }
            continue;
        }
        out.push(c);
    }

    out
}

/// Remove control characters, keeping newlines, carriage returns and tabs.
pub fn strip_control(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
        .collect()
}

/// Clean a free-text field: trim, strip control characters and tags, trim again.
///
/// Control characters go first: VT, FF and NEL are whitespace to
/// [`strip_tags`], and must not decide whether a `<` is literal.
/// The output is a fixed point of this function.
pub fn sanitize_text(raw: &str) -> String {
    strip_tags(&strip_control(raw.trim())).trim().to_string()
}

/// Clean a URL field before syntax validation.
pub fn sanitize_url(raw: &str) -> String {
    strip_control(raw.trim()).trim().to_string()
}
