//! Helpers for logging raw player input on a single line.

/// Longest command text kept in a log record before it is cut short.
pub const MAX_LOGGED_CHARS: usize = 120;

/// Escape player input for single-line logging.
///
/// Backslash, newline, carriage return and tab get their usual escapes and
/// any other control character is written as `\xNN`. Input longer than
/// [`MAX_LOGGED_CHARS`] ends in an ellipsis.
pub fn escape_log(s: &str) -> String {
    let mut logged: String = s.chars().take(MAX_LOGGED_CHARS).map(escape_char).collect();
    if s.chars().nth(MAX_LOGGED_CHARS).is_some() {
        logged.push('…');
    }
    logged
}

fn escape_char(ch: char) -> String {
    match ch {
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        c if c.is_control() => format!("\\x{:02X}", c as u32),
        c => c.to_string(),
    }
}
