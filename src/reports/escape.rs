//! Escaping for Markdown reports.
//!
//! Profile paths come from the command line and may contain characters
//! with a Markdown meaning. They are escaped before being embedded.

/// Escape a string for a Markdown table cell.
///
/// # Examples
///
/// ```
/// use dpe_estimator::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a|b"), "a\\|b");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '|' => result.push_str("\\|"),
            '`' => result.push_str("\\`"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for inline Markdown such as headings.
///
/// # Examples
///
/// ```
/// use dpe_estimator::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("my_house*.yaml"), "my\\_house\\*.yaml");
/// ```
#[must_use]
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' | '_' | '`' | '[' | ']' | '#' | '!' | '~' | '|' | '<' | '>' | '\\' => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}
