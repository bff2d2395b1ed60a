//! Style Path helpers
//!
//! Compilation paths are stored as plain strings with forward-slash
//! separators, because they are handed to the compiler verbatim and
//! compared textually for deduplication.

/// Replace every backslash with a forward slash.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Quote a command-line token for display if it contains whitespace.
///
/// Only used when rendering a command line for humans; arguments are passed
/// to the process as separate argv entries and never need quoting there.
pub fn quote_for_display(token: &str) -> String {
    if token.is_empty() {
        return "\"\"".to_string();
    }
    if token.chars().any(char::is_whitespace) {
        format!("\"{}\"", token.replace('"', "\\\""))
    } else {
        token.to_string()
    }
}
