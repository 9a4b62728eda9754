//! Shared helpers for sidebar building

use glob::Pattern;

/// Check if a directory name matches any exclusion entry, either as a
/// literal name or as a glob pattern.
pub fn is_excluded(name: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
