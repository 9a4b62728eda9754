//! Configuration for the sidebar builder

use std::path::PathBuf;

/// Filename treated as a directory's own page. It contributes an empty path
/// component, so `guide/README.md` collapses to `/guide`.
pub const DEFAULT_INDEX_FILE: &str = "README.md";

/// Directory names excluded from traversal by default. `.vuepress` holds the
/// site tooling's private configuration and never belongs in the sidebar.
pub const DEFAULT_EXCLUDES: &[&str] = &[".vuepress"];

/// Configuration for sidebar building behavior.
///
/// The documentation root is required; callers that want the conventional
/// `docs` layout pass it explicitly (the CLI does).
#[derive(Debug, Clone)]
pub struct SidebarConfig {
    /// Root of the documentation tree. Page paths are computed relative to it.
    pub root: PathBuf,
    /// Index document filename, normalized to an empty path component.
    pub index_file: String,
    /// Directory names or glob patterns skipped at every depth.
    pub exclude: Vec<String>,
}

impl SidebarConfig {
    /// Create a configuration for `root` with the compatibility defaults
    /// (`README.md` index, `.vuepress` excluded).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            index_file: DEFAULT_INDEX_FILE.to_string(),
            exclude: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_index_file(mut self, name: impl Into<String>) -> Self {
        self.index_file = name.into();
        self
    }

    /// Add exclusion patterns on top of the current set.
    pub fn with_excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(patterns.into_iter().map(Into::into));
        self
    }
}
