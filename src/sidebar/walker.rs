//! SidebarBuilder - recursive docs scan producing the navigation structure

use std::fs;
use std::io;
use std::path::Path;

use super::config::SidebarConfig;
use super::entry::SidebarEntry;
use super::utils::is_excluded;

const MARKDOWN_EXT: &str = ".md";

/// Builds the full sidebar structure in memory with a single synchronous,
/// read-only, depth-first pass over the documentation tree.
///
/// Within one directory, pages come first and groups after, each in the
/// order the directory listing yields them. No sorting is applied.
pub struct SidebarBuilder {
    config: SidebarConfig,
}

impl SidebarBuilder {
    pub fn new(config: SidebarConfig) -> Self {
        Self { config }
    }

    /// Scan the configured root and return its sidebar entries.
    ///
    /// Any `read_dir` or stat failure (missing root, permission denial)
    /// aborts the scan and propagates as the underlying `io::Error`.
    pub fn build(&self) -> io::Result<Vec<SidebarEntry>> {
        let root = self.config.root.clone();
        self.build_dir(&root, &mut Vec::new())
    }

    /// `segments` is the current directory's path relative to the root, as a
    /// segment list. Page paths are rendered from it rather than by stripping
    /// a root-prefix string off a joined path.
    fn build_dir(
        &self,
        path: &Path,
        segments: &mut Vec<String>,
    ) -> io::Result<Vec<SidebarEntry>> {
        let mut pages = Vec::new();
        let mut dirs = Vec::new();

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            // Following stat: a symlink counts as whatever it points at.
            let meta = fs::metadata(entry.path())?;
            if meta.is_file() && name.ends_with(MARKDOWN_EXT) {
                pages.push(name);
            } else if meta.is_dir() && !is_excluded(&name, &self.config.exclude) {
                dirs.push(name);
            }
            // Everything else (non-markdown files, excluded or special
            // entries) is silently dropped.
        }

        let mut entries = Vec::with_capacity(pages.len() + dirs.len());
        for name in pages {
            entries.push(SidebarEntry::Page(self.page_path(segments, &name)));
        }
        for name in dirs {
            segments.push(name.clone());
            let children = self.build_dir(&path.join(&name), segments)?;
            segments.pop();
            entries.push(SidebarEntry::Group {
                title: name,
                children,
            });
        }

        Ok(entries)
    }

    /// Render a page path from the directory's segment list. The index
    /// document contributes no filename component, so it collapses to the
    /// directory's own path - the empty string at the root.
    fn page_path(&self, segments: &[String], file_name: &str) -> String {
        let mut parts: Vec<&str> = segments.iter().map(String::as_str).collect();
        if file_name != self.config.index_file {
            parts.push(file_name);
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("/{}", parts.join("/"))
        }
    }
}
