//! Navigation entry type for sidebar output

use serde::Serialize;

/// One item in a sidebar sequence.
///
/// Serializes untagged so the output matches what static-site sidebar
/// configs expect: a `Page` is a bare path string, a `Group` is an object
/// with a `title` and recursively nested `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    /// Site-relative path to a markdown page, e.g. `/guide/setup.md`.
    /// The root's index document is the empty string.
    Page(String),
    /// A subdirectory: its bare name as the title, its own scan as children.
    Group {
        title: String,
        children: Vec<SidebarEntry>,
    },
}

impl SidebarEntry {
    pub fn is_group(&self) -> bool {
        matches!(self, SidebarEntry::Group { .. })
    }

    /// Group title, or `None` for pages.
    pub fn title(&self) -> Option<&str> {
        match self {
            SidebarEntry::Page(_) => None,
            SidebarEntry::Group { title, .. } => Some(title),
        }
    }
}
