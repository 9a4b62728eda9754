//! Sidebar building logic
//!
//! This module scans a documentation directory tree and produces the nested
//! navigation structure a static-site generator consumes as its sidebar
//! configuration: markdown files become page links, subdirectories become
//! titled groups built by the same scan applied recursively.

mod config;
mod entry;
mod utils;
mod walker;

// Re-export public types
pub use config::{DEFAULT_EXCLUDES, DEFAULT_INDEX_FILE, SidebarConfig};
pub use entry::SidebarEntry;
pub use walker::SidebarBuilder;
