//! Sidenav - builds a nested sidebar navigation tree from a docs directory

pub mod output;
pub mod sidebar;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{SidebarFormatter, print_json};
pub use sidebar::{SidebarBuilder, SidebarConfig, SidebarEntry};
