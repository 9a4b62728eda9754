//! Output formatting for sidebar structures

mod json;
mod tree;

pub use json::print_json;
pub use tree::SidebarFormatter;
