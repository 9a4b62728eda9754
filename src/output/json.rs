//! JSON output formatting

use std::io;

use crate::sidebar::SidebarEntry;

/// Print a sidebar as pretty-printed JSON to stdout.
pub fn print_json(sidebar: &[SidebarEntry]) -> io::Result<()> {
    let json =
        serde_json::to_string_pretty(sidebar).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
