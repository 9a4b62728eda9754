//! Console formatter for sidebar structures
//!
//! Renders the nested entries as an indented listing, with group titles
//! highlighted when color is enabled.

use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::sidebar::SidebarEntry;

/// Formatter for human-readable sidebar output.
pub struct SidebarFormatter {
    use_color: bool,
}

impl SidebarFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Print the sidebar to stdout.
    pub fn print(&self, sidebar: &[SidebarEntry]) -> io::Result<()> {
        let choice = if self.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut out = StandardStream::stdout(choice);
        self.write_entries(&mut out, sidebar, 0)?;
        out.flush()
    }

    /// Render the sidebar to a plain string (no color escapes).
    pub fn format(&self, sidebar: &[SidebarEntry]) -> io::Result<String> {
        let mut buf = Buffer::no_color();
        self.write_entries(&mut buf, sidebar, 0)?;
        Ok(String::from_utf8_lossy(buf.as_slice()).into_owned())
    }

    fn write_entries<W: WriteColor>(
        &self,
        out: &mut W,
        entries: &[SidebarEntry],
        depth: usize,
    ) -> io::Result<()> {
        let indent = "  ".repeat(depth);
        for entry in entries {
            match entry {
                SidebarEntry::Page(path) => {
                    // The root index document normalizes to "", shown as "/"
                    let shown = if path.is_empty() { "/" } else { path };
                    writeln!(out, "{}{}", indent, shown)?;
                }
                SidebarEntry::Group { title, children } => {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                    write!(out, "{}{}", indent, title)?;
                    out.reset()?;
                    writeln!(out, "/")?;
                    self.write_entries(out, children, depth + 1)?;
                }
            }
        }
        Ok(())
    }
}
