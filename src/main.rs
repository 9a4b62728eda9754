//! CLI entry point for sidenav

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use sidenav::sidebar::DEFAULT_INDEX_FILE;
use sidenav::{SidebarBuilder, SidebarConfig, SidebarFormatter, print_json};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sidenav")]
#[command(about = "Builds a nested sidebar navigation tree from a docs directory")]
#[command(version)]
struct Args {
    /// Documentation root to scan
    #[arg(default_value = "docs")]
    path: PathBuf,

    /// Index document filename, collapsed to the directory's own path
    #[arg(long = "index", value_name = "NAME", default_value = DEFAULT_INDEX_FILE)]
    index: String,

    /// Exclude directories matching pattern, in addition to the default
    /// exclusions (can be used multiple times)
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let config = SidebarConfig::new(&args.path)
        .with_index_file(&args.index)
        .with_excludes(args.exclude.iter().cloned());

    let sidebar = match SidebarBuilder::new(config).build() {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("sidenav: cannot access '{}': {}", args.path.display(), e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&sidebar)
    } else {
        SidebarFormatter::new(should_use_color(args.color)).print(&sidebar)
    };

    if let Err(e) = result {
        eprintln!("sidenav: error writing output: {}", e);
        process::exit(1);
    }
}
