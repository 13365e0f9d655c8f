//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
}

/// Generate PWA icons: a centered glyph on a solid square background
#[derive(Debug, Parser)]
#[command(name = "pwa-icons", version, about)]
pub struct Cli {
    /// TOML file with icon style and output list (defaults to public/icon-192.png and public/icon-512.png)
    #[arg(short, long, env = "PWA_ICONS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Preferred font file; falls back to the bundled font if it can't be loaded
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_output: bool,
}
