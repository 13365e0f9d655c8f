//! pwa-icons - generates the PWA icon set
//!
//! With no arguments writes `public/icon-192.png` and `public/icon-512.png`.

mod cli;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::{exit_codes, Cli};
use pwa_icons::{driver, IconConfig};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_output) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    match execute(cli) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_codes::UNEXPECTED_FAILURE
        }
    }
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => IconConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => IconConfig::default(),
    };

    let explicit_font = cli.font.is_some();
    let config = config.with_font_override(cli.font);

    let icons = driver::generate_all(&config).context("generating icons")?;

    if explicit_font && driver::used_bundled_font(&icons) {
        tracing::warn!(
            font = %config.style.font_path.display(),
            "requested font could not be used, icons were drawn with the bundled font"
        );
    }

    Ok(())
}
