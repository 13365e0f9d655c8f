//! pwa-icons - generates square PWA icons with a centered glyph
//!
//! The library renders icons in memory ([`icon::render_icon`]), writes them as
//! PNG files ([`icon::generate`]) and runs a whole configured batch
//! ([`driver::generate_all`]).

pub mod config;
pub mod driver;
pub mod icon;

pub use config::{ConfigError, IconConfig};
pub use driver::generate_all;
pub use icon::{generate, render_icon, GeneratedIcon, IconError, IconRequest, IconStyle};
