//! Icon generation
//!
//! An icon is a square canvas filled with a solid background and a single
//! glyph centered on it, written out as an RGB PNG.

pub mod color;
pub mod font;
pub mod glyph;
mod render;

use std::path::{Path, PathBuf};

use image::RgbImage;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

pub use color::Rgb;
pub use font::{FontError, FontOrigin, IconFont};
pub use glyph::GlyphError;

/// Bold system font tried before the bundled fallback
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Default glyph text
pub const DEFAULT_GLYPH: &str = "B";

/// Default font size relative to the icon edge length
pub const DEFAULT_FONT_SCALE: f64 = 0.6;

/// Errors that can occur while generating an icon
#[derive(Debug, Error)]
pub enum IconError {
    #[error("Invalid icon size {0}: edge length must be positive")]
    InvalidSize(u32),

    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("Glyph error: {0}")]
    Glyph(#[from] GlyphError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// One icon to produce: edge length in pixels and output file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IconRequest {
    pub size: u32,
    pub path: PathBuf,
}

impl IconRequest {
    pub fn new(size: u32, path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            path: path.into(),
        }
    }

    /// The two standard PWA icons, 192px then 512px
    pub fn defaults() -> Vec<IconRequest> {
        vec![
            IconRequest::new(192, "public/icon-192.png"),
            IconRequest::new(512, "public/icon-512.png"),
        ]
    }
}

/// Colours, glyph and font shared by every icon in a run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IconStyle {
    pub background: Rgb,
    pub foreground: Rgb,
    pub glyph: String,
    /// Font size as a fraction of the icon edge length
    pub font_scale: f64,
    /// Preferred font file; the bundled face is used if it can't be loaded
    pub font_path: PathBuf,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            background: Rgb::ORANGE,
            foreground: Rgb::WHITE,
            glyph: DEFAULT_GLYPH.to_string(),
            font_scale: DEFAULT_FONT_SCALE,
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
        }
    }
}

impl IconStyle {
    /// Font size in pixels for an icon of edge length `size`
    pub fn font_size(&self, size: u32) -> f32 {
        (f64::from(size) * self.font_scale).round().max(1.0) as f32
    }
}

/// An icon rendered in memory
#[derive(Debug)]
pub struct RenderedIcon {
    pub image: RgbImage,
    pub font: FontOrigin,
    /// Top-left of the glyph's ink box on the canvas
    pub origin: (i32, i32),
    /// Ink box size in whole pixels
    pub glyph_size: (u32, u32),
}

/// Summary of an icon written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: u32,
    pub font: FontOrigin,
    pub origin: (i32, i32),
    pub glyph_size: (u32, u32),
}

/// Render an icon of edge length `size` without touching the filesystem
/// (apart from reading the preferred font)
pub fn render_icon(size: u32, style: &IconStyle) -> Result<RenderedIcon, IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }

    let font_size = style.font_size(size);
    let (font, glyph) = match layout_with(font::load_preferred(&style.font_path), style, font_size)
    {
        Ok(found) => found,
        Err(err) => {
            debug!(error = %err, "preferred font unavailable, using bundled font");
            layout_with(font::load_bundled(), style, font_size)?
        }
    };

    let glyph_size = glyph.pixel_size();
    let origin = glyph::centered_origin(size, glyph_size.0, glyph_size.1);
    debug!(size, font_size, font = %font.origin, ?origin, ?glyph_size, "placing glyph");

    let image = render::rasterize(size, style.background, &glyph, origin)?;

    Ok(RenderedIcon {
        image,
        font: font.origin,
        origin,
        glyph_size,
    })
}

/// Render one icon and write it as a PNG to `request.path`
///
/// Parent directories must already exist.
pub fn generate(request: &IconRequest, style: &IconStyle) -> Result<GeneratedIcon, IconError> {
    let rendered = render_icon(request.size, style)?;
    render::write_png(&rendered.image, &request.path)?;

    info!(
        path = %request.path.display(),
        size = request.size,
        font = %rendered.font,
        "icon written"
    );

    Ok(GeneratedIcon {
        path: request.path.clone(),
        size: request.size,
        font: rendered.font,
        origin: rendered.origin,
        glyph_size: rendered.glyph_size,
    })
}

fn layout_with(
    font: Result<IconFont, FontError>,
    style: &IconStyle,
    font_size: f32,
) -> Result<(IconFont, glyph::GlyphLayout), IconError> {
    let font = font?;
    let glyph = glyph::layout(&style.glyph, &font, font_size, style.foreground)?;
    Ok((font, glyph))
}

/// Convenience for callers holding a bare path
pub fn generate_at(size: u32, path: &Path, style: &IconStyle) -> Result<GeneratedIcon, IconError> {
    generate(&IconRequest::new(size, path), style)
}
