//! Glyph layout and centering
//!
//! Text is laid out through usvg so that the outline's ink bounding box can be
//! measured before anything is drawn.

use std::sync::Arc;

use thiserror::Error;

use super::color::Rgb;
use super::font::IconFont;

/// Errors that can occur while laying out a glyph
#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("Failed to build glyph tree: {0}")]
    Svg(#[from] usvg::Error),

    #[error("Font {family:?} produced no outline for {text:?}")]
    NotRendered { family: String, text: String },
}

/// A laid-out glyph and its ink bounding box in tree coordinates
pub struct GlyphLayout {
    pub(crate) tree: usvg::Tree,
    pub(crate) bounds: usvg::Rect,
}

impl GlyphLayout {
    /// Pixel extent of the ink box, rounded up
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.bounds.width().ceil() as u32,
            self.bounds.height().ceil() as u32,
        )
    }

    /// Translation that moves the ink box's top-left corner onto `origin`
    pub fn placement(&self, origin: (i32, i32)) -> tiny_skia::Transform {
        tiny_skia::Transform::from_translate(
            origin.0 as f32 - self.bounds.left(),
            origin.1 as f32 - self.bounds.top(),
        )
    }
}

/// Lay out `text` in `font` at `font_size` px, filled with `fill`
pub fn layout(
    text: &str,
    font: &IconFont,
    font_size: f32,
    fill: Rgb,
) -> Result<GlyphLayout, GlyphError> {
    let extent = (font_size * 2.0).ceil().max(1.0);
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{extent}" height="{extent}" viewBox="0 0 {extent} {extent}"><text x="0" y="{font_size}" font-family="'{family}'" font-weight="{weight}" font-size="{font_size}" fill="{fill}">{text}</text></svg>"#,
        family = escape_xml(&font.family),
        weight = font.weight,
        text = escape_xml(text),
    );

    let mut options = usvg::Options::default();
    options.font_family = font.family.clone();
    options.fontdb = Arc::clone(&font.db);

    let tree = usvg::Tree::from_str(&svg, &options)?;
    let bounds = find_text(tree.root())
        .map(|text| text.flattened().abs_bounding_box())
        .filter(|rect| rect.width() > 0.0 && rect.height() > 0.0)
        .ok_or_else(|| GlyphError::NotRendered {
            family: font.family.clone(),
            text: text.to_string(),
        })?;

    tracing::debug!(
        family = %font.family,
        font_size,
        left = bounds.left(),
        top = bounds.top(),
        width = bounds.width(),
        height = bounds.height(),
        "glyph laid out"
    );

    Ok(GlyphLayout { tree, bounds })
}

/// Top-left origin that centers a `width` x `height` box on a square canvas
///
/// Uses floor division, so a box larger than the canvas gets a negative origin.
pub fn centered_origin(canvas: u32, width: u32, height: u32) -> (i32, i32) {
    let offset = |extent: u32| (i64::from(canvas) - i64::from(extent)).div_euclid(2) as i32;
    (offset(width), offset(height))
}

fn find_text(group: &usvg::Group) -> Option<&usvg::Text> {
    group.children().iter().find_map(|node| match node {
        usvg::Node::Text(text) => Some(text.as_ref()),
        usvg::Node::Group(group) => find_text(group),
        _ => None,
    })
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
