//! Canvas rasterization and PNG output

use std::path::Path;

use image::{ImageFormat, Rgb as RgbPixel, RgbImage};

use super::color::Rgb;
use super::glyph::GlyphLayout;
use super::IconError;

/// Fill a `size` x `size` canvas with `background` and draw the glyph at `origin`
pub fn rasterize(
    size: u32,
    background: Rgb,
    glyph: &GlyphLayout,
    origin: (i32, i32),
) -> Result<RgbImage, IconError> {
    let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(IconError::InvalidSize(size))?;
    pixmap.fill(background.to_skia());

    resvg::render(&glyph.tree, glyph.placement(origin), &mut pixmap.as_mut());

    // The background is opaque, so demultiplying is lossless
    let pixels = pixmap.pixels();
    Ok(RgbImage::from_fn(size, size, |x, y| {
        let color = pixels[pixel_index(x, y, size)].demultiply();
        RgbPixel([color.red(), color.green(), color.blue()])
    }))
}

/// Row-major offset of `(x, y)`, computed in `usize` so large canvases don't wrap
fn pixel_index(x: u32, y: u32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Encode as PNG and write to `path`, replacing any existing file
pub fn write_png(image: &RgbImage, path: &Path) -> Result<(), IconError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| IconError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_index() {
        assert_eq!(pixel_index(0, 0, 192), 0);
        assert_eq!(pixel_index(5, 2, 192), 389);
        assert_eq!(pixel_index(191, 191, 192), 192 * 192 - 1);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_pixel_index_past_u32_range() {
        // 70_000 * 70_000 does not fit in a u32
        assert_eq!(pixel_index(1, 69_999, 70_000), 4_899_930_001);
    }
}
