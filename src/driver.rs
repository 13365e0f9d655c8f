//! Runs the icon generator over every configured request

use crate::config::IconConfig;
use crate::icon::{self, GeneratedIcon, IconError};

/// Final line printed after all icons are written
pub const SUMMARY: &str = "PWA icon files created successfully!";

/// Confirmation line for a single written icon
pub fn confirmation(icon: &GeneratedIcon) -> String {
    format!(
        "✓ {} created ({}x{})",
        icon.path.display(),
        icon.size,
        icon.size
    )
}

/// True when any icon had to be drawn with the bundled font
pub fn used_bundled_font(icons: &[GeneratedIcon]) -> bool {
    icons.iter().any(|icon| icon.font.is_bundled())
}

/// Generate every icon in order, printing a confirmation after each
///
/// Stops at the first failure; later icons are not attempted.
pub fn generate_all(config: &IconConfig) -> Result<Vec<GeneratedIcon>, IconError> {
    let mut generated = Vec::with_capacity(config.icons.len());

    for request in &config.icons {
        let icon = icon::generate(request, &config.style)?;
        println!("{}", confirmation(&icon));
        generated.push(icon);
    }

    println!("\n{SUMMARY}");
    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::FontOrigin;
    use std::path::PathBuf;

    fn icon_with(font: FontOrigin) -> GeneratedIcon {
        GeneratedIcon {
            path: PathBuf::from("public/icon-192.png"),
            size: 192,
            font,
            origin: (50, 40),
            glyph_size: (92, 112),
        }
    }

    #[test]
    fn test_confirmation_text() {
        let icon = icon_with(FontOrigin::Bundled);
        assert_eq!(confirmation(&icon), "✓ public/icon-192.png created (192x192)");
    }

    #[test]
    fn test_used_bundled_font() {
        let preferred = icon_with(FontOrigin::Preferred(PathBuf::from("/fonts/a.ttf")));
        let bundled = icon_with(FontOrigin::Bundled);

        assert!(!used_bundled_font(&[]));
        assert!(!used_bundled_font(&[preferred.clone()]));
        assert!(used_bundled_font(&[preferred, bundled]));
    }
}
