//! Font resolution for icon glyphs
//!
//! A preferred font file is tried first. The bundled face (egui's default
//! proportional font) is always available and is used whenever the preferred
//! font cannot be loaded.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use usvg::fontdb;

/// Errors that can occur while loading a font
#[derive(Debug, Error)]
pub enum FontError {
    #[error("Failed to read font {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No usable font face in {0}")]
    NoFaces(String),

    #[error("Bundled default font is missing")]
    MissingBundledFont,
}

/// Where the font used for a glyph came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontOrigin {
    /// Loaded from the preferred font file
    Preferred(PathBuf),
    /// Built-in fallback face
    Bundled,
}

impl FontOrigin {
    pub fn is_bundled(&self) -> bool {
        matches!(self, FontOrigin::Bundled)
    }
}

impl fmt::Display for FontOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontOrigin::Preferred(path) => write!(f, "{}", path.display()),
            FontOrigin::Bundled => write!(f, "bundled"),
        }
    }
}

/// A font database holding exactly one face, ready for text layout
#[derive(Clone)]
pub struct IconFont {
    pub(crate) db: Arc<fontdb::Database>,
    pub family: String,
    pub weight: u16,
    pub origin: FontOrigin,
}

impl fmt::Debug for IconFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconFont")
            .field("family", &self.family)
            .field("weight", &self.weight)
            .field("origin", &self.origin)
            .finish()
    }
}

impl IconFont {
    fn from_database(db: fontdb::Database, origin: FontOrigin) -> Result<Self, FontError> {
        let face = db
            .faces()
            .next()
            .ok_or_else(|| FontError::NoFaces(origin.to_string()))?;
        let family = face
            .families
            .first()
            .map(|(name, _)| name.clone())
            .ok_or_else(|| FontError::NoFaces(origin.to_string()))?;
        let weight = face.weight.0;

        Ok(Self {
            db: Arc::new(db),
            family,
            weight,
            origin,
        })
    }
}

/// Load the preferred font file
///
/// A file that can be read but contains no parseable face is an error too.
pub fn load_preferred(path: &Path) -> Result<IconFont, FontError> {
    let mut db = fontdb::Database::new();
    db.load_font_file(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    IconFont::from_database(db, FontOrigin::Preferred(path.to_path_buf()))
}

/// Load the built-in default face
pub fn load_bundled() -> Result<IconFont, FontError> {
    let definitions = egui::FontDefinitions::default();
    let data = definitions
        .families
        .get(&egui::FontFamily::Proportional)
        .and_then(|names| names.first())
        .and_then(|name| definitions.font_data.get(name))
        .ok_or(FontError::MissingBundledFont)?;

    let mut db = fontdb::Database::new();
    db.load_font_data(data.font.to_vec());

    IconFont::from_database(db, FontOrigin::Bundled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_font_is_available() {
        let font = load_bundled().unwrap();
        assert_eq!(font.origin, FontOrigin::Bundled);
        assert!(!font.family.is_empty());
        assert_eq!(font.db.len(), 1);
    }

    #[test]
    fn test_missing_preferred_font_is_read_error() {
        let err = load_preferred(Path::new("/nonexistent/font/Bold.ttf")).unwrap_err();
        assert!(matches!(err, FontError::Read { .. }));
    }

    #[test]
    fn test_garbage_preferred_font_has_no_faces() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a font").unwrap();

        let err = load_preferred(file.path()).unwrap_err();
        assert!(matches!(err, FontError::NoFaces(_)));
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(FontOrigin::Bundled.to_string(), "bundled");
        assert_eq!(
            FontOrigin::Preferred(PathBuf::from("/fonts/a.ttf")).to_string(),
            "/fonts/a.ttf"
        );
    }
}
