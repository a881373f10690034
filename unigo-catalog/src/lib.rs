//! Loads the local icon catalog: svg icons from a directory
//! and Nerd Font glyphs from a JSON manifest.
//!
//! Every call reads from disk again, nothing is cached.

use std::path::{Path, PathBuf};

use unigo_config::CatalogConfig;

pub mod error;
pub mod nerd_font;
pub mod svg;

pub use self::error::*;
pub use self::nerd_font::*;
pub use self::svg::*;

/// The two icon sources of a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    svg_dir: PathBuf,
    nerd_font_manifest: PathBuf,
}

impl Catalog {
    pub fn new(svg_dir: impl Into<PathBuf>, nerd_font_manifest: impl Into<PathBuf>) -> Self {
        Self {
            svg_dir: svg_dir.into(),
            nerd_font_manifest: nerd_font_manifest.into(),
        }
    }

    pub fn svg_dir(&self) -> &Path {
        &self.svg_dir
    }

    pub fn nerd_font_manifest(&self) -> &Path {
        &self.nerd_font_manifest
    }

    /// See [`list_svg_icons`].
    pub fn svg_icons(&self) -> Result<Vec<SvgIcon>> {
        list_svg_icons(&self.svg_dir)
    }

    /// See [`list_nerd_font_icons`].
    pub fn nerd_font_icons(&self) -> Result<Vec<NerdFontIcon>> {
        list_nerd_font_icons(&self.nerd_font_manifest)
    }
}

impl From<&CatalogConfig> for Catalog {
    fn from(config: &CatalogConfig) -> Self {
        Self::new(config.svg_dir(), config.nerd_font_manifest())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_config() {
        let config = CatalogConfig {
            svg_dir: PathBuf::from("icons/svg"),
            nerd_font_manifest: PathBuf::from("icons/glyphs.json"),
        };

        let catalog = Catalog::from(&config);

        assert_eq!(catalog.svg_dir(), Path::new("icons/svg"));
        assert_eq!(catalog.nerd_font_manifest(), Path::new("icons/glyphs.json"));
    }

    #[test]
    fn sources_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("star.svg"), "<svg/>").unwrap();
        std::fs::write(
            dir.path().join("glyphs.json"),
            r#"[{"name":"star","codepoint":"f005"}]"#,
        )
        .unwrap();

        let catalog = Catalog::new(dir.path(), dir.path().join("glyphs.json"));
        assert_eq!(catalog.svg_icons().unwrap().len(), 1);
        assert_eq!(catalog.nerd_font_icons().unwrap().len(), 1);

        let broken = Catalog::new(dir.path().join("glyphs.json"), dir.path().join("missing.json"));
        assert!(broken.svg_icons().is_err());
        assert!(broken.nerd_font_icons().unwrap().is_empty());
    }
}
