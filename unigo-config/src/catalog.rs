use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ExpandPath;

/// Icon catalog configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Directory scanned for `.svg` icons. Not recursive.
    ///
    /// Relative paths are resolved against the working directory,
    /// `~` and environment variables are expanded.
    ///
    /// Default: `content/svgs`
    #[serde(default = "default_svg_dir")]
    pub svg_dir: PathBuf,
    /// JSON manifest listing Nerd Font glyphs as `[{ "name": ..., "codepoint": ... }]`.
    ///
    /// Default: `content/nerd-fonts/icons.json`
    #[serde(default = "default_nerd_font_manifest")]
    pub nerd_font_manifest: PathBuf,
}

fn default_svg_dir() -> PathBuf {
    PathBuf::from("content/svgs")
}

fn default_nerd_font_manifest() -> PathBuf {
    PathBuf::from("content/nerd-fonts/icons.json")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            svg_dir: default_svg_dir(),
            nerd_font_manifest: default_nerd_font_manifest(),
        }
    }
}

impl CatalogConfig {
    /// The svg directory with `~` and environment variables expanded.
    pub fn svg_dir(&self) -> PathBuf {
        self.svg_dir.expand()
    }

    /// The glyph manifest path with `~` and environment variables expanded.
    pub fn nerd_font_manifest(&self) -> PathBuf {
        self.nerd_font_manifest.expand()
    }
}
