use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single glyph of a Nerd Font.
///
/// Fields missing from a manifest record are left empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct NerdFontIcon {
    pub name: String,
    /// Hex encoded unicode code point, e.g. `f015`.
    pub codepoint: String,
}

/// Loads Nerd Font glyphs from a JSON manifest of `{ "name", "codepoint" }` records.
///
/// Entries are returned as written, duplicates included. A missing manifest
/// means no glyph catalog is configured and yields `Ok(vec![])`, while a manifest
/// that isn't a JSON array of such records is an error.
pub fn list_nerd_font_icons<P: AsRef<Path>>(manifest: P) -> Result<Vec<NerdFontIcon>> {
    let manifest = manifest.as_ref();

    let span = tracing::debug_span!("catalog::list_nerd_font_icons", ?manifest);
    let _enter = span.enter();

    let json = match std::fs::read(manifest) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("Nerd Font manifest doesn't exist, no glyphs to list");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(Error::ReadManifest {
                path: manifest.to_path_buf(),
                source,
            })
        }
    };

    let icons: Vec<NerdFontIcon> =
        serde_json::from_slice(&json).map_err(|source| Error::ParseManifest {
            path: manifest.to_path_buf(),
            source,
        })?;

    tracing::debug!(count = icons.len(), "listed Nerd Font glyphs");

    Ok(icons)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn manifest(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.json");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn parses_single_glyph() {
        let (_dir, path) = manifest(r#"[{"name":"home","codepoint":"f015"}]"#);

        let icons = list_nerd_font_icons(&path).unwrap();

        assert_eq!(
            icons,
            vec![NerdFontIcon {
                name: "home".into(),
                codepoint: "f015".into(),
            }]
        );
    }

    #[test]
    fn keeps_duplicates_and_order() {
        let (_dir, path) = manifest(
            r#"[
                {"name": "home", "codepoint": "f015"},
                {"name": "git", "codepoint": "e702"},
                {"name": "home", "codepoint": "f015"}
            ]"#,
        );

        let names: Vec<_> = list_nerd_font_icons(&path)
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();

        assert_eq!(names, ["home", "git", "home"]);
    }

    #[test]
    fn ignores_extra_fields() {
        let (_dir, path) = manifest(r#"[{"name":"home","codepoint":"f015","set":"fa"}]"#);
        assert_eq!(list_nerd_font_icons(&path).unwrap().len(), 1);
    }

    #[test]
    fn missing_fields_pass_through_as_empty() {
        let (_dir, path) = manifest(r#"[{"name":"home"},{"name":"git","codepoint":"e702"},{}]"#);

        let icons = list_nerd_font_icons(&path).unwrap();

        assert_eq!(
            icons,
            vec![
                NerdFontIcon {
                    name: "home".into(),
                    codepoint: String::new(),
                },
                NerdFontIcon {
                    name: "git".into(),
                    codepoint: "e702".into(),
                },
                NerdFontIcon::default(),
            ]
        );
    }

    #[test]
    fn empty_array_is_empty() {
        let (_dir, path) = manifest("[]");
        assert!(list_nerd_font_icons(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_manifest_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let icons = list_nerd_font_icons(dir.path().join("icons.json")).unwrap();
        assert!(icons.is_empty());
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        for contents in [
            r#"[{"name":"home","codepoint":"f0"#,
            r#"{"name":"home","codepoint":"f015"}"#,
            "null",
            r#"[{"name":"home","codepoint":7}]"#,
            "",
        ] {
            let (_dir, path) = manifest(contents);

            let err = list_nerd_font_icons(&path).unwrap_err();

            assert!(matches!(err, Error::ParseManifest { .. }), "{contents:?}");
            assert_eq!(err.path(), path);
            assert!(err.to_string().contains("icons.json"));
        }
    }

    #[test]
    fn directory_as_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = list_nerd_font_icons(dir.path()).unwrap_err();

        assert!(matches!(err, Error::ReadManifest { .. }));
    }

    #[test]
    fn repeated_calls_are_equal() {
        let (_dir, path) = manifest(r#"[{"name":"a","codepoint":"e000"},{"name":"b","codepoint":"e001"}]"#);

        assert_eq!(
            list_nerd_font_icons(&path).unwrap(),
            list_nerd_font_icons(&path).unwrap()
        );
    }
}
