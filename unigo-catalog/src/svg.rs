use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// File extension, compared case-insensitively, that marks a file as an svg icon.
pub const SVG_EXTENSION: &str = "svg";

/// An svg icon loaded from a single file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SvgIcon {
    /// File name without the `.svg` extension.
    pub name: String,
    /// Unmodified file contents.
    pub content: String,
    /// Directory joined with the file name.
    pub path: PathBuf,
}

/// Lists every `.svg` file directly inside `dir`.
///
/// A missing directory is an empty icon library and yields `Ok(vec![])`.
/// Files that can't be read are logged and skipped; only failing to read
/// the directory itself is an error. Result order follows the directory
/// listing and is not sorted.
pub fn list_svg_icons<P: AsRef<Path>>(dir: P) -> Result<Vec<SvgIcon>> {
    let dir = dir.as_ref();

    let span = tracing::debug_span!("catalog::list_svg_icons", ?dir);
    let _enter = span.enter();

    let read_dir_err = |source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("SVG directory doesn't exist, no icons to list");
            return Ok(Vec::new());
        }
        Err(e) => return Err(read_dir_err(e)),
    };

    let mut icons = Vec::new();

    for entry in entries {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();

        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            if has_svg_extension(file_name.as_encoded_bytes()) {
                tracing::warn!("Skipping SVG file with a non UTF-8 name: {path:?}");
            }
            continue;
        };

        if !has_svg_extension(file_name.as_bytes()) {
            continue;
        }

        match is_regular_file(&entry) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                tracing::warn!("Error reading SVG file {}: {e}", path.display());
                continue;
            }
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Error reading SVG file {}: {e}", path.display());
                continue;
            }
        };

        icons.push(SvgIcon {
            name: icon_name(file_name).to_owned(),
            content,
            path,
        });
    }

    tracing::debug!(count = icons.len(), "listed SVG icons");

    Ok(icons)
}

/// Whether a file name ends in `.svg`, ignoring ASCII case.
pub fn has_svg_extension(file_name: &[u8]) -> bool {
    let Some(split) = file_name.len().checked_sub(SVG_EXTENSION.len() + 1) else {
        return false;
    };

    let (dot, ext) = file_name[split..].split_at(1);
    dot == b"." && ext.eq_ignore_ascii_case(SVG_EXTENSION.as_bytes())
}

/// Strips the extension from a file name already known to end in `.svg`,
/// keeping the whole name when nothing would be left.
fn icon_name(file_name: &str) -> &str {
    let stem = &file_name[..file_name.len() - SVG_EXTENSION.len() - 1];
    if stem.is_empty() {
        file_name
    } else {
        stem
    }
}

/// Whether the entry is, or links to, a regular file.
fn is_regular_file(entry: &fs::DirEntry) -> io::Result<bool> {
    let file_type = entry.file_type()?;
    if file_type.is_symlink() {
        fs::metadata(entry.path()).map(|m| m.is_file())
    } else {
        Ok(file_type.is_file())
    }
}
