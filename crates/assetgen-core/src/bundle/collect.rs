//! Directory scan that feeds a [`Bundle`].

use std::path::{Component, Path};

use tracing::debug;
use walkdir::WalkDir;

use super::Bundle;
use crate::config::BundleConfig;
use crate::error::{Error, Result};

impl Bundle {
    /// Recursively collect every suffix-matching file under the configured root.
    ///
    /// Fails on the first unreadable directory or non-UTF-8 file.
    pub fn collect(config: &BundleConfig) -> Result<Self> {
        config.validate()?;
        let root = config.root_directory.as_path();
        if !root.is_dir() {
            return Err(Error::MissingRoot(root.to_path_buf()));
        }

        let mut bundle = Bundle::default();
        for entry in WalkDir::new(root).min_depth(1) {
            let entry = entry?;
            let path = entry.path();
            // Symlinks are not followed during the walk; one that points at a
            // directory is skipped like a directory.
            if entry.file_type().is_dir() || (entry.path_is_symlink() && path.is_dir()) {
                continue;
            }
            let matches = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(&config.file_suffix));
            if !matches {
                continue;
            }

            let key = relative_key(root, path)?;
            let content = read_text(path, config.normalize_newlines)?;
            debug!(key = %key, bytes = content.len(), "bundled file");
            bundle.insert(key, content);
        }
        Ok(bundle)
    }
}

/// Path of `path` relative to `root`, components joined with `/`.
pub(crate) fn relative_key(root: &Path, path: &Path) -> Result<String> {
    // Walk entries always start with the root.
    let relative = path.strip_prefix(root).unwrap_or(path);

    let mut parts = Vec::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            let part = part
                .to_str()
                .ok_or_else(|| Error::NonUtf8Path(path.to_path_buf()))?;
            parts.push(part);
        }
    }
    Ok(parts.join("/"))
}

/// Read a file as strict UTF-8.
fn read_text(path: &Path, normalize_newlines: bool) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(if normalize_newlines {
        normalize_line_endings(&text)
    } else {
        text
    })
}

/// Translate `\r\n` and lone `\r` to `\n`.
pub(crate) fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
