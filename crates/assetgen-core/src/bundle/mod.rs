//! Bundlers — collect a directory of text files into one browser script.
//!
//! The emitted file assigns a JSON object literal to a global:
//!
//! ```text
//! window.filters = {
//!   "A/one.txt": "hello",
//!   "B/two.txt": "world"
//! };
//! ```
//!
//! Keys are sorted, so identical inputs always produce identical scripts.

mod collect;

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::config::BundleConfig;
use crate::error::{Error, Result};

/// Relative file path (`/`-separated) to file text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    entries: BTreeMap<String, String>,
}

impl Bundle {
    /// Add an entry, returning the previous content for that key.
    pub fn insert(&mut self, key: impl Into<String>, content: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), content.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as `<variable_name> = <pretty JSON>;`.
    pub fn render(&self, variable_name: &str) -> Result<String> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        Ok(format!("{variable_name} = {json};"))
    }

    /// Write the rendered script to `path`, replacing any existing file.
    pub fn save(&self, path: &Path, variable_name: &str) -> Result<()> {
        let script = self.render(variable_name)?;
        std::fs::write(path, script).map_err(|e| Error::io(path, e))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Bundle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Collect `config.root_directory` and write the script to `config.output_path`.
///
/// Nothing is written if collection fails.
pub fn bundle_directory(config: &BundleConfig) -> Result<Bundle> {
    let bundle = Bundle::collect(config)?;
    bundle.save(&config.output_path, &config.variable_name)?;
    info!(
        "Wrote {} ({} files from {} as {})",
        config.output_path.display(),
        bundle.len(),
        config.root_directory.display(),
        config.variable_name
    );
    Ok(bundle)
}
