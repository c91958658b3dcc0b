//! Watchlist persistence.
//!
//! The watchlist is a flat JSON object mapping exchange scrip codes to ticker
//! symbols:
//!
//! ```json
//! {
//!    "500209": "INFY",
//!    "532540": "TCS"
//! }
//! ```
//!
//! It is read at startup and rewritten only when a new symbol list is
//! supplied.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{DigestError, FileSystemResultExt, Result};

/// Mapping from scrip code to ticker symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist(BTreeMap<String, String>);

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a watchlist file.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::WatchlistNotFound` if the file does not exist
    /// Returns `DigestError::Serialization` if it is not a JSON object of strings
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DigestError::WatchlistNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path).fs_context(path)?;
        let watchlist: Self = serde_json::from_slice(&bytes)?;
        debug!("Loaded {} symbols from {}", watchlist.len(), path.display());
        Ok(watchlist)
    }

    /// Write the watchlist as JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).fs_context(parent)?;
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"   ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;

        fs::write(path, buf).fs_context(path)?;
        debug!("Saved {} symbols to {}", self.len(), path.display());
        Ok(())
    }

    /// Returns the default watchlist path following XDG Base Directory
    /// specification.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("scripwatch")
            .place_data_file("watchlist.json")
            .map_err(|e| DigestError::XdgDirectory(e.to_string()))
    }

    pub fn insert(&mut self, code: impl Into<String>, symbol: impl Into<String>) {
        self.0.insert(code.into(), symbol.into());
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    /// Ticker symbol for a scrip code.
    pub fn symbol(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(c, s)| (c.as_str(), s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Watchlist {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Read a newline-delimited list of ticker symbols.
///
/// Lines are trimmed and blank lines skipped.
///
/// # Errors
///
/// Returns `DigestError::FileSystem` if the file cannot be read
pub fn read_symbol_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).fs_context(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
