use std::{
    collections::HashMap,
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// atomic number to element symbol lookup.
///
/// the built-in table is deliberately small: H, C, N, O, and S cover the
/// systems this tool usually sees. anything else comes in through
/// [`ElementMap::load`], so an unmapped element fails loudly instead of
/// guessing a symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementMap(HashMap<usize, String>);

impl Default for ElementMap {
    fn default() -> Self {
        [(1, "H"), (6, "C"), (7, "N"), (8, "O"), (16, "S")]
            .into_iter()
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(usize, S)> for ElementMap {
    fn from_iter<T: IntoIterator<Item = (usize, S)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(n, s)| (n, s.into())).collect())
    }
}

impl ElementMap {
    /// the symbol for atomic number `z`, if the table has one
    pub fn get(&self, z: usize) -> Option<&str> {
        self.0.get(&z).map(String::as_str)
    }

    /// load a table from a JSON object mapping atomic numbers to symbols,
    /// like `{"1": "H", "26": "Fe"}`. this replaces the built-in table
    /// rather than extending it
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let contents = read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| TableError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("cannot read element table {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("malformed element table {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
