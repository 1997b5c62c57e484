use std::{
    fmt::Write as _,
    fs::OpenOptions,
    io::Write as _,
    path::{Path, PathBuf},
};

use log::info;

use crate::{atom::Atom, extract::Extraction};

use super::{Render, RenderError};

/// name of the shared summary file
pub const SI_FILE: &str = "all_geom_coord.txt";

/// appends one LaTeX-style block per input to a shared summary file, ready
/// to paste into a supporting information table.
///
/// the summary is rooted in the directory given to [`SupInfo::new`]; the
/// command line passes its work directory, not the directory the process
/// was started from, so a batch keeps its outputs together even when run
/// from elsewhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupInfo {
    /// the accumulator. appended to across runs, never truncated
    pub path: PathBuf,
}

impl SupInfo {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(SI_FILE),
        }
    }
}

impl Render for SupInfo {
    fn render(&self, res: &Extraction) -> Result<Option<PathBuf>, RenderError> {
        let Some(geom) = &res.geom else {
            info!(
                "no coordinates to process for {}, skipping summary",
                res.label
            );
            return Ok(None);
        };
        // `~` holds the columns apart and `\\` breaks the line in LaTeX
        let mut block = String::new();
        writeln!(block, r"{} \\", geom.len()).unwrap();
        writeln!(block, r"System \\").unwrap();
        for Atom { element, x, y, z } in geom {
            writeln!(block, r"{element} ~ {x} ~ {y} ~ {z} \\").unwrap();
        }
        writeln!(block, r"\\").unwrap();
        writeln!(block).unwrap();
        // the whole block goes down in a single write
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| RenderError {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(block.as_bytes())
            .map_err(|source| RenderError {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(self.path.clone()))
    }
}
