use std::{fmt::Write as _, fs::File, io::Write as _, path::PathBuf};

use log::info;

use crate::extract::Extraction;

use super::{Render, RenderError};

/// writes `<label>.xyz` next to the input: the atom count, a provenance
/// comment, then one row per atom
#[derive(Debug, Clone, Copy, Default)]
pub struct Xyz;

impl Render for Xyz {
    fn render(&self, res: &Extraction) -> Result<Option<PathBuf>, RenderError> {
        let Some(geom) = &res.geom else {
            info!("no coordinates to process for {}, skipping xyz", res.label);
            return Ok(None);
        };
        let mut body = String::new();
        writeln!(body, "{}", geom.len()).unwrap();
        writeln!(body, "Coordinates extracted from {}", res.label).unwrap();
        for atom in geom {
            writeln!(body, "{atom}").unwrap();
        }
        let path = res.path.with_extension("xyz");
        let mut file = File::create(&path).map_err(|source| RenderError {
            path: path.clone(),
            source,
        })?;
        write!(file, "{body}").map_err(|source| RenderError {
            path: path.clone(),
            source,
        })?;
        Ok(Some(path))
    }
}
