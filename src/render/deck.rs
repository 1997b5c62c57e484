use std::{fmt::Write as _, fs::File, io::Write as _, path::PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::extract::Extraction;

use super::{Render, RenderError};

/// knobs for the generated deck header. these are not yet exposed on the
/// command line, so callers get the values every deck has always used
/// unless they build their own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckParams {
    /// %memory, in GB
    pub mem: usize,
    /// %nprocshared
    pub proc: usize,
    /// route section method keyword
    pub method: String,
    pub title: String,
}

impl Default for DeckParams {
    fn default() -> Self {
        Self {
            mem: 12,
            proc: 8,
            method: "pm6".to_string(),
            title: "Title".to_string(),
        }
    }
}

/// writes `<label>.gjf` next to the input: a fresh input deck seeded with
/// the extracted charge, multiplicity, and geometry
#[derive(Debug, Clone, Default)]
pub struct Deck {
    pub params: DeckParams,
}

impl Deck {
    /// the link 0, route, title, and charge sections above the coordinates
    pub(crate) fn header(&self, res: &Extraction) -> String {
        let DeckParams {
            mem,
            proc,
            method,
            title,
        } = &self.params;
        let mut head = String::new();
        writeln!(head, "%memory={mem}GB").unwrap();
        writeln!(head, "%nprocshared={proc}").unwrap();
        writeln!(head, "%chk={}.chk", res.label).unwrap();
        writeln!(head, "# {method}").unwrap();
        writeln!(head).unwrap();
        writeln!(head, "{title}. From {}", res.label).unwrap();
        writeln!(head).unwrap();
        writeln!(head, "{} {}", res.charge, res.multiplicity).unwrap();
        head
    }
}

impl Render for Deck {
    fn render(&self, res: &Extraction) -> Result<Option<PathBuf>, RenderError> {
        let Some(geom) = &res.geom else {
            info!("no coordinates to process for {}, skipping gjf", res.label);
            return Ok(None);
        };
        let mut body = self.header(res);
        for atom in geom {
            writeln!(body, "{atom}").unwrap();
        }
        let path = res.path.with_extension("gjf");
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
