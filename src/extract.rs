//! the core extractor: pull the last geometry and its metadata out of one
//! Gaussian log file

use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{atom::Atom, elements::ElementMap};


static MARKERS: OnceLock<[Regex; 3]> = OnceLock::new();

/// the three line markers recognized in a log file, in scan order:
/// atom count, charge line, geometry block
fn markers() -> &'static [Regex; 3] {
    MARKERS.get_or_init(|| {
        [
            Regex::new("NAtoms").unwrap(),
            Regex::new("Charge =").unwrap(),
            Regex::new("Standard orientation:").unwrap(),
        ]
    })
}

/// split-field positions on each marker line. the log's token layouts are
/// fixed, so these indices are the whole parsing grammar
mod field {
    /// `NAtoms=  <n> ...`: the count follows the marker token
    pub const NATOMS: usize = 1;
    /// `Charge =  <c> Multiplicity = <m>`
    pub const CHARGE: usize = 2;
    pub const MULT: usize = 5;
    /// geometry row: `<center> <atomic number> <type> <x> <y> <z>`
    pub const NUMBER: usize = 1;
    pub const X: usize = 3;
    pub const Y: usize = 4;
    pub const Z: usize = 5;
}

/// lines between the geometry marker and the first data row: a separator,
/// two column-label lines, and another separator
const GEOM_HEADER: usize = 4;

/// which table columns supply the coordinates of a geometry row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordMode {
    /// x, y, and z all repeat the X column. kept as the default so
    /// existing output stays reproducible
    #[default]
    Shared,
    /// x, y, and z each read their own column
    Split,
}

/// everything pulled from one log file, ready for the renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// the log file this came from. renderers derive their output paths
    /// from it
    pub path: PathBuf,
    /// the filename stem, used to label provenance lines and outputs
    pub label: String,
    pub charge: isize,
    pub multiplicity: usize,
    /// the last geometry in the file, or `None` when the log had nothing
    /// usable. when present, its length equals the declared atom count
    pub geom: Option<Vec<Atom>>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// the file is missing or unreadable
    #[error("cannot read {}: {reason}", .path.display())]
    InputNotFound { path: PathBuf, reason: String },

    /// the path has no UTF-8 filename stem to label outputs with
    #[error("cannot derive a label from {}", .path.display())]
    BadFilename { path: PathBuf },

    /// no parseable `NAtoms` declaration
    #[error("no atom count (NAtoms) found in {0}")]
    MissingAtomCount(String),

    /// no parseable charge and multiplicity line
    #[error("no charge line (Charge =) in {0}, assuming charge 0 and multiplicity 1")]
    MissingCharge(String),

    /// no geometry block, or the last one is cut off or too short
    #[error("no usable geometry block (Standard orientation:) in {0}")]
    NoGeometryBlock(String),

    /// an atomic number with no entry in the element table. a hard error
    /// so no output is ever written with a guessed symbol
    #[error("atomic number {number} in {file} is not in the element table")]
    UnknownElement { file: String, number: String },
}

/// extract the label, charge and multiplicity, and last geometry from the
/// log file at `path`.
///
/// missing pieces degrade instead of failing: a missing charge line falls
/// back to charge 0 and multiplicity 1, and a missing atom count or
/// geometry block yields `geom: None` so the renderers can skip the file.
/// only conditions that make the file unusable, or that would corrupt its
/// output, come back as `Err`
pub fn extract(
    path: &Path,
    elements: &ElementMap,
    mode: CoordMode,
) -> Result<Extraction, ExtractError> {
    let contents =
        read_to_string(path).map_err(|e| ExtractError::InputNotFound {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let label = match path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => {
            return Err(ExtractError::BadFilename {
                path: path.to_path_buf(),
            })
        }
    };
    let lines: Vec<&str> = contents.lines().collect();

    let natoms = match atom_count(&lines, &label) {
        Ok(n) => n,
        Err(e) => {
            // without a count we can't size the table, so there is no
            // point looking for the charge either
            warn!("{e}");
            return Ok(Extraction {
                path: path.to_path_buf(),
                label,
                charge: 0,
                multiplicity: 1,
                geom: None,
            });
        }
    };

    let (charge, multiplicity) = match charge_mult(&lines) {
        Some(got) => got,
        None => {
            warn!("{}", ExtractError::MissingCharge(label.clone()));
            (0, 1)
        }
    };

    let geom = match last_geometry(&lines, natoms, elements, mode, &label) {
        Ok(atoms) => Some(atoms),
        Err(e @ ExtractError::NoGeometryBlock(_)) => {
            warn!("{e}");
            None
        }
        Err(e) => return Err(e),
    };

    Ok(Extraction {
        path: path.to_path_buf(),
        label,
        charge,
        multiplicity,
        geom,
    })
}

/// the declared atom count from the first `NAtoms` line
fn atom_count(lines: &[&str], label: &str) -> Result<usize, ExtractError> {
    let [natoms, _, _] = markers();
    lines
        .iter()
        .find(|line| natoms.is_match(line))
        .and_then(|line| line.split_whitespace().nth(field::NATOMS))
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ExtractError::MissingAtomCount(label.to_string()))
}

/// charge and multiplicity from the first `Charge =` line, or `None` when
/// the line is absent or malformed
fn charge_mult(lines: &[&str]) -> Option<(isize, usize)> {
    let [_, charge, _] = markers();
    let sp: Vec<&str> = lines
        .iter()
        .find(|line| charge.is_match(line))?
        .split_whitespace()
        .collect();
    let charge = sp.get(field::CHARGE)?.parse().ok()?;
    let mult = sp.get(field::MULT)?.parse().ok()?;
    Some((charge, mult))
}

/// parse the last geometry block in the file into exactly `natoms` atoms.
/// earlier blocks are intermediate steps and are ignored
fn last_geometry(
    lines: &[&str],
    natoms: usize,
    elements: &ElementMap,
    mode: CoordMode,
    label: &str,
) -> Result<Vec<Atom>, ExtractError> {
    let [_, _, geom] = markers();
    let start = lines
        .iter()
        .rposition(|line| geom.is_match(line))
        .map(|idx| idx + 1 + GEOM_HEADER)
        .ok_or_else(|| ExtractError::NoGeometryBlock(label.to_string()))?;
    let rows = start
        .checked_add(natoms)
        .and_then(|end| lines.get(start..end))
        .ok_or_else(|| ExtractError::NoGeometryBlock(label.to_string()))?;

    let (fx, fy, fz) = match mode {
        CoordMode::Shared => (field::X, field::X, field::X),
        CoordMode::Split => (field::X, field::Y, field::Z),
    };
    let mut atoms = Vec::with_capacity(natoms);
    for row in rows {
        let sp: Vec<&str> = row.split_whitespace().collect();
        let (Some(number), Some(x), Some(y), Some(z)) = (
            sp.get(field::NUMBER).copied(),
            sp.get(fx).copied(),
            sp.get(fy).copied(),
            sp.get(fz).copied(),
        ) else {
            // a row too short to split this far means the count ran into
            // the table footer
            return Err(ExtractError::NoGeometryBlock(label.to_string()));
        };
        let symbol = number
            .parse()
            .ok()
            .and_then(|n: usize| elements.get(n))
            .ok_or_else(|| ExtractError::UnknownElement {
                file: label.to_string(),
                number: number.to_string(),
            })?;
        atoms.push(Atom::new(symbol, x, y, z));
    }
    Ok(atoms)
}
