//! turn one [`Extraction`] into the output formats

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::extract::Extraction;

pub mod deck;
pub mod si;
pub mod xyz;

#[cfg(test)]
mod tests;

pub use deck::{Deck, DeckParams};
pub use si::SupInfo;
pub use xyz::Xyz;

/// one output format fed by an [`Extraction`]
pub trait Render {
    /// write this format's output for `res`, returning the path written.
    /// an extraction without a geometry is skipped with a notice and
    /// `Ok(None)`; nothing is created or modified for it
    fn render(&self, res: &Extraction) -> Result<Option<PathBuf>, RenderError>;
}

/// an output file could not be created or written
#[derive(Debug, Error)]
#[error("cannot write {}: {source}", .path.display())]
pub struct RenderError {
    pub path: PathBuf,
    pub source: io::Error,
}
