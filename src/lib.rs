//! extract the last geometry from Gaussian log files and re-emit it as an
//! xyz file, a fresh input deck, and an appended LaTeX-style summary.
//!
//! the interesting part is [`extract::extract`]; everything else is
//! templating around its result

pub mod atom;
pub mod discover;
pub mod elements;
pub mod extract;
pub mod render;
