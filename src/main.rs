use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use gcoord::{
    discover,
    elements::ElementMap,
    extract::{extract, CoordMode},
    render::{Deck, Render, SupInfo, Xyz},
};
use log::{error, warn};

/// extract the last geometry from every Gaussian log under a directory and
/// rewrite it as an xyz file, a new input deck, and a LaTeX-ready summary
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// directory containing the log files
    workdir: PathBuf,

    /// extension of the log files to look for
    #[arg(
        short = 'f',
        long = "ext",
        value_name = "EXT",
        default_value = "log"
    )]
    ext: String,

    /// read x, y, and z from their own table columns instead of repeating
    /// the X column
    #[arg(long)]
    split_coords: bool,

    /// JSON element table, like {"1": "H"}, replacing the built-in one
    #[arg(long, value_name = "FILE")]
    elements: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let cli = Cli::parse();
    if !cli.workdir.is_dir() {
        bail!("{} is not a directory", cli.workdir.display());
    }
    let elements = match &cli.elements {
        Some(path) => ElementMap::load(path)?,
        None => ElementMap::default(),
    };
    let mode = if cli.split_coords {
        CoordMode::Split
    } else {
        CoordMode::Shared
    };

    let files = discover::log_files(&cli.workdir, &cli.ext)
        .context("constructing the search pattern")?;
    if files.is_empty() {
        warn!(
            "no .{} files under {}",
            cli.ext.trim_start_matches('.'),
            cli.workdir.display()
        );
    }

    let deck = Deck::default();
    let sup = SupInfo::new(&cli.workdir);
    let renderers: [&dyn Render; 3] = [&Xyz, &deck, &sup];
    for file in &files {
        // one bad log should not sink the rest of the directory
        let res = match extract(file, &elements, mode) {
            Ok(res) => res,
            Err(e) => {
                error!("skipping {}: {e}", file.display());
                continue;
            }
        };
        for renderer in renderers {
            match renderer.render(&res) {
                Ok(Some(path)) => println!("wrote {}", path.display()),
                Ok(None) => {}
                Err(e) => error!("{e}"),
            }
        }
    }
    Ok(())
}
