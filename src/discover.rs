use std::path::{Path, PathBuf};

use glob::{glob, PatternError};

/// every file under `dir`, recursively, with extension `ext`, in sorted
/// order. a leading dot on `ext` is tolerated
pub fn log_files(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, PatternError> {
    let pattern =
        format!("{}/**/*.{}", dir.display(), ext.trim_start_matches('.'));
    let mut files: Vec<PathBuf> =
        glob(&pattern)?.filter_map(Result::ok).collect();
    files.sort();
    Ok(files)
}
