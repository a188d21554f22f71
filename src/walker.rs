use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

const MARKDOWN_EXT: &str = ".md";

/// Lazily yield every markdown file under `root`.
///
/// A missing root yields nothing. Entries a directory listing fails on are
/// skipped. Siblings come out sorted by file name so repeated runs see the
/// same order.
pub fn markdown_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                None
            }
        })
        // `path().is_dir()` follows links: symlinked dirs are left out, broken links stay in.
        .filter(|e| !e.path().is_dir())
        .filter(|e| e.file_name().to_string_lossy().ends_with(MARKDOWN_EXT))
        .map(|e| e.into_path())
}
