use std::fs;
use std::path::Path;

use tracing::debug;

use crate::aggregate::FaqDataset;
use crate::error::{FaqError, Result};

/// Serialize `data` as pretty JSON at `path`, creating parent directories
/// and replacing any existing file.
pub fn write_dataset(data: &FaqDataset, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| FaqError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json).map_err(|source| FaqError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), entries = data.len(), "wrote dataset");
    Ok(())
}
