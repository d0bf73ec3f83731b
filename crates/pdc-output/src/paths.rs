//! Output file naming.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Suffix of the header-less upload file.
pub const FOR_UPLOAD_SUFFIX: &str = "_for_upload";

/// Locations of the two output tables for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// `<name>.csv`
    pub full: PathBuf,
    /// `<name>_for_upload.csv`
    pub clean: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: &Path, name: &str) -> Self {
        Self {
            full: dir.join(format!("{name}.csv")),
            clean: dir.join(format!("{name}{FOR_UPLOAD_SUFFIX}.csv")),
        }
    }
}

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_base_name() {
        let paths = OutputPaths::new(Path::new("out"), "clinic_a");
        assert_eq!(paths.full, Path::new("out/clinic_a.csv"));
        assert_eq!(paths.clean, Path::new("out/clinic_a_for_upload.csv"));
    }
}
