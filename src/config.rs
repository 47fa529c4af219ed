use std::path::{Path, PathBuf};

use crate::error::{EnrichError, Result};

/// Paths for a single run, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    pub sniff_path: PathBuf,
    pub host_info_path: PathBuf,
    pub output_path: PathBuf,
}

impl TransformConfig {
    pub fn new(
        sniff_path: impl Into<PathBuf>,
        host_info_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            sniff_path: sniff_path.into(),
            host_info_path: host_info_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Rejects any path that points at a directory. Missing files are left
    /// for the open/create calls to report.
    pub fn validate(&self) -> Result<()> {
        for path in [&self.sniff_path, &self.host_info_path, &self.output_path] {
            reject_directory(path)?;
        }
        Ok(())
    }
}

fn reject_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(EnrichError::IsDirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
