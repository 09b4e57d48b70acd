//! Filesystem layout shared by both pipeline stages

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};
use tracing::debug;

use crate::{GENERATED_DIR, PROMPT_DIR, TEMPLATE_DIR};

/// Directories used by a generation and publish run.
///
/// The tool root holds the template collection; the working root holds the
/// input documents and the generation output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    tool_root: PathBuf,
    work_root: PathBuf,
    destination: PathBuf,
}

impl Layout {
    pub fn new(tool_root: impl Into<PathBuf>, work_root: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            tool_root: tool_root.into(),
            work_root: work_root.into(),
            destination: destination.into(),
        }
    }

    pub fn tool_root(&self) -> &Path {
        &self.tool_root
    }

    pub fn work_root(&self) -> &Path {
        &self.work_root
    }

    /// Template collection: `{tool_root}/template`
    pub fn template_dir(&self) -> PathBuf {
        self.tool_root.join(TEMPLATE_DIR)
    }

    /// Input documents: `{work_root}/prompt`
    pub fn prompt_dir(&self) -> PathBuf {
        self.work_root.join(PROMPT_DIR)
    }

    /// Generation output: `{work_root}/generated_prompt`
    pub fn generated_dir(&self) -> PathBuf {
        self.work_root.join(GENERATED_DIR)
    }

    /// Publishing destination
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// Regular files directly inside `dir` (symlinks followed), sorted by name.
///
/// Subdirectories and other non-file entries are skipped.
pub(crate) fn regular_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir).context(format!("Failed to read directory: {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        let metadata = fs::metadata(&path).context(format!("Failed to stat: {}", path.display()))?;
        if !metadata.is_file() {
            debug!(?path, "regular_files: skipping non-file entry");
            continue;
        }
        let name = entry
            .file_name()
            .into_string()
            .map_err(|name| eyre!("File name is not valid UTF-8: {:?}", name))?;
        files.push((name, path));
    }

    files.sort();
    Ok(files)
}
