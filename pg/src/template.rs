//! Template resolution
//!
//! Maps a placeholder reference to the contents of a template file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use tracing::{debug, warn};

use crate::{Layout, TEMPLATE_NAMESPACE};

/// Outcome of resolving a single reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Verbatim template contents
    Found(String),
    /// No regular file at the resolved path
    Missing(PathBuf),
}

/// Something that can turn a placeholder reference into template text
pub trait TemplateSource {
    /// Resolve `reference`.
    ///
    /// A missing template is not an error; it is reported as
    /// [`Resolution::Missing`] so expansion can leave the placeholder alone.
    fn resolve(&self, reference: &str) -> Result<Resolution>;
}

/// Resolves references against the template collection on disk
#[derive(Debug, Clone)]
pub struct DirTemplateSource {
    tool_root: PathBuf,
    template_dir: PathBuf,
}

impl DirTemplateSource {
    pub fn new(layout: &Layout) -> Self {
        Self {
            tool_root: layout.tool_root().to_path_buf(),
            template_dir: layout.template_dir(),
        }
    }

    /// Path a reference points at.
    ///
    /// `template/...` references are already rooted at the tool root; bare
    /// references live in the template directory.
    pub fn path_for(&self, reference: &str) -> PathBuf {
        let relative = reference.trim_start_matches('/');
        if reference.starts_with(TEMPLATE_NAMESPACE) {
            self.tool_root.join(relative)
        } else {
            self.template_dir.join(relative)
        }
    }
}

impl TemplateSource for DirTemplateSource {
    fn resolve(&self, reference: &str) -> Result<Resolution> {
        let path = self.path_for(reference);
        debug!(%reference, ?path, "DirTemplateSource::resolve: called");

        if !is_regular_file(&path) {
            warn!("Template file not found: {}", path.display());
            return Ok(Resolution::Missing(path));
        }

        let content =
            fs::read_to_string(&path).context(format!("Failed to read template: {}", path.display()))?;
        Ok(Resolution::Found(content))
    }
}

/// Follows symlinks; anything that cannot be stat'ed counts as absent.
fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// In-memory templates keyed by reference
#[derive(Debug, Clone, Default)]
pub struct MapTemplateSource {
    templates: HashMap<String, String>,
}

impl MapTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, reference: impl Into<String>, content: impl Into<String>) -> Self {
        self.templates.insert(reference.into(), content.into());
        self
    }
}

impl TemplateSource for MapTemplateSource {
    fn resolve(&self, reference: &str) -> Result<Resolution> {
        match self.templates.get(reference) {
            Some(content) => Ok(Resolution::Found(content.clone())),
            None => {
                warn!("Template not found: {}", reference);
                Ok(Resolution::Missing(PathBuf::from(reference)))
            }
        }
    }
}
