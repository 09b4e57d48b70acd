//! Generation of expanded prompt documents

use std::fmt;
use std::fs;
use std::path::PathBuf;

use eyre::{Context, Result};
use tracing::{debug, info, warn};

use crate::expand::{Unresolved, expand};
use crate::layout::regular_files;
use crate::naming::stripped_variant_name;
use crate::strip::{ARCHITECTURE_TAG, strip_blocks};
use crate::template::TemplateSource;
use crate::{Layout, PromptgenError};

/// Which of the two artifacts of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Expanded as written
    Full,
    /// Architecture blocks removed, then expanded
    Stripped,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Full => write!(f, "full"),
            Variant::Stripped => write!(f, "stripped"),
        }
    }
}

/// One artifact written by a generation run
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Source document file name
    pub document: String,
    pub variant: Variant,
    pub path: PathBuf,
    /// Placeholders replaced with template contents
    pub resolved: usize,
    pub unresolved: Vec<Unresolved>,
}

/// Summary of a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Number of documents read
    pub documents: usize,
    pub files: Vec<GeneratedFile>,
    /// Documents with an `<architecture>` tag that was never closed
    pub unmatched_blocks: Vec<String>,
}

impl GenerateReport {
    /// Total placeholders replaced across all artifacts
    pub fn resolved_count(&self) -> usize {
        self.files.iter().map(|f| f.resolved).sum()
    }

    /// Total placeholders left in place across all artifacts
    pub fn unresolved_count(&self) -> usize {
        self.files.iter().map(|f| f.unresolved.len()).sum()
    }
}

/// Expands every prompt document into its full and stripped artifacts
pub struct Generator<'a, S: TemplateSource> {
    layout: &'a Layout,
    source: &'a S,
}

impl<'a, S: TemplateSource> Generator<'a, S> {
    pub fn new(layout: &'a Layout, source: &'a S) -> Self {
        Self { layout, source }
    }

    /// Generate both artifacts for every document.
    ///
    /// Fails if the prompt directory is missing or on any I/O error. Missing
    /// templates and unclosed blocks are logged and do not stop the run.
    pub fn run(&self) -> Result<GenerateReport> {
        let prompt_dir = self.layout.prompt_dir();
        if !prompt_dir.exists() {
            return Err(PromptgenError::PromptDirMissing(prompt_dir).into());
        }

        let generated_dir = self.layout.generated_dir();
        fs::create_dir_all(&generated_dir).context(format!(
            "Failed to create generated directory: {}",
            generated_dir.display()
        ))?;
        debug!(?prompt_dir, ?generated_dir, "Generator::run: directories ready");

        let mut report = GenerateReport::default();

        for (name, path) in regular_files(&prompt_dir)? {
            let raw = fs::read_to_string(&path).context(format!("Failed to read prompt: {}", path.display()))?;
            report.documents += 1;

            let full = self.write(&name, Variant::Full, &name, &raw)?;
            report.files.push(full);

            let stripped = strip_blocks(&raw, ARCHITECTURE_TAG);
            if stripped.unmatched {
                warn!("Unclosed <{}> tag in {}, left in place", ARCHITECTURE_TAG, path.display());
                report.unmatched_blocks.push(name.clone());
            }
            debug!(document = %name, removed = stripped.removed, "Generator::run: stripped blocks");

            let stripped_name = stripped_variant_name(&name);
            let file = self.write(&name, Variant::Stripped, &stripped_name, &stripped.text)?;
            report.files.push(file);
        }

        info!(
            documents = report.documents,
            files = report.files.len(),
            unresolved = report.unresolved_count(),
            "Generation complete"
        );
        Ok(report)
    }

    fn write(&self, document: &str, variant: Variant, file_name: &str, text: &str) -> Result<GeneratedFile> {
        let expansion = expand(text, self.source)?;
        let path = self.layout.generated_dir().join(file_name);
        fs::write(&path, &expansion.text).context(format!("Failed to write: {}", path.display()))?;
        info!(%document, %variant, "Wrote {}", path.display());

        Ok(GeneratedFile {
            document: document.to_string(),
            variant,
            path,
            resolved: expansion.resolved,
            unresolved: expansion.unresolved,
        })
    }
}
