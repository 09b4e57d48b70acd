//! Publishing of generated artifacts to the destination store

use std::collections::HashMap;
use std::fs;
use std::path::{self, PathBuf};

use eyre::{Context, Result};
use tracing::{debug, info, warn};

use crate::layout::regular_files;
use crate::naming::published_name;
use crate::{Layout, PromptgenError};

/// One file copied into the destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Two generated files that normalize to the same published name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub published: String,
    /// Generated file whose copy was overwritten
    pub overwritten: String,
    /// Generated file that won
    pub winner: String,
}

/// Summary of a publish run
#[derive(Debug, Clone, Default)]
pub struct PublishReport {
    pub files: Vec<PublishedFile>,
    pub collisions: Vec<Collision>,
}

/// Copies the generated directory into the destination under normalized names
pub struct Publisher<'a> {
    layout: &'a Layout,
}

impl<'a> Publisher<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self { layout }
    }

    /// Copy every generated file, overwriting existing destination files.
    ///
    /// Files are processed in name order, so when two names collide the
    /// later one wins.
    pub fn run(&self) -> Result<PublishReport> {
        let generated_dir = self.layout.generated_dir();
        if !generated_dir.exists() {
            return Err(PromptgenError::GeneratedDirMissing(generated_dir).into());
        }

        let destination = self.layout.destination();
        fs::create_dir_all(destination)
            .context(format!("Failed to create destination: {}", destination.display()))?;
        debug!(?generated_dir, ?destination, "Publisher::run: directories ready");

        let mut report = PublishReport::default();
        let mut claimed: HashMap<String, String> = HashMap::new();

        for (name, source) in regular_files(&generated_dir)? {
            let published = published_name(&name);
            if let Some(previous) = claimed.insert(published.clone(), name.clone()) {
                warn!("{} and {} both publish as {}, keeping {}", previous, name, published, name);
                report.collisions.push(Collision {
                    published: published.clone(),
                    overwritten: previous,
                    winner: name.clone(),
                });
            }

            let target = destination.join(&published);
            fs::copy(&source, &target).context(format!(
                "Failed to copy {} to {}",
                source.display(),
                target.display()
            ))?;

            let source = path::absolute(&source)?;
            let target = path::absolute(&target)?;
            info!("Copied {} -> {}", source.display(), target.display());
            report.files.push(PublishedFile {
                source,
                destination: target,
            });
        }

        info!(
            files = report.files.len(),
            collisions = report.collisions.len(),
            "Publish complete"
        );
        Ok(report)
    }
}
