//! PromptGen error types

use std::path::PathBuf;
use thiserror::Error;

/// Fatal precondition failures that stop a run before any output is written
#[derive(Debug, Error)]
pub enum PromptgenError {
    #[error("Prompt directory does not exist: {}", .0.display())]
    PromptDirMissing(PathBuf),

    #[error("Generated prompt directory does not exist: {}", .0.display())]
    GeneratedDirMissing(PathBuf),
}
