//! PromptGen - prompt template expansion and publishing
//!
//! Expands `{{{{reference}}}}` placeholders in prompt documents with the
//! contents of template files, writes a full and an architecture-stripped
//! variant of every document, and publishes the results as command files.
//!
//! # Layout
//!
//! ```text
//! {tool_root}/
//! └── template/                 # template collection
//! {work_root}/
//! ├── prompt/                   # input documents
//! │   └── impl.md
//! └── generated_prompt/         # generation output
//!     ├── impl.md
//!     └── impl_WITHOUT_ARCHITECTURE.md
//! {destination}/                # e.g. ~/.claude/commands
//! ├── impl.md
//! └── impl_wo.md
//! ```
//!
//! # Example
//!
//! ```ignore
//! use promptgen::{DirTemplateSource, Generator, Layout, Publisher};
//!
//! let layout = Layout::new("tool", "work", "commands");
//! let source = DirTemplateSource::new(&layout);
//! let report = Generator::new(&layout, &source).run()?;
//! let published = Publisher::new(&layout).run()?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
mod expand;
mod generate;
mod layout;
pub mod naming;
mod publish;
mod strip;
mod template;

pub use error::PromptgenError;
pub use expand::{Expansion, Placeholder, Unresolved, expand, scan_placeholders};
pub use generate::{GenerateReport, GeneratedFile, Generator, Variant};
pub use layout::Layout;
pub use publish::{Collision, PublishReport, PublishedFile, Publisher};
pub use strip::{ARCHITECTURE_TAG, Stripped, strip_blocks};
pub use template::{DirTemplateSource, MapTemplateSource, Resolution, TemplateSource};

/// Opening marker of a placeholder
pub const PLACEHOLDER_OPEN: &str = "{{{{";

/// Closing marker of a placeholder
pub const PLACEHOLDER_CLOSE: &str = "}}}}";

/// References starting with this prefix resolve from the tool root
pub const TEMPLATE_NAMESPACE: &str = "template/";

/// Template collection directory, relative to the tool root
pub const TEMPLATE_DIR: &str = "template";

/// Input documents directory, relative to the working root
pub const PROMPT_DIR: &str = "prompt";

/// Generation output directory, relative to the working root
pub const GENERATED_DIR: &str = "generated_prompt";
