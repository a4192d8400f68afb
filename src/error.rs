//! Error handling for the template expander.
//!
//! One variant per failure class: loading a template from disk,
//! rendering it against an arity context, and writing an output file.
//! None of these are recovered internally; the first error aborts the
//! run and already-written files stay in place.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for expander operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for expander operations
#[derive(Debug, Error)]
pub enum Error {
    /// Template file missing, unreadable, or rejected by the engine's parser
    #[error("template load error: {path}: {source}")]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Engine could not resolve the template against the render context
    #[error("template syntax error in '{template}': {source}")]
    TemplateSyntax {
        template: String,
        #[source]
        source: tera::Error,
    },

    /// Destination path invalid or unwritable
    #[error("write error: {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a load error from an I/O failure on the template file
    pub fn load_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::TemplateLoad {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Create a load error from an engine parse failure
    pub fn load_parse(path: impl Into<PathBuf>, source: tera::Error) -> Self {
        Self::TemplateLoad {
            path: path.into(),
            source: Box::new(source),
        }
    }
}
