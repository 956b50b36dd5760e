//! Quiz loading error types.
//!
//! Loading is the only fallible step that ends the program before a session
//! starts, so its failures get a dedicated enum the CLI can report verbatim.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a quiz table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The quiz file could not be opened.
    #[error("failed to open quiz file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid delimited text.
    #[error("malformed quiz table")]
    Malformed(#[from] csv::Error),

    /// A data record does not have exactly a question and an answer.
    #[error("record {record} has {found} field(s), expected question and answer")]
    FieldCount { record: usize, found: usize },
}
