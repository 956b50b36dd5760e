//! CSV quiz loader.
//!
//! Loads a quiz from a `question,answer` table whose first record is a
//! header, and validates the result.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::LoadError;
use crate::model::{Entry, Quiz};

/// Load a quiz table from a file.
pub fn load_quiz(path: &Path) -> Result<Quiz, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let quiz = load_quiz_from_reader(file)?;
    tracing::debug!("loaded {} entries from {}", quiz.len(), path.display());
    Ok(quiz)
}

/// Load a quiz table from any reader (useful for testing).
///
/// The first record is discarded as a header. Every remaining record must
/// have exactly two fields; anything else fails the whole load.
pub fn load_quiz_from_reader<R: Read>(reader: R) -> Result<Quiz, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.len() != 2 {
            return Err(LoadError::FieldCount {
                record: index + 1,
                found: record.len(),
            });
        }
        let entry: Entry = record.deserialize(None)?;
        entries.push(entry);
    }

    Ok(Quiz::new(entries))
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question the warning is about (if applicable).
    pub question: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz for entries that cannot be answered sensibly.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen = std::collections::HashSet::new();
    for entry in quiz {
        if !seen.insert(entry.question.as_str()) {
            warnings.push(ValidationWarning {
                question: Some(entry.question.clone()),
                message: format!("duplicate question: {}", entry.question),
            });
        }
    }

    for (index, entry) in quiz.iter().enumerate() {
        if entry.question.trim().is_empty() {
            warnings.push(ValidationWarning {
                question: None,
                message: format!("question {} is blank", index + 1),
            });
        }
    }

    // Only an empty line matches; padded answers can't be typed back.
    for entry in quiz {
        if entry.answer.is_empty() {
            warnings.push(ValidationWarning {
                question: Some(entry.question.clone()),
                message: "answer is blank, only an empty line will match".into(),
            });
        } else if entry.answer.trim() != entry.answer {
            warnings.push(ValidationWarning {
                question: Some(entry.question.clone()),
                message: "answer has surrounding whitespace and can never be matched".into(),
            });
        }
    }

    warnings
}
