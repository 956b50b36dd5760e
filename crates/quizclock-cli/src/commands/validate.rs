//! The `quizclock validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizclock_core::parser;

use crate::config::load_config_from;

pub fn execute(csv: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let csv = csv.unwrap_or(config.csv);

    let quiz = parser::load_quiz(&csv)?;
    println!("Quiz: {} ({} questions)", csv.display(), quiz.len());

    let warnings = parser::validate_quiz(&quiz);
    for w in &warnings {
        let prefix = w
            .question
            .as_ref()
            .map(|q| format!("  [{q}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Quiz file valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
