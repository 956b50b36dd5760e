//! The default `quizclock` command: run a timed quiz.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use quizclock_core::answers::StdinAnswers;
use quizclock_core::engine::{QuizSession, SessionConfig};
use quizclock_core::parser;
use quizclock_core::shuffle::{shuffle_quiz, ShuffleMode};

use crate::config::load_config_from;

pub async fn execute(
    csv: Option<PathBuf>,
    time: Option<u64>,
    shuffle: bool,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    // Command-line flags win over the config file
    let csv = csv.unwrap_or(config.csv);
    let time_limit = Duration::from_secs(time.unwrap_or(config.time_limit_secs));
    let mode = ShuffleMode::from_options(shuffle || config.shuffle, seed.or(config.seed));

    let mut quiz = parser::load_quiz(&csv)?;
    for w in parser::validate_quiz(&quiz) {
        tracing::warn!("{}: {}", csv.display(), w.message);
    }

    shuffle_quiz(&mut quiz, mode);

    let session = QuizSession::new(quiz, SessionConfig::default().with_time_limit(time_limit));
    let mut answers = StdinAnswers::spawn()?;
    let mut stdout = std::io::stdout();

    let outcome = session.run(&mut answers, &mut stdout).await?;
    tracing::info!("session {}: {}/{}", outcome.ended_by, outcome.score, outcome.total);

    Ok(())
}
