//! Timed quiz session orchestrator.
//!
//! After the start gate, the question loop ([`QuizRunner`]) and the timer
//! ([`DeadlineMonitor`]) run side by side. Whichever finishes first produces
//! the session's only [`SessionOutcome`]; the other is dropped, which for the
//! runner means abandoning any read it is waiting on.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::answers::AnswerSource;
use crate::model::{Quiz, SessionOutcome, Termination};
use crate::report::write_outcome;
use crate::score::Scoreboard;

/// Default time limit for a session.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);

/// Configuration for a quiz session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Wall-clock budget, counted from the moment the start gate opens.
    pub time_limit: Duration,
    /// Text shown before waiting for the user to start.
    pub gate_prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            gate_prompt: "Are you ready? Press enter...".to_string(),
        }
    }
}

impl SessionConfig {
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }
}

/// Presents entries in order and tallies correct answers.
pub struct QuizRunner<'a> {
    quiz: &'a Quiz,
    score: Arc<Scoreboard>,
}

impl<'a> QuizRunner<'a> {
    pub fn new(quiz: &'a Quiz, score: Arc<Scoreboard>) -> Self {
        Self { quiz, score }
    }

    /// Ask every question once, in order.
    ///
    /// Reads have no per-question timeout. End of input counts as a blank
    /// answer for each remaining question.
    pub async fn run<W: Write + ?Sized>(
        &self,
        answers: &mut dyn AnswerSource,
        out: &mut W,
    ) -> Result<SessionOutcome> {
        for (index, entry) in self.quiz.iter().enumerate() {
            write!(out, "What is {}? ", entry.question).context("failed to write question")?;
            out.flush().context("failed to write question")?;

            let response = answers.next_line().await?.unwrap_or_default();
            if entry.is_correct(&response) {
                let score = self.score.record_correct();
                tracing::debug!("question {} correct, score now {score}", index + 1);
            } else {
                tracing::debug!("question {} incorrect", index + 1);
            }
        }

        let outcome = SessionOutcome {
            score: self.score.current(),
            total: self.quiz.len(),
            ended_by: Termination::Completed,
        };
        tracing::info!("all {} questions answered", outcome.total);
        Ok(outcome)
    }
}

/// Single-shot timer that snapshots the score when it fires.
pub struct DeadlineMonitor {
    duration: Duration,
    score: Arc<Scoreboard>,
    total: usize,
}

impl DeadlineMonitor {
    pub fn new(duration: Duration, score: Arc<Scoreboard>, total: usize) -> Self {
        Self {
            duration,
            score,
            total,
        }
    }

    /// Wait out the time limit, then report whatever has been scored.
    pub async fn expire(self) -> SessionOutcome {
        tokio::time::sleep(self.duration).await;
        let score = self.score.current();
        tracing::info!(
            "time limit of {}s reached with {score}/{} correct",
            self.duration.as_secs(),
            self.total
        );
        SessionOutcome {
            score,
            total: self.total,
            ended_by: Termination::DeadlineExpired,
        }
    }
}

/// One timed run over a quiz.
pub struct QuizSession {
    quiz: Quiz,
    config: SessionConfig,
}

impl QuizSession {
    pub fn new(quiz: Quiz, config: SessionConfig) -> Self {
        Self { quiz, config }
    }

    /// Run the session to completion or expiry and report the score.
    ///
    /// The score line is written exactly once, by this method, whichever
    /// side of the race finished first.
    pub async fn run<W: Write + ?Sized>(
        &self,
        answers: &mut dyn AnswerSource,
        out: &mut W,
    ) -> Result<SessionOutcome> {
        write!(out, "{}", self.config.gate_prompt).context("failed to write prompt")?;
        out.flush().context("failed to write prompt")?;
        answers.next_line().await?;

        let score = Arc::new(Scoreboard::new());
        let runner = QuizRunner::new(&self.quiz, Arc::clone(&score));
        let monitor = DeadlineMonitor::new(self.config.time_limit, score, self.quiz.len());
        tracing::info!(
            "session started: {} questions, {}s limit",
            self.quiz.len(),
            self.config.time_limit.as_secs()
        );

        // The runner is polled first so an already-finished quiz beats a
        // zero-length deadline.
        let outcome = tokio::select! {
            biased;
            finished = runner.run(&mut *answers, &mut *out) => finished?,
            expired = monitor.expire() => expired,
        };

        // The deadline can fire while a prompt is still waiting on its line.
        if outcome.timed_out() {
            writeln!(out).context("failed to write score")?;
        }
        write_outcome(&outcome, out).context("failed to write score")?;
        Ok(outcome)
    }
}
