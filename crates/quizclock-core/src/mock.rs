//! Scripted answer source for testing.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;

use crate::answers::AnswerSource;

/// What a [`ScriptedAnswers`] does once its script runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exhausted {
    /// Report end of input.
    EndOfInput,
    /// Never produce another line, like a user who stopped typing.
    Hang,
}

/// An answer source that replays a fixed script.
///
/// Each line can carry a delay that elapses before it is delivered, measured
/// with `tokio::time` so paused-clock tests stay deterministic.
pub struct ScriptedAnswers {
    script: VecDeque<(Duration, String)>,
    exhausted: Exhausted,
    delivered: usize,
}

impl ScriptedAnswers {
    /// Create a script whose lines arrive immediately.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: lines
                .into_iter()
                .map(|l| (Duration::ZERO, l.into()))
                .collect(),
            exhausted: Exhausted::EndOfInput,
            delivered: 0,
        }
    }

    /// Append a line that arrives `delay` after it is requested.
    pub fn then_after(mut self, delay: Duration, line: impl Into<String>) -> Self {
        self.script.push_back((delay, line.into()));
        self
    }

    /// Stop producing input once the script runs out.
    pub fn then_hang(mut self) -> Self {
        self.exhausted = Exhausted::Hang;
        self
    }

    /// Number of lines handed out so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        let Some((delay, line)) = self.script.pop_front() else {
            return match self.exhausted {
                Exhausted::EndOfInput => Ok(None),
                Exhausted::Hang => std::future::pending().await,
            };
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.delivered += 1;
        Ok(Some(line))
    }
}
