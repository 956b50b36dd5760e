//! Sources of typed answers.
//!
//! The session reads one line for the start gate and then one line per
//! question. [`StdinAnswers`] is the interactive implementation; tests use
//! [`crate::mock::ScriptedAnswers`].

use std::io::BufRead;

use async_trait::async_trait;
use tokio::sync::mpsc;

/// Trait for anything that can hand the session lines of user input.
#[async_trait]
pub trait AnswerSource: Send {
    /// Wait for the next line.
    ///
    /// Returns `Ok(None)` once input is exhausted. The returned line has its
    /// line terminator removed but is otherwise untrimmed.
    async fn next_line(&mut self) -> anyhow::Result<Option<String>>;
}

/// Reads standard input on a dedicated thread.
///
/// A blocking read of a terminal cannot be interrupted, so the reader thread
/// is detached and its lines are forwarded over a channel. Dropping a
/// pending [`AnswerSource::next_line`] future abandons the read without
/// waiting for the user; the thread exits with the process.
pub struct StdinAnswers {
    lines: mpsc::Receiver<std::io::Result<String>>,
}

impl StdinAnswers {
    pub fn spawn() -> anyhow::Result<Self> {
        let (tx, rx) = mpsc::channel(16);
        std::thread::Builder::new()
            .name("quizclock-stdin".into())
            .spawn(move || {
                let stdin = std::io::stdin();
                let mut handle = stdin.lock();
                loop {
                    let mut line = String::new();
                    let sent = match handle.read_line(&mut line) {
                        Ok(0) => break,
                        Ok(_) => tx.blocking_send(Ok(line)),
                        Err(e) => tx.blocking_send(Err(e)),
                    };
                    if sent.is_err() {
                        // Receiver dropped; nobody is listening any more.
                        break;
                    }
                }
            })?;
        Ok(Self { lines: rx })
    }
}

#[async_trait]
impl AnswerSource for StdinAnswers {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        match self.lines.recv().await {
            Some(Ok(line)) => Ok(Some(strip_line_ending(line))),
            Some(Err(e)) => Err(anyhow::Error::new(e).context("failed to read from stdin")),
            None => Ok(None),
        }
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
