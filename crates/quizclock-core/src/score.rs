//! The shared score counter.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Count of correct answers, written by the runner and read by the deadline
/// monitor.
#[derive(Debug, Default)]
pub struct Scoreboard {
    correct: AtomicUsize,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one correct answer and return the new score.
    pub fn record_correct(&self) -> usize {
        self.correct.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Current score.
    pub fn current(&self) -> usize {
        self.correct.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Scoreboard::new().current(), 0);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let board = Arc::new(Scoreboard::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let board = Arc::clone(&board);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        board.record_correct();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(board.current(), 4000);
    }
}
