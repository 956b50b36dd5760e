//! Core data model types for quizclock.
//!
//! An [`Entry`] is one question/answer pair, a [`Quiz`] is the ordered list
//! of entries presented in a session, and a [`SessionOutcome`] is the
//! single result every session produces.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

/// A single question and its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Entry {
    /// Text shown to the user.
    pub question: String,
    /// The exact answer that scores a point.
    pub answer: String,
}

impl Entry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Check a user's response against the stored answer.
    ///
    /// Surrounding whitespace on the response is ignored and the comparison
    /// is case-sensitive.
    pub fn is_correct(&self, response: &str) -> bool {
        response.trim() == self.answer
    }
}

/// An ordered sequence of entries, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quiz {
    entries: Vec<Entry>,
}

impl Quiz {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Permute the presentation order in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.entries.shuffle(rng);
    }

}

impl From<Vec<Entry>> for Quiz {
    fn from(entries: Vec<Entry>) -> Self {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for &'a Quiz {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Which path ended a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every entry was presented and answered.
    Completed,
    /// The time limit elapsed first.
    DeadlineExpired,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Completed => write!(f, "completed"),
            Termination::DeadlineExpired => write!(f, "deadline expired"),
        }
    }
}

/// Final result of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Number of correct answers.
    pub score: usize,
    /// Number of entries in the quiz.
    pub total: usize,
    /// How the session ended.
    pub ended_by: Termination,
}

impl SessionOutcome {
    pub fn timed_out(&self) -> bool {
        self.ended_by == Termination::DeadlineExpired
    }
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You scored {} / {}", self.score, self.total)
    }
}
