//! quizclock-core — Quiz loading, timed sessions, and scoring.
//!
//! This crate defines the quiz data model, the CSV loader, the shuffler,
//! and the session machinery that races the question loop against a
//! wall-clock deadline.

pub mod answers;
pub mod engine;
pub mod error;
pub mod mock;
pub mod model;
pub mod parser;
pub mod report;
pub mod score;
pub mod shuffle;

pub use engine::{DeadlineMonitor, QuizRunner, QuizSession};
pub use error::LoadError;
pub use model::{Entry, Quiz, SessionOutcome, Termination};
