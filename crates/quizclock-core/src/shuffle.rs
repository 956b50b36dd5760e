//! Presentation-order shuffling.
//!
//! Applied once, before the session's start gate. The entries themselves are
//! never touched, only their order.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::model::Quiz;

/// How to order a quiz before presenting it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShuffleMode {
    /// Keep file order.
    #[default]
    Off,
    /// Uniformly random order seeded from the OS.
    Random,
    /// Uniformly random order from a fixed seed.
    Seeded(u64),
}

impl ShuffleMode {
    /// Build a mode from the CLI/config pair.
    pub fn from_options(enabled: bool, seed: Option<u64>) -> Self {
        match (enabled, seed) {
            (false, _) => ShuffleMode::Off,
            (true, None) => ShuffleMode::Random,
            (true, Some(seed)) => ShuffleMode::Seeded(seed),
        }
    }
}

/// Reorder `quiz` according to `mode`.
pub fn shuffle_quiz(quiz: &mut Quiz, mode: ShuffleMode) {
    match mode {
        ShuffleMode::Off => {}
        ShuffleMode::Random => {
            quiz.shuffle(&mut rand::rng());
            tracing::debug!("shuffled {} entries", quiz.len());
        }
        ShuffleMode::Seeded(seed) => {
            quiz.shuffle(&mut StdRng::seed_from_u64(seed));
            tracing::debug!("shuffled {} entries with seed {seed}", quiz.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;

    fn numbered(n: usize) -> Quiz {
        (0..n)
            .map(|i| Entry::new(format!("{i}+0"), i.to_string()))
            .collect::<Vec<_>>()
            .into()
    }

    fn sorted(quiz: &Quiz) -> Vec<Entry> {
        let mut entries = quiz.entries().to_vec();
        entries.sort_by(|a, b| a.question.cmp(&b.question));
        entries
    }

    #[test]
    fn off_keeps_file_order() {
        let mut quiz = numbered(20);
        shuffle_quiz(&mut quiz, ShuffleMode::Off);
        assert_eq!(quiz, numbered(20));
    }

    #[test]
    fn random_preserves_entries() {
        let mut quiz = numbered(50);
        shuffle_quiz(&mut quiz, ShuffleMode::Random);
        assert_eq!(quiz.len(), 50);
        assert_eq!(sorted(&quiz), sorted(&numbered(50)));
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut a = numbered(50);
        let mut b = numbered(50);
        shuffle_quiz(&mut a, ShuffleMode::Seeded(7));
        shuffle_quiz(&mut b, ShuffleMode::Seeded(7));
        assert_eq!(a, b);
        assert_ne!(a, numbered(50));
        assert_eq!(sorted(&a), sorted(&numbered(50)));
    }

    #[test]
    fn empty_quiz_shuffles() {
        let mut quiz = Quiz::default();
        shuffle_quiz(&mut quiz, ShuffleMode::Random);
        assert!(quiz.is_empty());
    }

    #[test]
    fn mode_from_options() {
        assert_eq!(ShuffleMode::from_options(false, Some(3)), ShuffleMode::Off);
        assert_eq!(ShuffleMode::from_options(true, None), ShuffleMode::Random);
        assert_eq!(
            ShuffleMode::from_options(true, Some(3)),
            ShuffleMode::Seeded(3)
        );
    }
}
