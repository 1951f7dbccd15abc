//! Candidate board
//!
//! Holds the batch of candidates currently shown for scoring. The board is
//! replaced wholesale whenever the server returns a new batch; the changed
//! flag tracks whether any score differs from the freshly-loaded state,
//! which is what makes an evaluation worth submitting.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::candidate::Candidate;
use crate::rating::Rating;

pub struct CandidateBoard {
    candidates: Arc<RwLock<Vec<Candidate>>>,
    changed: Arc<RwLock<bool>>,
}

impl CandidateBoard {
    pub fn new() -> Self {
        Self {
            candidates: Arc::new(RwLock::new(Vec::new())),
            changed: Arc::new(RwLock::new(false)),
        }
    }

    /// Install a fresh batch. All scores reset to neutral and the board is
    /// no longer considered changed.
    pub fn replace(&self, words: Vec<String>) {
        let batch: Vec<Candidate> = words.into_iter().map(Candidate::new).collect();

        tracing::debug!(count = batch.len(), "Installed candidate batch");

        *self.candidates.write() = batch;
        *self.changed.write() = false;
    }

    /// Score one candidate. Returns false if `word` is not on the board.
    pub fn rate(&self, word: &str, rating: Rating) -> bool {
        let mut candidates = self.candidates.write();

        match candidates.iter_mut().find(|c| c.word == word) {
            Some(candidate) => {
                candidate.rate(rating);
                *self.changed.write() = true;
                true
            }
            None => {
                tracing::debug!(word = %word, "Rated word is not on the board");
                false
            }
        }
    }

    /// Word→score map for the evaluation endpoint
    pub fn evaluation(&self) -> HashMap<String, f64> {
        self.candidates
            .read()
            .iter()
            .map(|c| (c.word.clone(), c.score))
            .collect()
    }

    pub fn candidates(&self) -> Vec<Candidate> {
        self.candidates.read().clone()
    }

    /// Whether any score was touched since the last `replace`
    pub fn is_changed(&self) -> bool {
        *self.changed.read()
    }

    pub fn len(&self) -> usize {
        self.candidates.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.read().is_empty()
    }

    pub fn clear(&self) {
        *self.candidates.write() = Vec::new();
        *self.changed.write() = false;
    }
}

impl Default for CandidateBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CandidateBoard {
    fn clone(&self) -> Self {
        Self {
            candidates: Arc::clone(&self.candidates),
            changed: Arc::clone(&self.changed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(words: &[&str]) -> CandidateBoard {
        let board = CandidateBoard::new();
        board.replace(words.iter().map(|w| w.to_string()).collect());
        board
    }

    #[test]
    fn test_replace_resets_scores_and_flag() {
        let board = board_with(&["あか", "みどり"]);
        assert!(board.rate("あか", Rating::Favorite));
        assert!(board.is_changed());

        board.replace(vec!["あお".to_string()]);

        assert!(!board.is_changed());
        assert_eq!(board.len(), 1);
        assert_eq!(board.candidates()[0].word, "あお");
        assert_eq!(board.candidates()[0].score, 0.0);
    }

    #[test]
    fn test_rate_unknown_word() {
        let board = board_with(&["あか"]);
        assert!(!board.rate("しろ", Rating::Liked));
        assert!(!board.is_changed());
    }

    #[test]
    fn test_evaluation_payload() {
        let board = board_with(&["あか", "みどり", "あお"]);
        board.rate("あか", Rating::Favorite);
        board.rate("みどり", Rating::Disliked);

        let payload = board.evaluation();
        assert_eq!(payload.len(), 3);
        assert_eq!(payload["あか"], 1.0);
        assert_eq!(payload["みどり"], -0.7);
        assert_eq!(payload["あお"], 0.0);
    }

    #[test]
    fn test_clear() {
        let board = board_with(&["あか"]);
        board.rate("あか", Rating::Liked);
        board.clear();

        assert!(board.is_empty());
        assert!(!board.is_changed());
    }

    #[test]
    fn test_clone_shares_state() {
        let board = board_with(&["あか"]);
        let clone = board.clone();

        clone.rate("あか", Rating::Favorite);
        assert!(board.is_changed());
        assert_eq!(board.candidates()[0].score, 1.0);
    }
}
