//! Candidate data structure

use serde::{Deserialize, Serialize};

use crate::rating::Rating;

/// A generated word waiting for the user's score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub word: String,
    pub score: f64,
}

impl Candidate {
    /// Fresh candidates start at the neutral score
    pub fn new(word: String) -> Self {
        Self {
            word,
            score: Rating::Neutral.score(),
        }
    }

    pub fn rate(&mut self, rating: Rating) {
        self.score = rating.score();
    }

    /// The rating this score corresponds to, if it is on the scale
    pub fn rating(&self) -> Option<Rating> {
        Rating::from_score(self.score)
    }
}
