//! Candidate rating scale
//!
//! The four levels the UI offers, with the numeric scores the server's
//! preference model is trained on:
//!
//! ```text
//! Favorite   1.0   liked, added to the favorites list
//! Liked      0.7   liked, not added to the list
//! Neutral    0.0   no opinion (the default for a fresh candidate)
//! Disliked  -0.7   disliked
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Favorite,
    Liked,
    Neutral,
    Disliked,
}

impl Rating {
    /// Numeric score sent to the evaluation endpoint
    pub fn score(self) -> f64 {
        match self {
            Rating::Favorite => 1.0,
            Rating::Liked => 0.7,
            Rating::Neutral => 0.0,
            Rating::Disliked => -0.7,
        }
    }

    /// Inverse of [`score`](Self::score); `None` for values outside the
    /// scale.
    pub fn from_score(score: f64) -> Option<Self> {
        match score {
            s if s == 1.0 => Some(Rating::Favorite),
            s if s == 0.7 => Some(Rating::Liked),
            s if s == 0.0 => Some(Rating::Neutral),
            s if s == -0.7 => Some(Rating::Disliked),
            _ => None,
        }
    }

    /// Whether this rating puts the word on the server-side favorites list
    pub fn is_favorite(self) -> bool {
        matches!(self, Rating::Favorite)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Favorite => "favorite",
            Rating::Liked => "liked",
            Rating::Neutral => "neutral",
            Rating::Disliked => "disliked",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_match_scale() {
        assert_eq!(Rating::Favorite.score(), 1.0);
        assert_eq!(Rating::Liked.score(), 0.7);
        assert_eq!(Rating::Neutral.score(), 0.0);
        assert_eq!(Rating::Disliked.score(), -0.7);
    }

    #[test]
    fn test_from_score_roundtrip() {
        for rating in [
            Rating::Favorite,
            Rating::Liked,
            Rating::Neutral,
            Rating::Disliked,
        ] {
            assert_eq!(Rating::from_score(rating.score()), Some(rating));
        }

        assert_eq!(Rating::from_score(0.5), None);
    }

    #[test]
    fn test_only_favorite_is_listed() {
        assert!(Rating::Favorite.is_favorite());
        assert!(!Rating::Liked.is_favorite());
        assert!(!Rating::Neutral.is_favorite());
        assert!(!Rating::Disliked.is_favorite());
    }
}
