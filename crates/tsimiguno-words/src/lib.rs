//! tsimiguno word handling
//!
//! The in-memory side of word evaluation: the batch of candidates currently
//! being scored, the rating scale the scores come from, and the katakana
//! display transliteration. Scores train the server-side preference model;
//! nothing here is persisted locally.

mod board;
mod candidate;
mod kana;
mod rating;

pub use board::CandidateBoard;
pub use candidate::Candidate;
pub use kana::hira_to_kata;
pub use rating::Rating;
