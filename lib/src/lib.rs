//! Solves Wordle puzzles by guessing the word whose distinct letters are the most common among
//! the words still possible, and pruning those words with the feedback for each guess.
//!
//! ```
//! use letter_freq_wordle::*;
//!
//! let lexicon = Lexicon::scored(&["alert", "arise", "crane", "slate", "least"]).unwrap();
//! let result = play_game("crane", &lexicon, SolverConfig::default()).unwrap();
//!
//! assert!(result.is_success());
//! assert_eq!(result.turns().last().unwrap().feedback.to_string(), "ggggg");
//! ```

mod benchmark;
#[cfg(feature = "serde")]
mod cache;
mod data;
mod engine;
mod restrictions;
mod results;

pub use benchmark::*;
#[cfg(feature = "serde")]
pub use cache::*;
pub use data::*;
pub use engine::*;
pub use results::*;

/// Building blocks used by the solver, exposed for testing and custom guessers.
pub mod details {
    pub use crate::restrictions::*;
}
