use crate::data::LetterSet;
use crate::data::WordEntry;
use crate::results::*;

/// A letter along with its location in the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocatedLetter {
    pub letter: u8,
    /// The zero-based location (i.e. index) for this letter in a word.
    pub location: usize,
}

impl LocatedLetter {
    pub fn new(letter: u8, location: usize) -> LocatedLetter {
        LocatedLetter { letter, location }
    }
}

/// The restrictions imposed on candidate words by a single guess and its feedback.
///
/// A word that violates any of them is removed from the pool of possible words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRestrictions {
    /// Letters that must occur in specific locations in the word.
    must_contain_here: Vec<LocatedLetter>,
    /// Letters that must be present, but must be somewhere else in the word.
    must_contain_but_not_here: Vec<LocatedLetter>,
    /// Letters that must not be in the word.
    must_not_contain: Vec<u8>,
    /// Letters that were shown to be in the word.
    revealed: LetterSet,
}

impl GuessRestrictions {
    /// Returns the restrictions imposed by the given feedback for `guess`.
    ///
    /// A letter marked not present only forbids that letter when it appears once in the guess.
    /// When the guess repeats it, a black result only means there is no *additional* copy.
    pub fn from_feedback(
        guess: &str,
        feedback: &Feedback,
    ) -> Result<GuessRestrictions, WordleError> {
        let guess_entry = WordEntry::new(guess)?;
        let mut restrictions = GuessRestrictions {
            must_contain_here: Vec::new(),
            must_contain_but_not_here: Vec::new(),
            must_not_contain: Vec::new(),
            revealed: LetterSet::new(),
        };
        for (location, (letter, result)) in guess.bytes().zip(feedback.results()).enumerate() {
            match result {
                LetterResult::Correct => {
                    restrictions.revealed.insert(letter);
                    restrictions
                        .must_contain_here
                        .push(LocatedLetter::new(letter, location));
                }
                LetterResult::PresentNotHere => {
                    restrictions.revealed.insert(letter);
                    restrictions
                        .must_contain_but_not_here
                        .push(LocatedLetter::new(letter, location));
                }
                LetterResult::NotPresent => {
                    if guess_entry.letter_counts().count(letter) == 1 {
                        restrictions.must_not_contain.push(letter);
                    }
                }
            }
        }
        Ok(restrictions)
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    pub fn is_satisfied_by(&self, word: &WordEntry) -> bool {
        self.must_contain_here
            .iter()
            .all(|ll| word.letter_at(ll.location) == ll.letter)
            && self
                .must_contain_but_not_here
                .iter()
                .all(|ll| word.letter_at(ll.location) != ll.letter && word.contains(ll.letter))
            && !self
                .must_not_contain
                .iter()
                .any(|letter| word.contains(*letter))
    }

    /// The letters that received green or yellow feedback.
    pub fn revealed(&self) -> &LetterSet {
        &self.revealed
    }
}
