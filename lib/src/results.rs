use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The number of letters in every word the solver handles.
pub const WORD_LENGTH: usize = 5;

/// The number of letters in the supported alphabet (`a` to `z`).
pub const ALPHABET_SIZE: usize = 26;

/// Returns the alphabet index of the given lowercase ASCII letter, if it is one.
pub(crate) fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum LetterResult {
    /// Green: the letter is in this location.
    Correct,
    /// Yellow: the letter is in the word, but not in this location.
    PresentNotHere,
    /// Black: the letter is not in the word, or not as many times as it was guessed.
    NotPresent,
}

impl LetterResult {
    /// Parses one feedback symbol: `g`, `y` or `b`.
    pub fn from_symbol(symbol: char) -> Option<LetterResult> {
        match symbol {
            'g' => Some(LetterResult::Correct),
            'y' => Some(LetterResult::PresentNotHere),
            'b' => Some(LetterResult::NotPresent),
            _ => None,
        }
    }

    /// The symbol used when reading or printing feedback.
    pub fn symbol(self) -> char {
        match self {
            LetterResult::Correct => 'g',
            LetterResult::PresentNotHere => 'y',
            LetterResult::NotPresent => 'b',
        }
    }

    /// The colored square shown when sharing a game.
    pub fn square(self) -> char {
        match self {
            LetterResult::Correct => '🟩',
            LetterResult::PresentNotHere => '🟨',
            LetterResult::NotPresent => '⬛',
        }
    }
}

/// Indicates that an error occurred while building a lexicon or playing a game.
#[derive(Debug, Error)]
pub enum WordleError {
    /// The word list, or a word passed to the solver, is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The feedback has the wrong length or contains an unknown symbol.
    #[error("invalid feedback: {0}")]
    InvalidFeedback(String),
    /// The lexicon has no entries left.
    #[error("no words remain")]
    Empty,
    /// The game already ended, so no more feedback can be applied.
    #[error("the game is already over")]
    GameOver,
    /// Reading the word list failed.
    #[error("could not read words")]
    Io(#[from] std::io::Error),
}

/// The feedback for a single guess: one [`LetterResult`] per letter, in the guess's letter order.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct Feedback([LetterResult; WORD_LENGTH]);

impl Feedback {
    /// Feedback for a solved game.
    pub const ALL_CORRECT: Feedback = Feedback([LetterResult::Correct; WORD_LENGTH]);

    pub fn new(results: [LetterResult; WORD_LENGTH]) -> Feedback {
        Feedback(results)
    }

    /// Constructs feedback from a slice, which must have exactly [`WORD_LENGTH`] results.
    pub fn from_results(results: &[LetterResult]) -> Result<Feedback, WordleError> {
        let results: [LetterResult; WORD_LENGTH] = results.try_into().map_err(|_| {
            WordleError::InvalidFeedback(format!(
                "expected {} results, got {}",
                WORD_LENGTH,
                results.len()
            ))
        })?;
        Ok(Feedback(results))
    }

    pub fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Returns `true` iff every letter is [`LetterResult::Correct`].
    pub fn is_solved(&self) -> bool {
        *self == Feedback::ALL_CORRECT
    }

    /// Renders the feedback as colored squares.
    pub fn to_squares(&self) -> String {
        self.0.iter().map(|result| result.square()).collect()
    }
}

impl FromStr for Feedback {
    type Err = WordleError;

    /// Parses feedback such as `"gybbb"`.
    fn from_str(input: &str) -> Result<Feedback, WordleError> {
        let num_symbols = input.chars().count();
        if num_symbols != WORD_LENGTH {
            return Err(WordleError::InvalidFeedback(format!(
                "{:?} has {} symbols, expected {}",
                input, num_symbols, WORD_LENGTH
            )));
        }
        let mut results = [LetterResult::NotPresent; WORD_LENGTH];
        for (result, symbol) in results.iter_mut().zip(input.chars()) {
            *result = LetterResult::from_symbol(symbol).ok_or_else(|| {
                WordleError::InvalidFeedback(format!(
                    "{:?} is not one of 'g', 'y' or 'b'",
                    symbol
                ))
            })?;
        }
        Ok(Feedback(results))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.0 {
            write!(f, "{}", result.symbol())?;
        }
        Ok(())
    }
}

/// A guess together with the feedback it received.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Turn {
    pub guess: Box<str>,
    pub feedback: Feedback,
}

/// How a game ended.
#[derive(Debug, Eq, PartialEq)]
pub enum GameResult {
    /// The guesser found the word. Provides every turn, the last one being all-green.
    Success(Vec<Turn>),
    /// The guesser ran out of allowed guesses.
    Failure(Vec<Turn>),
    /// No candidate words were left: the feedback was inconsistent, or the word is not in the
    /// lexicon.
    Exhausted(Vec<Turn>),
}

impl GameResult {
    pub fn turns(&self) -> &[Turn] {
        match self {
            GameResult::Success(turns)
            | GameResult::Failure(turns)
            | GameResult::Exhausted(turns) => turns,
        }
    }

    pub fn num_guesses(&self) -> usize {
        self.turns().len()
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GameResult::Success(_))
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Duplicate letters are resolved the way the game does: correct letters are credited first,
/// then remaining occurrences are marked present from left to right while the objective still
/// has uncredited copies of that letter. Any further occurrences are not present.
///
/// ```
/// use letter_freq_wordle::*;
///
/// let feedback = get_result_for_guess("allot", "hello").unwrap();
///
/// assert_eq!(feedback.to_string(), "bbgyy");
/// ```
pub fn get_result_for_guess(objective: &str, guess: &str) -> Result<Feedback, WordleError> {
    let objective = objective.as_bytes();
    let guess = guess.as_bytes();
    if objective.len() != WORD_LENGTH || guess.len() != WORD_LENGTH {
        return Err(WordleError::InvalidInput(format!(
            "objective and guess must both have {} letters",
            WORD_LENGTH
        )));
    }

    for word in [objective, guess] {
        if !word.iter().all(u8::is_ascii_lowercase) {
            return Err(WordleError::InvalidInput(format!(
                "{:?} contains characters outside 'a'-'z'",
                String::from_utf8_lossy(word)
            )));
        }
    }

    let mut results = [LetterResult::NotPresent; WORD_LENGTH];
    let mut uncredited = [0u8; ALPHABET_SIZE];
    for index in 0..WORD_LENGTH {
        if guess[index] == objective[index] {
            results[index] = LetterResult::Correct;
        } else {
            uncredited[(objective[index] - b'a') as usize] += 1;
        }
    }
    for index in 0..WORD_LENGTH {
        if results[index] == LetterResult::Correct {
            continue;
        }
        let letter = (guess[index] - b'a') as usize;
        if uncredited[letter] > 0 {
            uncredited[letter] -= 1;
            results[index] = LetterResult::PresentNotHere;
        }
    }
    Ok(Feedback(results))
}
