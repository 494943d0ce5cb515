use crate::data::*;
use crate::restrictions::GuessRestrictions;
use crate::results::*;
use log::{debug, trace};
use std::sync::Arc;

/// Tunable settings for a [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Guesses come from the whole lexicon while the number of possible words is greater than
    /// `lexicon size / diversity_divisor + 1`, and from the possible words otherwise.
    pub diversity_divisor: usize,
    /// Whether a guess that did not win is removed from the possible words even if the feedback
    /// would not rule it out, e.g. when its only black letters were extra copies. A word is never
    /// guessed twice either way.
    pub exclude_guessed_words: bool,
    /// The maximum number of guesses before a game is given up, if any.
    pub max_guesses: Option<usize>,
}

impl SolverConfig {
    /// Settings for a game against a human.
    pub const fn interactive() -> SolverConfig {
        SolverConfig {
            diversity_divisor: 500,
            exclude_guessed_words: false,
            max_guesses: None,
        }
    }

    /// Settings for automated evaluation against many words.
    pub const fn batch() -> SolverConfig {
        SolverConfig {
            diversity_divisor: 1000,
            exclude_guessed_words: true,
            max_guesses: Some(7),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig::interactive()
    }
}

/// Where the next guess is chosen from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFrom {
    /// The best word from the whole lexicon, scored only by letters not yet revealed. It may not
    /// be a possible answer.
    AllWords,
    /// The best word that is still a possible answer.
    PossibleWords,
}

/// The state of a game being solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    Guessing,
    Solved,
    /// Every possible word left has already been guessed, or none remain.
    Exhausted,
}

/// Guesses a word by repeatedly choosing the word with the most frequent letters, and pruning the
/// possible words with the feedback for each guess.
///
/// ```
/// use letter_freq_wordle::*;
///
/// let lexicon = Lexicon::scored(&["alert", "arise", "crane", "slate", "least"]).unwrap();
/// let mut solver = Solver::new(lexicon, SolverConfig::default());
///
/// let guess = solver.select_next_guess().unwrap();
/// let feedback = get_result_for_guess("least", &guess).unwrap();
///
/// assert_eq!(solver.update(&guess, &feedback).unwrap(), SolverState::Guessing);
/// assert_eq!(solver.possible_words().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    possible_words: Lexicon,
    all_words: Lexicon,
    revealed: LetterSet,
    turns: Vec<Turn>,
}

impl Solver {
    /// Constructs a solver whose possible words and guessable words both start as `lexicon`.
    pub fn new(lexicon: Lexicon, config: SolverConfig) -> Solver {
        Solver {
            config,
            possible_words: lexicon.clone(),
            all_words: lexicon,
            revealed: LetterSet::new(),
            turns: Vec::new(),
        }
    }

    /// Constructs a solver from a word list, scoring it by its own letter frequencies.
    pub fn from_words<I, S>(words: I, config: SolverConfig) -> Result<Solver, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Solver::new(Lexicon::scored(words)?, config))
    }

    pub fn state(&self) -> SolverState {
        if self
            .turns
            .last()
            .map_or(false, |turn| turn.feedback.is_solved())
        {
            SolverState::Solved
        } else if self.first_unguessed(&self.possible_words).is_none() {
            SolverState::Exhausted
        } else {
            SolverState::Guessing
        }
    }

    /// Determines whether the next guess should explore the whole lexicon or pick a possible
    /// answer.
    pub fn guess_from(&self) -> GuessFrom {
        // Compare `possible > all / divisor + 1` without dividing.
        let divisor = self.config.diversity_divisor as u128;
        let num_possible = self.possible_words.len() as u128;
        let num_all = self.all_words.len() as u128;
        let should_explore = num_possible * divisor > num_all + divisor;
        if should_explore && self.best_exploratory_word().is_some() {
            GuessFrom::AllWords
        } else {
            GuessFrom::PossibleWords
        }
    }

    /// The highest value word from the whole lexicon that has not been guessed yet, unless it
    /// has no unrevealed letter in common with the possible words.
    fn best_exploratory_word(&self) -> Option<&WordEntry> {
        self.first_unguessed(&self.all_words)
            .filter(|entry| entry.value() > 0)
    }

    fn first_unguessed<'a>(&self, lexicon: &'a Lexicon) -> Option<&'a WordEntry> {
        lexicon
            .entries()
            .iter()
            .find(|entry| !self.turns.iter().any(|turn| *turn.guess == **entry.text()))
    }

    /// Selects the next word to guess, or `None` if the game is over.
    pub fn select_next_guess(&self) -> Option<Arc<str>> {
        if self.state() != SolverState::Guessing {
            return None;
        }
        let entry = match self.guess_from() {
            GuessFrom::AllWords => self.best_exploratory_word(),
            GuessFrom::PossibleWords => self.first_unguessed(&self.possible_words),
        };
        entry.map(|entry| Arc::clone(entry.text()))
    }

    /// Applies the feedback received for `guess`, and returns the resulting state.
    ///
    /// Fails without changing anything if the game is over or if the guess is malformed.
    pub fn update(
        &mut self,
        guess: &str,
        feedback: &Feedback,
    ) -> Result<SolverState, WordleError> {
        if self.state() != SolverState::Guessing {
            return Err(WordleError::GameOver);
        }
        let restrictions = GuessRestrictions::from_feedback(guess, feedback)?;
        let guess_from = self.guess_from();
        self.turns.push(Turn {
            guess: Box::from(guess),
            feedback: *feedback,
        });
        if feedback.is_solved() {
            debug!("Solved with {} after {} guesses", guess, self.turns.len());
            return Ok(SolverState::Solved);
        }

        let exclude_guess = self.config.exclude_guessed_words;
        let num_removed = self.possible_words.prune(|entry| {
            !restrictions.is_satisfied_by(entry) || (exclude_guess && &**entry.text() == guess)
        });
        trace!(
            "Feedback {} for {} removed {} words",
            feedback,
            guess,
            num_removed
        );

        self.revealed.extend(restrictions.revealed());
        let frequencies = self.possible_words.compute_frequencies(&self.revealed);
        self.all_words.rescore(&frequencies);
        self.all_words.sort_by_value();

        debug!(
            "Guess {}: {} ({:?}) -> {}, {} possible words left",
            self.turns.len(),
            guess,
            guess_from,
            feedback,
            self.possible_words.len()
        );
        Ok(self.state())
    }

    /// The words that are still consistent with every feedback so far.
    pub fn possible_words(&self) -> &Lexicon {
        &self.possible_words
    }

    /// Every word in the lexicon, scored by the frequency of the letters not yet revealed.
    pub fn all_words(&self) -> &Lexicon {
        &self.all_words
    }

    /// The letters that have received green or yellow feedback.
    pub fn revealed(&self) -> &LetterSet {
        &self.revealed
    }

    /// Every guess made so far along with its feedback.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn num_guesses(&self) -> usize {
        self.turns.len()
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

/// Provides the feedback for each guess, e.g. from a human player or from a known objective.
pub trait FeedbackSource {
    fn feedback_for(&mut self, guess: &str) -> Result<Feedback, WordleError>;
}

impl<F> FeedbackSource for F
where
    F: FnMut(&str) -> Result<Feedback, WordleError>,
{
    fn feedback_for(&mut self, guess: &str) -> Result<Feedback, WordleError> {
        self(guess)
    }
}

/// Computes feedback from a known objective word, as the game would.
#[derive(Debug, Clone, Copy)]
pub struct Oracle<'a> {
    objective: &'a str,
}

impl<'a> Oracle<'a> {
    pub fn new(objective: &'a str) -> Oracle<'a> {
        Oracle { objective }
    }
}

impl<'a> FeedbackSource for Oracle<'a> {
    fn feedback_for(&mut self, guess: &str) -> Result<Feedback, WordleError> {
        get_result_for_guess(self.objective, guess)
    }
}

/// Plays a game with the given solver until it is solved, exhausted, or reaches the solver's
/// maximum number of guesses.
pub fn play_game_with_source<F>(
    mut solver: Solver,
    source: &mut F,
) -> Result<GameResult, WordleError>
where
    F: FeedbackSource + ?Sized,
{
    loop {
        if let Some(max_guesses) = solver.config.max_guesses {
            if solver.num_guesses() >= max_guesses {
                return Ok(GameResult::Failure(solver.turns));
            }
        }
        let guess = match solver.select_next_guess() {
            Some(guess) => guess,
            None => return Ok(GameResult::Exhausted(solver.turns)),
        };
        let feedback = source.feedback_for(&guess)?;
        match solver.update(&guess, &feedback)? {
            SolverState::Solved => return Ok(GameResult::Success(solver.turns)),
            SolverState::Exhausted => return Ok(GameResult::Exhausted(solver.turns)),
            SolverState::Guessing => {}
        }
    }
}

/// Attempts to guess the given word using words from the lexicon.
///
/// ```
/// use letter_freq_wordle::*;
///
/// let lexicon = Lexicon::scored(&["alert", "arise", "crane", "slate", "least"]).unwrap();
/// let result = play_game("least", &lexicon, SolverConfig::batch()).unwrap();
///
/// assert!(result.is_success());
/// ```
pub fn play_game(
    objective: &str,
    lexicon: &Lexicon,
    config: SolverConfig,
) -> Result<GameResult, WordleError> {
    let solver = Solver::new(lexicon.clone(), config);
    play_game_with_source(solver, &mut Oracle::new(objective))
}
