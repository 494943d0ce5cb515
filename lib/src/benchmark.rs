use crate::data::Lexicon;
use crate::engine::*;
use log::{info, warn};
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::time::Duration;
use std::time::Instant;

/// A game only counts as solved if it took at most this many guesses.
pub const MAX_SUCCESSFUL_GUESSES: usize = 6;

/// The outcome of playing one game per objective word.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkSummary {
    pub num_games: usize,
    /// The number of games that took each number of guesses, including failed games.
    pub num_games_per_guess_count: BTreeMap<usize, usize>,
    /// The words that were not solved within [`MAX_SUCCESSFUL_GUESSES`], in input order.
    pub unsolved_words: Vec<Box<str>>,
    pub average_guesses: f64,
    pub std_dev_guesses: f64,
    /// Wall-clock time divided by the number of games.
    pub average_time: Duration,
}

impl BenchmarkSummary {
    pub fn num_solved(&self) -> usize {
        self.num_games - self.unsolved_words.len()
    }

    /// The percentage of games solved within [`MAX_SUCCESSFUL_GUESSES`].
    pub fn solved_percentage(&self) -> f64 {
        if self.num_games == 0 {
            return 0.0;
        }
        self.num_solved() as f64 * 100.0 / self.num_games as f64
    }

    /// The guess count shared by the most games, if any game was played.
    pub fn most_common_guess_count(&self) -> Option<usize> {
        self.num_games_per_guess_count
            .iter()
            .max_by_key(|(num_guesses, num_games)| (**num_games, Reverse(**num_guesses)))
            .map(|(num_guesses, _)| *num_guesses)
    }
}

struct GameOutcome {
    num_guesses: usize,
    solved: bool,
}

/// Plays one independent game for each objective word, in parallel, and summarizes the results.
///
/// A game fails if the solver runs out of words, reaches the configured guess limit, needs more
/// than [`MAX_SUCCESSFUL_GUESSES`] guesses, or if the objective word is malformed.
pub fn run_benchmark<S>(
    lexicon: &Lexicon,
    objectives: &[S],
    config: SolverConfig,
) -> BenchmarkSummary
where
    S: AsRef<str> + Sync,
{
    let start_time = Instant::now();
    let outcomes: Vec<GameOutcome> = objectives
        .par_iter()
        .map(|objective| {
            let objective = objective.as_ref();
            match play_game(objective, lexicon, config) {
                Ok(result) => GameOutcome {
                    num_guesses: result.num_guesses(),
                    solved: result.is_success() && result.num_guesses() <= MAX_SUCCESSFUL_GUESSES,
                },
                Err(error) => {
                    warn!("Could not play a game for {:?}: {}", objective, error);
                    GameOutcome {
                        num_guesses: 0,
                        solved: false,
                    }
                }
            }
        })
        .collect();
    let elapsed = start_time.elapsed();

    let num_games = outcomes.len();
    let mut num_games_per_guess_count: BTreeMap<usize, usize> = BTreeMap::new();
    for outcome in &outcomes {
        *num_games_per_guess_count
            .entry(outcome.num_guesses)
            .or_insert(0) += 1;
    }
    let unsolved_words: Vec<Box<str>> = objectives
        .iter()
        .zip(outcomes.iter())
        .filter(|(_, outcome)| !outcome.solved)
        .map(|(objective, _)| Box::from(objective.as_ref()))
        .collect();

    let (average_guesses, std_dev_guesses) = if num_games == 0 {
        (0.0, 0.0)
    } else {
        let average = outcomes
            .iter()
            .map(|outcome| outcome.num_guesses as f64)
            .sum::<f64>()
            / num_games as f64;
        let std_dev = (outcomes
            .iter()
            .map(|outcome| (outcome.num_guesses as f64 - average).powi(2))
            .sum::<f64>()
            / num_games as f64)
            .sqrt();
        (average, std_dev)
    };
    let average_time = u32::try_from(num_games)
        .ok()
        .and_then(|num_games| elapsed.checked_div(num_games))
        .unwrap_or_default();

    info!(
        "Played {} games in {:.3}s, {} unsolved",
        num_games,
        elapsed.as_secs_f64(),
        unsolved_words.len()
    );
    BenchmarkSummary {
        num_games,
        num_games_per_guess_count,
        unsolved_words,
        average_guesses,
        std_dev_guesses,
        average_time,
    }
}
