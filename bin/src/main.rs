use clap::{Parser, Subcommand};
use letter_freq_wordle::*;
use log::{info, warn, LevelFilter};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Guesses Wordle words from a word list, by the frequency of their letters.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains whitespace-separated five-letter words.
    #[clap(short = 'f', long)]
    words_file: PathBuf,

    /// Path to a precomputed lexicon. It is used if it matches the words file, and rewritten
    /// otherwise.
    #[clap(short, long)]
    cache: Option<PathBuf>,

    /// Guess from the whole word list while more than `words / divisor + 1` words are possible.
    #[clap(long)]
    diversity_divisor: Option<usize>,

    /// Give up after this many guesses.
    #[clap(long)]
    max_guesses: Option<usize>,

    /// Whether to drop each wrong guess from the possible words (`true` or `false`).
    #[clap(long)]
    exclude_guessed: Option<bool>,

    /// Logs more details to stderr. Repeat for more.
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an interactive game against the solver.
    Interactive,
    /// Run a single game with the given word.
    Single { word: String },
    /// Play a game for every test word, and report how many guesses were needed.
    Benchmark {
        /// File of words to guess. Defaults to the words file.
        #[clap(short, long)]
        test_words: Option<PathBuf>,
        /// Only play this many randomly chosen test words.
        #[clap(long)]
        sample: Option<usize>,
        /// Seed for choosing the sample.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Write the lexicon cache and exit.
    BuildCache,
}

fn log_level(verbosity: usize) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logs to stderr at a level chosen by `-v`. `RUST_LOG` takes precedence when set.
fn init_logging(verbosity: usize) {
    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let args = Args::parse();
    init_logging(args.verbose);

    let words_text = fs::read_to_string(&args.words_file)?;
    let words: Vec<&str> = words_text.split_whitespace().collect();
    let lexicon = load_lexicon(&words, args.cache.as_deref())?;
    println!("There are {} possible words.", lexicon.len());

    let base_config = match args.command {
        Command::Interactive => SolverConfig::interactive(),
        _ => SolverConfig::batch(),
    };
    let config = SolverConfig {
        diversity_divisor: args.diversity_divisor.unwrap_or(base_config.diversity_divisor),
        exclude_guessed_words: args
            .exclude_guessed
            .unwrap_or(base_config.exclude_guessed_words),
        max_guesses: args.max_guesses.or(base_config.max_guesses),
    };
    info!("Using {:?}", config);

    match args.command {
        Command::Interactive => play_interactive_game(lexicon, config)?,
        Command::Single { word } => play_single_game(&word, &lexicon, config)?,
        Command::Benchmark {
            test_words,
            sample,
            seed,
        } => {
            let test_words_text = match test_words {
                Some(path) => fs::read_to_string(path)?,
                None => words_text.clone(),
            };
            let mut objectives: Vec<&str> = test_words_text.split_whitespace().collect();
            if let Some(sample_size) = sample {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                objectives = objectives
                    .choose_multiple(&mut rng, sample_size)
                    .copied()
                    .collect();
            }
            run_and_print_benchmark(&lexicon, &objectives, config);
        }
        Command::BuildCache => {
            if args.cache.is_none() {
                return Err("build-cache needs a --cache path".into());
            }
        }
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Loads the lexicon from the cache if it matches the words, and otherwise builds it (and
/// rewrites the cache, if one was given).
fn load_lexicon(words: &[&str], cache_path: Option<&Path>) -> Result<Lexicon, Box<dyn Error>> {
    let cache_path = match cache_path {
        Some(path) => path,
        None => return Ok(Lexicon::scored(words)?),
    };
    match read_cache(cache_path) {
        Ok(cache) => {
            if let Some(lexicon) = cache.into_lexicon_for(words) {
                info!("Loaded lexicon from {}", cache_path.display());
                return Ok(lexicon);
            }
            warn!("{} is stale, rebuilding it", cache_path.display());
        }
        Err(error) => info!("Not using {}: {}", cache_path.display(), error),
    }
    let lexicon = Lexicon::scored(words)?;
    fs::write(
        cache_path,
        ron::to_string(&LexiconCache::from_lexicon(&lexicon))?,
    )?;
    info!("Wrote lexicon to {}", cache_path.display());
    Ok(lexicon)
}

fn read_cache(path: &Path) -> Result<LexiconCache, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(ron::from_str::<LexiconCache>(&text)?)
}

fn run_and_print_benchmark(lexicon: &Lexicon, objectives: &[&str], config: SolverConfig) {
    let summary = run_benchmark(lexicon, objectives, config);
    println!("Solved {} words. Results:", summary.num_games);

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    for (num_guesses, num_games) in summary.num_games_per_guess_count.iter() {
        println!("|{}|{}|", num_guesses, num_games);
    }

    println!(
        "\nSolved {:.1}% of cases within {} guesses.",
        summary.solved_percentage(),
        MAX_SUCCESSFUL_GUESSES
    );
    println!(
        "**Average number of guesses:** {:.2} +/- {:.2}",
        summary.average_guesses, summary.std_dev_guesses
    );
    if let Some(num_guesses) = summary.most_common_guess_count() {
        println!("Most often took {} guesses.", num_guesses);
    }
    println!(
        "Average time per game: {:.2}ms",
        summary.average_time.as_secs_f64() * 1000.0
    );
    if !summary.unsolved_words.is_empty() {
        println!(
            "Could not solve the following: {}",
            summary.unsolved_words.join(", ")
        );
    }

    let max_num_games = summary
        .num_games_per_guess_count
        .values()
        .copied()
        .max()
        .unwrap_or(0);
    if max_num_games > 0 {
        println!("Histogram:");
        for (num_guesses, num_games) in summary.num_games_per_guess_count.iter() {
            println!("{}: {}", num_guesses, "X".repeat(num_games * 20 / max_num_games));
        }
    }
}

fn play_single_game(
    word: &str,
    lexicon: &Lexicon,
    config: SolverConfig,
) -> Result<(), WordleError> {
    match play_game(&word.to_lowercase(), lexicon, config)? {
        GameResult::Success(turns) => {
            println!("Solved it! It took me {} guesses.", turns.len());
            print_turns(&turns);
        }
        GameResult::Failure(turns) => {
            println!("I still couldn't solve it after {} guesses :(", turns.len());
            print_turns(&turns);
        }
        GameResult::Exhausted(turns) => {
            println!(
                "I ran out of words after {} guesses. Is the word in the word list?",
                turns.len()
            );
            print_turns(&turns);
        }
    }
    Ok(())
}

fn print_turns(turns: &[Turn]) {
    for turn in turns {
        println!("\t{} {}", turn.guess, turn.feedback.to_squares());
    }
}

fn play_interactive_game(lexicon: Lexicon, config: SolverConfig) -> Result<(), WordleError> {
    let mut solver = Solver::new(lexicon, config);
    println!(
        "I will now try to guess your word.\n\n\
         For each guess, enter the correctness of each letter as:\n\n\
           * 'b' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \"gbgyb\"");

    loop {
        if let Some(max_guesses) = config.max_guesses {
            if solver.num_guesses() >= max_guesses {
                println!("I couldn't guess it :(");
                return Ok(());
            }
        }
        let guess = match solver.select_next_guess() {
            Some(guess) => guess,
            None => {
                println!("No words match that feedback. Was it entered correctly?");
                return Ok(());
            }
        };
        println!(
            "\nNumber of possible words: {}",
            solver.possible_words().len()
        );
        println!("Now try: {}", guess);

        let feedback = read_feedback()?;
        match solver.update(&guess, &feedback)? {
            SolverState::Solved => {
                print_share_block(solver.turns());
                return Ok(());
            }
            SolverState::Exhausted => {
                println!("No words match that feedback. Was it entered correctly?");
                return Ok(());
            }
            SolverState::Guessing => {}
        }
    }
}

/// Reads feedback from stdin, asking again until it is well formed.
fn read_feedback() -> Result<Feedback, WordleError> {
    loop {
        print!("Enter result: ");
        io::stdout().flush()?;
        let mut buffer = String::new();
        if io::stdin().read_line(&mut buffer)? == 0 {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        match buffer.trim().parse::<Feedback>() {
            Ok(feedback) => return Ok(feedback),
            Err(WordleError::InvalidFeedback(message)) => {
                println!("{}. Try again.", message);
            }
            Err(error) => return Err(error),
        }
    }
}

fn print_share_block(turns: &[Turn]) {
    println!("\nWordle XXX {}/6\n", turns.len());
    for turn in turns {
        println!("{}", turn.feedback.to_squares());
    }
}
