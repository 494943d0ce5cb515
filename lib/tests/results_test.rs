#[macro_use]
extern crate assert_matches;

use letter_freq_wordle::*;

use std::result::Result;

fn feedback(symbols: &str) -> Feedback {
    symbols.parse().unwrap()
}

#[test]
fn get_result_for_guess_correct() -> Result<(), WordleError> {
    assert_eq!(get_result_for_guess("mocha", "mocha")?, Feedback::ALL_CORRECT);
    Ok(())
}

#[test]
fn get_result_for_guess_no_shared_letters() -> Result<(), WordleError> {
    assert_eq!(get_result_for_guess("mocha", "duvet")?, feedback("bbbbb"));
    Ok(())
}

#[test]
fn get_result_for_guess_repeated_correct_letters() -> Result<(), WordleError> {
    assert_eq!(get_result_for_guess("mommy", "mummy")?, feedback("gbggg"));
    Ok(())
}

#[test]
fn get_result_for_guess_extra_copy_is_not_present() -> Result<(), WordleError> {
    assert_eq!(get_result_for_guess("allot", "hello")?, feedback("bbgyy"));
    Ok(())
}

#[test]
fn get_result_for_guess_only_one_copy_is_present() -> Result<(), WordleError> {
    assert_eq!(get_result_for_guess("spoon", "sippy")?, feedback("gbybb"));
    Ok(())
}

#[test]
fn get_result_for_guess_present_letters_left_to_right() -> Result<(), WordleError> {
    assert_eq!(get_result_for_guess("abide", "speed")?, feedback("bbyby"));
    Ok(())
}

#[test]
fn get_result_for_guess_correct_letter_credited_before_present() -> Result<(), WordleError> {
    assert_eq!(get_result_for_guess("mesas", "sassy")?, feedback("yygbb"));
    Ok(())
}

#[test]
fn get_result_for_guess_invalid_length() {
    assert_matches!(
        get_result_for_guess("mocha", "toolong"),
        Err(WordleError::InvalidInput(_))
    );
    assert_matches!(
        get_result_for_guess("moc", "mocha"),
        Err(WordleError::InvalidInput(_))
    );
}

#[test]
fn get_result_for_guess_invalid_letters() {
    assert_matches!(
        get_result_for_guess("mocha", "MOCHA"),
        Err(WordleError::InvalidInput(_))
    );
    assert_matches!(
        get_result_for_guess("mo ha", "mocha"),
        Err(WordleError::InvalidInput(_))
    );
}

#[test]
fn feedback_parse() -> Result<(), WordleError> {
    let parsed: Feedback = "gybbg".parse()?;

    assert_eq!(
        parsed.results(),
        &[
            LetterResult::Correct,
            LetterResult::PresentNotHere,
            LetterResult::NotPresent,
            LetterResult::NotPresent,
            LetterResult::Correct,
        ]
    );
    assert!(!parsed.is_solved());
    Ok(())
}

#[test]
fn feedback_parse_wrong_length() {
    assert_matches!("ggg".parse::<Feedback>(), Err(WordleError::InvalidFeedback(_)));
    assert_matches!("gggggg".parse::<Feedback>(), Err(WordleError::InvalidFeedback(_)));
    assert_matches!("".parse::<Feedback>(), Err(WordleError::InvalidFeedback(_)));
}

#[test]
fn feedback_parse_unknown_symbol() {
    assert_matches!("ggggx".parse::<Feedback>(), Err(WordleError::InvalidFeedback(_)));
    assert_matches!("GGGGG".parse::<Feedback>(), Err(WordleError::InvalidFeedback(_)));
}

#[test]
fn feedback_from_results() -> Result<(), WordleError> {
    let results = [LetterResult::Correct; 5];

    assert_eq!(Feedback::from_results(&results)?, Feedback::ALL_CORRECT);
    assert_matches!(
        Feedback::from_results(&results[..4]),
        Err(WordleError::InvalidFeedback(_))
    );
    Ok(())
}

#[test]
fn feedback_display() {
    assert_eq!(feedback("bygbg").to_string(), "bygbg");
    assert!(Feedback::ALL_CORRECT.is_solved());
    assert_eq!(Feedback::ALL_CORRECT.to_string(), "ggggg");
}

#[test]
fn feedback_to_squares() {
    assert_eq!(feedback("gybbg").to_squares(), "🟩🟨⬛⬛🟩");
}

#[test]
fn game_result_accessors() {
    let turns = vec![
        Turn {
            guess: Box::from("alert"),
            feedback: feedback("yyybg"),
        },
        Turn {
            guess: Box::from("least"),
            feedback: Feedback::ALL_CORRECT,
        },
    ];

    let success = GameResult::Success(turns.clone());
    let failure = GameResult::Failure(turns.clone());

    assert!(success.is_success());
    assert!(!failure.is_success());
    assert!(!GameResult::Exhausted(Vec::new()).is_success());
    assert_eq!(success.num_guesses(), 2);
    assert_eq!(failure.turns(), &turns[..]);
}
