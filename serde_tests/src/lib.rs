#[cfg(test)]
mod tests {

    use ron;
    use letter_freq_wordle::*;

    const WORDS: [&str; 5] = ["alert", "arise", "crane", "slate", "least"];

    #[test]
    fn lexicon_cache_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let lexicon = Lexicon::scored(&WORDS)?;
        let cache = LexiconCache::from_lexicon(&lexicon);

        let ser = ron::to_string(&cache)?;
        let deser = ron::from_str::<LexiconCache>(&ser)?;

        assert_eq!(deser, cache);
        assert_eq!(deser.into_lexicon_for(&WORDS), Some(lexicon));
        Ok(())
    }

    #[test]
    fn deserialized_cache_plays_the_same_game() -> Result<(), Box<dyn std::error::Error>> {
        let lexicon = Lexicon::scored(&WORDS)?;
        let ser = ron::to_string(&LexiconCache::from_lexicon(&lexicon))?;
        let cached = ron::from_str::<LexiconCache>(&ser)?
            .into_lexicon_for(&WORDS)
            .ok_or("cache should be fresh")?;

        let expected = play_game("least", &lexicon, SolverConfig::batch())?;
        let actual = play_game("least", &cached, SolverConfig::batch())?;

        assert_eq!(actual, expected);
        Ok(())
    }

    #[test]
    fn cache_is_stale_for_other_words() -> Result<(), Box<dyn std::error::Error>> {
        let ser = ron::to_string(&LexiconCache::from_lexicon(&Lexicon::scored(&WORDS)?))?;
        let cache = ron::from_str::<LexiconCache>(&ser)?;

        assert!(cache.is_fresh_for(&["least", "slate", "crane", "arise", "alert"]));
        assert!(!cache.is_fresh_for(&["alert", "arise", "crane", "slate", "toast"]));
        assert!(!cache.is_fresh_for(&["alert", "arise", "crane", "slate"]));
        Ok(())
    }

    #[test]
    fn edited_cache_is_stale() -> Result<(), Box<dyn std::error::Error>> {
        let ser = ron::to_string(&LexiconCache::from_lexicon(&Lexicon::scored(&WORDS)?))?;
        // The stored letter counts no longer match the text.
        let edited = ser.replacen("\"alert\"", "\"zzzzz\"", 1);
        let cache = ron::from_str::<LexiconCache>(&edited)?;

        assert!(!cache.is_fresh_for(&WORDS));
        Ok(())
    }

    #[test]
    fn cache_with_edited_values_is_stale() -> Result<(), Box<dyn std::error::Error>> {
        let ser = ron::to_string(&LexiconCache::from_lexicon(&Lexicon::scored(&WORDS)?))?;
        // Still sorted by value, but no longer what the words score.
        let edited = ser.replace("value:", "value:9");
        let cache = ron::from_str::<LexiconCache>(&edited)?;

        assert_eq!(
            cache
                .lexicon()
                .entries()
                .iter()
                .map(WordEntry::value)
                .collect::<Vec<u32>>(),
            vec![919, 919, 919, 917, 915]
        );
        assert!(!cache.is_fresh_for(&WORDS));
        assert_eq!(cache.into_lexicon_for(&WORDS), None);
        Ok(())
    }

    #[test]
    fn cache_with_wrong_length_word_is_stale() -> Result<(), Box<dyn std::error::Error>> {
        let ser = ron::to_string(&LexiconCache::from_lexicon(&Lexicon::scored(&WORDS)?))?;
        let counts = ron::to_string(&LetterCounts::from_word("alert")?)?;
        let edited_counts = ron::to_string(&LetterCounts::from_word("alertt")?)?;
        // Consistent letter counts and values, but one letter too many.
        let edited = ser
            .replacen("\"alert\"", "\"alertt\"", 1)
            .replacen(&counts, &edited_counts, 1);
        let cache = ron::from_str::<LexiconCache>(&edited)?;
        assert!(cache.lexicon().contains("alertt"));

        assert!(!cache.is_fresh_for(&["alertt", "arise", "crane", "slate", "least"]));
        Ok(())
    }
}
