use crate::data::*;
use crate::results::WORD_LENGTH;
use serde::{Deserialize, Serialize};

/// Bumped whenever the cached layout or scoring changes, so older caches are rebuilt.
pub const LEXICON_CACHE_VERSION: u32 = 1;

/// A precomputed, scored [`Lexicon`] that can be saved between runs.
///
/// The cache is never authoritative: it is only used if it describes exactly the live word list.
///
/// ```
/// use letter_freq_wordle::*;
///
/// let words = ["alert", "arise", "crane"];
/// let cache = LexiconCache::from_lexicon(&Lexicon::scored(&words).unwrap());
///
/// assert!(cache.is_fresh_for(&words));
/// assert!(!cache.is_fresh_for(&["alert", "arise"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconCache {
    version: u32,
    lexicon: Lexicon,
}

impl LexiconCache {
    pub fn from_lexicon(lexicon: &Lexicon) -> LexiconCache {
        LexiconCache {
            version: LEXICON_CACHE_VERSION,
            lexicon: lexicon.clone(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns `true` iff this cache has the current version, contains exactly the given words,
    /// and its entries are internally consistent: each has a well-formed word with matching
    /// letter counts, and the value it would be given by rescoring the lexicon.
    pub fn is_fresh_for<S: AsRef<str>>(&self, words: &[S]) -> bool {
        if self.version != LEXICON_CACHE_VERSION || self.lexicon.len() != words.len() {
            return false;
        }
        let entries = self.lexicon.entries();
        let frequencies = self.lexicon.compute_frequencies(&LetterSet::new());
        let consistent = entries.iter().all(|entry| {
            entry.text().len() == WORD_LENGTH
                && LetterCounts::from_word(entry.text())
                    .map_or(false, |counts| counts == *entry.letter_counts())
                && entry.value() == entry.score(&frequencies)
        }) && entries
            .windows(2)
            .all(|pair| pair[0].value() >= pair[1].value());
        if !consistent {
            return false;
        }

        let mut cached_words: Vec<&str> = self.lexicon.words().map(|word| &**word).collect();
        let mut live_words: Vec<String> = words
            .iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .collect();
        cached_words.sort_unstable();
        live_words.sort_unstable();
        cached_words
            .iter()
            .zip(live_words.iter())
            .all(|(cached, live)| *cached == live.as_str())
    }

    /// Returns the cached lexicon if it is fresh for the given words, or `None` if it should be
    /// rebuilt.
    pub fn into_lexicon_for<S: AsRef<str>>(self, words: &[S]) -> Option<Lexicon> {
        if self.is_fresh_for(words) {
            Some(self.lexicon)
        } else {
            None
        }
    }
}
