use crate::results::*;
use std::cmp::Reverse;
use std::io::Read;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of times each letter occurs in one word, indexed by alphabet position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterCounts([u8; ALPHABET_SIZE]);

impl LetterCounts {
    /// Counts the letters of `word`. Fails if it contains anything other than `a` to `z`.
    pub fn from_word(word: &str) -> Result<LetterCounts, WordleError> {
        let mut counts = [0u8; ALPHABET_SIZE];
        for letter in word.bytes() {
            let index = letter_index(letter).ok_or_else(|| {
                WordleError::InvalidInput(format!(
                    "{:?} contains characters outside 'a'-'z'",
                    word
                ))
            })?;
            counts[index] = counts[index].saturating_add(1);
        }
        Ok(LetterCounts(counts))
    }

    /// Returns how many times the given letter occurs. Non-letters never occur.
    pub fn count(&self, letter: u8) -> u8 {
        letter_index(letter).map_or(0, |index| self.0[index])
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.count(letter) > 0
    }

    /// Iterates over the alphabet indices of the distinct letters present.
    fn distinct_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(index, _)| index)
    }
}

/// A set of letters, e.g. the letters already revealed as green or yellow during a game.
///
/// Letters can be added but never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterSet([bool; ALPHABET_SIZE]);

impl LetterSet {
    pub fn new() -> LetterSet {
        LetterSet::default()
    }

    /// Adds the letter to the set. Anything other than `a` to `z` is ignored.
    pub fn insert(&mut self, letter: u8) {
        if let Some(index) = letter_index(letter) {
            self.0[index] = true;
        }
    }

    pub fn contains(&self, letter: u8) -> bool {
        letter_index(letter).map_or(false, |index| self.0[index])
    }

    /// Adds every letter of `other` to this set.
    pub fn extend(&mut self, other: &LetterSet) {
        for (present, other_present) in self.0.iter_mut().zip(other.0.iter()) {
            *present |= *other_present;
        }
    }

    pub fn len(&self) -> usize {
        self.0.iter().filter(|present| **present).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the letters in the set, in alphabetical order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        (b'a'..=b'z')
            .filter(|letter| self.contains(*letter))
            .map(char::from)
    }
}

/// The number of words that contain each letter at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterFrequencies([u32; ALPHABET_SIZE]);

impl LetterFrequencies {
    /// Retrieves the count of words that contain the given letter.
    pub fn num_words_with_letter(&self, letter: u8) -> u32 {
        letter_index(letter).map_or(0, |index| self.0[index])
    }
}

/// A word together with its letter counts and its current score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordEntry {
    text: Arc<str>,
    letter_counts: LetterCounts,
    value: u32,
}

impl WordEntry {
    /// Constructs an unscored entry. The word must be [`WORD_LENGTH`] letters from `a` to `z`.
    pub fn new(word: &str) -> Result<WordEntry, WordleError> {
        if word.len() != WORD_LENGTH {
            return Err(WordleError::InvalidInput(format!(
                "{:?} has {} letters, expected {}",
                word,
                word.len(),
                WORD_LENGTH
            )));
        }
        Ok(WordEntry {
            letter_counts: LetterCounts::from_word(word)?,
            text: Arc::from(word),
            value: 0,
        })
    }

    pub fn text(&self) -> &Arc<str> {
        &self.text
    }

    pub fn letter_counts(&self) -> &LetterCounts {
        &self.letter_counts
    }

    /// The sum of the frequencies of this word's distinct letters, as last scored.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The letter at the given zero-based location.
    pub fn letter_at(&self, index: usize) -> u8 {
        self.text.as_bytes()[index]
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.letter_counts.contains(letter)
    }

    pub(crate) fn score(&self, frequencies: &LetterFrequencies) -> u32 {
        self.letter_counts
            .distinct_indices()
            .map(|index| frequencies.0[index])
            .sum()
    }
}

/// An ordered set of scored words.
///
/// Once sorted with [`Lexicon::sort_by_value`], the first entry has the highest value. Words with
/// equal values keep their previous relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lexicon {
    entries: Vec<WordEntry>,
}

impl Lexicon {
    /// Constructs an unscored `Lexicon` from the given words, in the given order.
    ///
    /// Each word is trimmed and converted to lower case. Fails if the list is empty or if any word
    /// does not have exactly [`WORD_LENGTH`] letters from `a` to `z`.
    ///
    /// ```
    /// use letter_freq_wordle::*;
    ///
    /// let lexicon = Lexicon::build(&["crane", "Slate "]).unwrap();
    /// assert_eq!(lexicon.len(), 2);
    ///
    /// assert!(Lexicon::build(&["crane", "cranes"]).is_err());
    /// ```
    pub fn build<I, S>(words: I) -> Result<Lexicon, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = words
            .into_iter()
            .map(|word| WordEntry::new(&word.as_ref().trim().to_lowercase()))
            .collect::<Result<Vec<WordEntry>, WordleError>>()?;
        if entries.is_empty() {
            return Err(WordleError::InvalidInput(String::from("the word list is empty")));
        }
        Ok(Lexicon { entries })
    }

    /// Constructs a `Lexicon`, then scores and sorts it by its own letter frequencies.
    pub fn scored<I, S>(words: I) -> Result<Lexicon, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::build(words)?;
        let frequencies = lexicon.compute_frequencies(&LetterSet::new());
        lexicon.rescore(&frequencies);
        lexicon.sort_by_value();
        Ok(lexicon)
    }

    /// Reads whitespace-separated words from the given reader and builds a scored `Lexicon`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Lexicon, WordleError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Lexicon::scored(contents.split_whitespace())
    }

    /// Counts, for each letter, the entries that contain it at least once. Letters in
    /// `suppressed` are given a count of zero.
    pub fn compute_frequencies(&self, suppressed: &LetterSet) -> LetterFrequencies {
        let mut frequencies = LetterFrequencies::default();
        for entry in &self.entries {
            for index in entry.letter_counts.distinct_indices() {
                frequencies.0[index] += 1;
            }
        }
        for (index, count) in frequencies.0.iter_mut().enumerate() {
            if suppressed.0[index] {
                *count = 0;
            }
        }
        frequencies
    }

    /// Sets every entry's value to the sum of the given frequencies over its distinct letters.
    pub fn rescore(&mut self, frequencies: &LetterFrequencies) {
        for entry in &mut self.entries {
            entry.value = entry.score(frequencies);
        }
    }

    /// Sorts entries from highest to lowest value, keeping the order of equal values.
    pub fn sort_by_value(&mut self) {
        self.entries.sort_by_key(|entry| Reverse(entry.value));
    }

    /// Removes every entry for which `should_remove` returns `true`, keeping the order of the
    /// rest. Returns the number of entries removed.
    pub fn prune<F>(&mut self, mut should_remove: F) -> usize
    where
        F: FnMut(&WordEntry) -> bool,
    {
        let num_before = self.entries.len();
        self.entries.retain(|entry| !should_remove(entry));
        num_before - self.entries.len()
    }

    /// Retrieves the highest value entry.
    pub fn best(&self) -> Result<&WordEntry, WordleError> {
        self.entries.first().ok_or(WordleError::Empty)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Iterates over the words in their current order.
    pub fn words(&self) -> impl Iterator<Item = &Arc<str>> {
        self.entries.iter().map(|entry| &entry.text)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| &*entry.text == word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
