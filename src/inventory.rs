//! Letter-count inventories for trimming the dictionary.
//!
//! A word can only be placed in a phrase if the phrase has at least as many of
//! each letter as the word needs. Checking that is a 26-slot comparison, much
//! cheaper than running the placement search only to find nothing.

use crate::cover_char::{CoverChar, ALPHABET_SIZE};

/// Per-letter counts of a string, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct LetterInventory {
    counts: [usize; ALPHABET_SIZE],
}

impl LetterInventory {
    /// Count the letters in `chars`, ignoring non-letters.
    pub(crate) fn of_letters<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut counts = [0; ALPHABET_SIZE];
        for c in chars {
            if let Some(slot) = c.letter_slot() {
                counts[slot] += 1;
            }
        }
        LetterInventory { counts }
    }

    /// Inventory of a dictionary word, or `None` if the word is empty or has
    /// anything that is not a letter (such a word can never be placed).
    pub(crate) fn of_word(word: &str) -> Option<Self> {
        if word.is_empty() || !word.chars().all(|c| c.is_cover_letter()) {
            return None;
        }
        Some(Self::of_letters(word.chars()))
    }

    /// `true` if every letter count of `other` fits within this inventory.
    pub(crate) fn contains(&self, other: &LetterInventory) -> bool {
        self.counts.iter().zip(other.counts.iter()).all(|(have, need)| need <= have)
    }

    pub(crate) fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Whether `word` could possibly be placed in a phrase with inventory `phrase`.
pub(crate) fn may_fit(phrase: &LetterInventory, word: &str) -> bool {
    LetterInventory::of_word(word).is_some_and(|needed| phrase.contains(&needed))
}
