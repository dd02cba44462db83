//! Forward-occurrence index over a [`Phrase`].
//!
//! Conceptually the index answers, for every position `i` of the phrase, "where
//! does letter `L` occur at or after `i`?". Rather than materialising one map per
//! position (quadratic in the phrase length), each letter owns a single sorted
//! list of its positions, and a query at `i` is a binary search into that list.
//! The observable contract is the same as the per-position map:
//!
//! - entry `i` is entry `i + 1` plus `i` itself when position `i` holds a letter
//! - entry `len()` (one past the end) is empty

use crate::cover_char::{slot_letter, CoverChar, ALPHABET_SIZE};
use crate::phrase::Phrase;

/// Per-letter sorted position lists for one phrase. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseIndex {
    /// `positions[slot]` lists every position holding letter `slot`, ascending.
    positions: [Vec<usize>; ALPHABET_SIZE],
    len: usize,
}

impl PhraseIndex {
    /// Build the index for `phrase`. Always succeeds, including for an empty phrase.
    #[must_use]
    pub fn build(phrase: &Phrase) -> Self {
        let mut positions: [Vec<usize>; ALPHABET_SIZE] = Default::default();

        // A single forward pass pushes positions in ascending order, so every
        // list comes out sorted without a separate sort step.
        for (pos, c) in phrase.folded().iter().enumerate() {
            if let Some(slot) = c.letter_slot() {
                positions[slot].push(pos);
            }
        }

        debug_assert!(
            positions.iter().all(|list| list.windows(2).all(|w| w[0] < w[1])),
            "Position lists must be strictly increasing"
        );

        PhraseIndex { positions, len: phrase.len() }
    }

    /// Length of the phrase this index was built from.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All positions `>= from` holding `letter`, in ascending order.
    ///
    /// Case-insensitive; returns an empty slice for non-letters and for
    /// `from >= len()`.
    #[must_use]
    pub fn occurrences_from(&self, letter: char, from: usize) -> &[usize] {
        let Some(slot) = letter.letter_slot() else {
            return &[];
        };
        let list = &self.positions[slot];
        let start = list.partition_point(|&p| p < from);
        &list[start..]
    }

    /// First position `>= from` holding `letter`, if any.
    #[must_use]
    pub fn next_occurrence(&self, letter: char, from: usize) -> Option<usize> {
        self.occurrences_from(letter, from).first().copied()
    }

    /// Every position of `letter` in the whole phrase.
    #[must_use]
    pub fn all_occurrences(&self, letter: char) -> &[usize] {
        self.occurrences_from(letter, 0)
    }

    /// The letter map for position `from`: each letter present at or after
    /// `from`, with its forward occurrences. Letters come out in `a..=z` order.
    pub fn entry(&self, from: usize) -> impl Iterator<Item = (char, &[usize])> + '_ {
        self.positions.iter().enumerate().filter_map(move |(slot, list)| {
            let start = list.partition_point(|&p| p < from);
            (start < list.len()).then(|| (slot_letter(slot), &list[start..]))
        })
    }
}
