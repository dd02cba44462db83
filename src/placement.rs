//! Placements of dictionary words in a phrase, and their grouping by start position.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::phrase::Phrase;

/// One occurrence of a word in the phrase: strictly increasing letter positions.
///
/// Uses `Rc<[usize]>` so that pushing a placement onto a combination and handing
/// combinations to callers never copies the index list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    indices: Rc<[usize]>,
}

impl Placement {
    /// Wrap a non-empty, strictly increasing list of positions.
    ///
    /// # Panics
    /// Panics (in debug builds) if `indices` is empty or not strictly increasing.
    /// The placer only ever produces valid lists, so this signals a logic error.
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        debug_assert!(!indices.is_empty(), "A placement must cover at least one letter");
        debug_assert!(
            indices.windows(2).all(|w| w[0] < w[1]),
            "Placement indices must be strictly increasing: {indices:?}"
        );
        Placement { indices: indices.into() }
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of letters covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Position of the first covered letter.
    #[must_use]
    pub fn start(&self) -> usize {
        self.indices[0]
    }

    /// Position of the last covered letter.
    #[must_use]
    pub fn end(&self) -> usize {
        self.indices[self.indices.len() - 1]
    }

    /// One past the last covered letter: the earliest start for a following word.
    #[must_use]
    pub fn next_index(&self) -> usize {
        self.end() + 1
    }

    /// The covered text, in the phrase's original casing.
    #[must_use]
    pub fn word(&self, phrase: &Phrase) -> String {
        phrase.spell(&self.indices)
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.indices.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", parts.join(","))
    }
}

/// All placements grouped by start position.
///
/// Slot `i` holds, in discovery order, every placement whose first index is `i`.
/// Non-letter positions simply have empty slots.
#[derive(Debug, Clone, Default)]
pub struct PlacementIndex {
    by_start: Vec<Vec<Placement>>,
    total: usize,
}

impl PlacementIndex {
    /// An index with one empty slot per phrase position.
    #[must_use]
    pub fn with_phrase_len(phrase_len: usize) -> Self {
        PlacementIndex { by_start: vec![Vec::new(); phrase_len], total: 0 }
    }

    /// Group `placements` (in their given order) by start position.
    ///
    /// # Panics
    /// Panics if a placement starts at or beyond `phrase_len`.
    #[must_use]
    pub fn from_placements<I>(phrase_len: usize, placements: I) -> Self
    where
        I: IntoIterator<Item = Placement>,
    {
        let mut index = Self::with_phrase_len(phrase_len);
        for placement in placements {
            index.push(placement);
        }
        index
    }

    /// Append a placement to the slot of its start position.
    ///
    /// # Panics
    /// Panics if the placement starts at or beyond the phrase length.
    pub fn push(&mut self, placement: Placement) {
        let start = placement.start();
        debug_assert!(
            placement.end() < self.by_start.len(),
            "Placement {placement} extends past the phrase (len={})",
            self.by_start.len()
        );
        self.by_start[start].push(placement);
        self.total += 1;
    }

    /// Placements beginning at `pos`; empty for positions outside the phrase.
    #[must_use]
    pub fn starting_at(&self, pos: usize) -> &[Placement] {
        self.by_start.get(pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Length of the phrase the index covers.
    #[must_use]
    pub fn phrase_len(&self) -> usize {
        self.by_start.len()
    }

    /// Total number of placements across all start positions.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Every placement, ordered by start position then discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.by_start.iter().flatten()
    }
}
