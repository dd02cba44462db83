//! Lazy enumeration of non-overlapping word combinations.
//!
//! A [`Combination`] is a sequence of placements where each one starts strictly
//! after the previous one ends. [`Combinations`] walks the [`PlacementIndex`]
//! depth-first and yields combinations one at a time.
//!
//! # Search shape
//!
//! The search keeps an explicit stack instead of recursing, so the iterator can
//! hand a result back to the caller and resume later. Each frame scans start
//! positions from some lower bound to the end of the phrase:
//!
//! - the root frame scans from position 0, so combinations may begin mid-phrase
//! - a frame pushed above placement `p` scans from `p.next_index()`, covering
//!   every later start, not only the next position (words may be separated by
//!   several non-letters)
//!
//! For each placement found, the placement is pushed, the stack is emitted if
//! [`SearchParams::accepts`] says so, and a child frame is opened if
//! [`SearchParams::may_extend`] says so. The placement is popped once its child
//! frame is exhausted (or right away when no child frame was opened).
//!
//! Because placements are only ever pushed in increasing start order and every
//! push has exactly one pop, each non-overlapping sequence is visited once.
//! Depth is bounded by `count` (or by the phrase length when unbounded), so the
//! iterator always ends.
//!
//! Dropping the iterator at any point is a clean cancellation: all state lives
//! in the iterator itself and no work happens outside `next()`.

use std::borrow::Borrow;

use crate::phrase::Phrase;
use crate::placement::{Placement, PlacementIndex};

/// How many words a combination may have.
///
/// - `count == 0`: any number of words
/// - `count == K`, `allow_less == false`: exactly `K` words
/// - `count == K`, `allow_less == true`: between 1 and `K` words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub count: usize,
    pub allow_less: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams { count: 0, allow_less: true }
    }
}

impl SearchParams {
    #[must_use]
    pub fn new(count: usize, allow_less: bool) -> Self {
        SearchParams { count, allow_less }
    }

    /// Any number of words.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(0, true)
    }

    /// Exactly `count` words.
    #[must_use]
    pub fn exactly(count: usize) -> Self {
        Self::new(count, false)
    }

    /// Between one and `count` words.
    #[must_use]
    pub fn at_most(count: usize) -> Self {
        Self::new(count, true)
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.count == 0
    }

    /// Whether a stack of `depth` placements is a result.
    #[must_use]
    pub fn accepts(&self, depth: usize) -> bool {
        self.is_unbounded() || depth == self.count || (self.allow_less && depth < self.count)
    }

    /// Whether a stack of `depth` placements may grow by another placement.
    #[must_use]
    pub fn may_extend(&self, depth: usize) -> bool {
        self.is_unbounded() || depth < self.count
    }
}

/// One result: placements in increasing start order, none overlapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    placements: Vec<Placement>,
}

impl Combination {
    /// Wrap placements that are already ordered and non-overlapping.
    ///
    /// # Panics
    /// Panics (in debug builds) if a placement does not start after the previous one ends.
    #[must_use]
    pub fn new(placements: Vec<Placement>) -> Self {
        debug_assert!(
            placements.windows(2).all(|w| w[1].start() > w[0].end()),
            "Combination placements must not overlap"
        );
        Combination { placements }
    }

    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Every claimed phrase position, ascending.
    pub fn claimed(&self) -> impl Iterator<Item = usize> + '_ {
        self.placements.iter().flat_map(|p| p.indices().iter().copied())
    }

    /// The covered words in the phrase's original casing.
    #[must_use]
    pub fn words(&self, phrase: &Phrase) -> Vec<String> {
        self.placements.iter().map(|p| p.word(phrase)).collect()
    }

    #[must_use]
    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }
}

impl<'a> IntoIterator for &'a Combination {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

/// One level of the depth-first search.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Start position currently being scanned.
    pos: usize,
    /// Next candidate to try among the placements starting at `pos`.
    slot: usize,
}

impl Frame {
    fn at(pos: usize) -> Self {
        Frame { pos, slot: 0 }
    }
}

/// Lazy iterator over every combination allowed by a [`SearchParams`].
///
/// Generic over how the index is held: `Combinations<&PlacementIndex>` borrows,
/// `Combinations<PlacementIndex>` owns.
///
/// Invariant between calls to `next()`: `frames.len() == stack.len() + 1`,
/// except while `pop_pending` is set, in which case the top of `stack` is a
/// leaf that was just emitted and still has to be popped.
#[derive(Debug, Clone)]
pub struct Combinations<I: Borrow<PlacementIndex>> {
    index: I,
    params: SearchParams,
    stack: Vec<Placement>,
    frames: Vec<Frame>,
    pop_pending: bool,
}

impl<I: Borrow<PlacementIndex>> Combinations<I> {
    #[must_use]
    pub fn new(index: I, params: SearchParams) -> Self {
        let capacity = if params.is_unbounded() { 8 } else { params.count + 1 };
        let mut frames = Vec::with_capacity(capacity);
        frames.push(Frame::at(0));
        Combinations {
            index,
            params,
            stack: Vec::with_capacity(capacity),
            frames,
            pop_pending: false,
        }
    }

    #[must_use]
    pub fn params(&self) -> SearchParams {
        self.params
    }

    /// Placements currently on the search stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<I: Borrow<PlacementIndex>> Iterator for Combinations<I> {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        if self.pop_pending {
            self.stack.pop();
            self.pop_pending = false;
        }

        let index: &PlacementIndex = self.index.borrow();
        let phrase_len = index.phrase_len();

        loop {
            debug_assert!(
                self.frames.is_empty() || self.frames.len() == self.stack.len() + 1,
                "every placement on the stack owns exactly one frame above the root"
            );

            let frame = self.frames.last_mut()?;

            // Frame exhausted: close it and backtrack the placement it extended.
            if frame.pos >= phrase_len {
                self.frames.pop();
                if !self.frames.is_empty() {
                    self.stack.pop();
                }
                continue;
            }

            let candidates = index.starting_at(frame.pos);
            let Some(placement) = candidates.get(frame.slot) else {
                frame.pos += 1;
                frame.slot = 0;
                continue;
            };
            frame.slot += 1;

            debug_assert!(
                self.stack.last().map_or(true, |prev| placement.start() > prev.end()),
                "pushed placement {placement} overlaps the previous one"
            );

            let next_start = placement.next_index();
            self.stack.push(placement.clone());
            let depth = self.stack.len();

            let extend = self.params.may_extend(depth);
            if extend {
                self.frames.push(Frame::at(next_start));
            }

            if self.params.accepts(depth) {
                // A leaf is popped at the start of the next call, after the
                // caller has had its copy.
                self.pop_pending = !extend;
                return Some(Combination::new(self.stack.clone()));
            }

            if !extend {
                self.stack.pop();
            }
        }
    }
}

/// Enumerate every combination in `index` for `params`, borrowing the index.
#[must_use]
pub fn enumerate(index: &PlacementIndex, params: SearchParams) -> Combinations<&PlacementIndex> {
    Combinations::new(index, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(indices: &[usize]) -> Placement {
        Placement::new(indices.to_vec())
    }

    /// Placements for phrase "cat" and dictionary c, a, t, ca, at, cat.
    fn cat_index() -> PlacementIndex {
        PlacementIndex::from_placements(
            3,
            vec![
                p(&[0]),
                p(&[1]),
                p(&[2]),
                p(&[0, 1]),
                p(&[1, 2]),
                p(&[0, 1, 2]),
            ],
        )
    }

    fn collect(index: &PlacementIndex, params: SearchParams) -> Vec<Vec<Vec<usize>>> {
        enumerate(index, params)
            .map(|c| c.placements().iter().map(|pl| pl.indices().to_vec()).collect())
            .collect()
    }

    #[test]
    fn test_params_acceptance() {
        let unbounded = SearchParams::unbounded();
        assert!(unbounded.accepts(1) && unbounded.accepts(7));
        assert!(unbounded.may_extend(100));

        let exact = SearchParams::exactly(2);
        assert!(!exact.accepts(1));
        assert!(exact.accepts(2));
        assert!(exact.may_extend(1));
        assert!(!exact.may_extend(2));

        let at_most = SearchParams::at_most(2);
        assert!(at_most.accepts(1));
        assert!(at_most.accepts(2));
        assert!(!at_most.accepts(3));
    }

    #[test]
    fn test_default_params_are_unbounded() {
        assert_eq!(SearchParams::default(), SearchParams::unbounded());
    }

    #[test]
    fn test_unbounded_order_and_contents() {
        let results = collect(&cat_index(), SearchParams::unbounded());
        let expected: Vec<Vec<Vec<usize>>> = vec![
            vec![vec![0]],
            vec![vec![0], vec![1]],
            vec![vec![0], vec![1], vec![2]],
            vec![vec![0], vec![1, 2]],
            vec![vec![0], vec![2]],
            vec![vec![0, 1]],
            vec![vec![0, 1], vec![2]],
            vec![vec![0, 1, 2]],
            vec![vec![1]],
            vec![vec![1], vec![2]],
            vec![vec![1, 2]],
            vec![vec![2]],
        ];
        assert_eq!(results, expected);
    }

    #[test]
    fn test_exact_count_only() {
        let results = collect(&cat_index(), SearchParams::exactly(2));
        assert!(results.iter().all(|c| c.len() == 2));
        assert_eq!(
            results,
            vec![
                vec![vec![0], vec![1]],
                vec![vec![0], vec![1, 2]],
                vec![vec![0], vec![2]],
                vec![vec![0, 1], vec![2]],
                vec![vec![1], vec![2]],
            ]
        );
    }

    #[test]
    fn test_at_most_count() {
        let results = collect(&cat_index(), SearchParams::at_most(2));
        assert!(results.iter().all(|c| !c.is_empty() && c.len() <= 2));
        // every combination but the three-word one
        assert_eq!(results.len(), 11);
    }

    #[test]
    fn test_exact_count_one_without_allow_less() {
        let results = collect(&cat_index(), SearchParams::exactly(1));
        assert_eq!(results.len(), 6);
        assert!(results.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_count_larger_than_possible() {
        assert!(collect(&cat_index(), SearchParams::exactly(4)).is_empty());
    }

    #[test]
    fn test_skips_non_letter_gaps() {
        // phrase "a a": placements at 0 and 2, position 1 is a space
        let index = PlacementIndex::from_placements(3, vec![p(&[0]), p(&[2])]);
        assert_eq!(
            collect(&index, SearchParams::exactly(2)),
            vec![vec![vec![0], vec![2]]]
        );
    }

    #[test]
    fn test_empty_index_yields_nothing() {
        let index = PlacementIndex::with_phrase_len(0);
        assert_eq!(enumerate(&index, SearchParams::unbounded()).count(), 0);
        let index = PlacementIndex::with_phrase_len(5);
        assert_eq!(enumerate(&index, SearchParams::unbounded()).count(), 0);
    }

    #[test]
    fn test_early_stop_then_resume_matches_full_run() {
        let index = cat_index();
        let full = collect(&index, SearchParams::unbounded());

        let mut iter = enumerate(&index, SearchParams::unbounded());
        let mut resumed = Vec::new();
        for _ in 0..3 {
            resumed.push(iter.next().unwrap());
        }
        resumed.extend(iter.by_ref());
        assert_eq!(resumed.len(), full.len());
        assert!(iter.next().is_none());
        assert_eq!(iter.depth(), 0);
    }

    #[test]
    fn test_owned_index() {
        let owned = Combinations::new(cat_index(), SearchParams::exactly(3));
        let results: Vec<Combination> = owned.collect();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].claimed().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_combination_words() {
        let phrase = Phrase::new("CaT");
        let combo = Combination::new(vec![p(&[0]), p(&[1, 2])]);
        assert_eq!(combo.words(&phrase), vec!["C".to_string(), "aT".to_string()]);
        assert_eq!(combo.len(), 2);
        assert_eq!((&combo).into_iter().count(), 2);
    }
}
