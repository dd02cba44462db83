//! Cover a phrase with dictionary words.
//!
//! This is the engine entry point. It wires the pieces together in one direction:
//!
//! ```text
//! phrase ──► PhraseIndex ──► placer (per word) ──► PlacementIndex ──► Combinations
//! ```
//!
//! [`CoverSearch`] does the eager part (indexing and placement) once per
//! (phrase, dictionary) pair; enumeration is lazy and can be run any number of
//! times with different [`SearchParams`].
//!
//! # Examples
//!
//! ```
//! use wordcover::cover::CoverSearch;
//! use wordcover::enumerator::SearchParams;
//! use wordcover::render::render_words;
//!
//! let search = CoverSearch::new("Cat nap", &["can", "tan", "a"]);
//! let lines: Vec<String> = search
//!     .combinations(SearchParams::exactly(2))
//!     .map(|combination| render_words(search.phrase(), &combination))
//!     .collect();
//!
//! assert_eq!(lines, vec!["Can a", "a a"]);
//! ```
//!
//! With the `rayon` feature, placement discovery runs on the rayon thread pool.
//! Results are merged back in dictionary order, so output does not change.

use log::debug;

use crate::enumerator::{Combinations, SearchParams};
use crate::inventory::{may_fit, LetterInventory};
use crate::phrase::Phrase;
use crate::phrase_index::PhraseIndex;
use crate::placement::{Placement, PlacementIndex};
use crate::placer::find_placement_indices;

/// Counters describing how much of the dictionary made it into the index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverStats {
    /// Words handed to the search.
    pub dictionary_words: usize,
    /// Words left after trimming by letter inventory.
    pub candidate_words: usize,
    /// Words with at least one placement.
    pub placed_words: usize,
    /// Placements across all words.
    pub placements: usize,
}

/// Indexed phrase plus every placement of every dictionary word in it.
///
/// Read-only once built.
#[derive(Debug, Clone)]
pub struct CoverSearch {
    phrase: Phrase,
    phrase_index: PhraseIndex,
    placements: PlacementIndex,
    stats: CoverStats,
}

/// Placement lists for each word, in the same order as `words`.
#[cfg(not(feature = "rayon"))]
fn discover_placements(words: &[&str], index: &PhraseIndex) -> Vec<Vec<Vec<usize>>> {
    words.iter().map(|word| find_placement_indices(word, index)).collect()
}

/// Placement lists for each word, in the same order as `words`.
#[cfg(feature = "rayon")]
fn discover_placements(words: &[&str], index: &PhraseIndex) -> Vec<Vec<Vec<usize>>> {
    use rayon::prelude::*;
    words.par_iter().map(|word| find_placement_indices(word, index)).collect()
}

impl CoverSearch {
    /// Index `phrase` and place every word of `dictionary` in it.
    ///
    /// The dictionary may be unsorted and may contain duplicates; words are
    /// folded to lowercase when matched. Duplicate words produce duplicate
    /// placements (and so duplicate combinations).
    pub fn new<S: AsRef<str>>(phrase: &str, dictionary: &[S]) -> Self {
        let phrase = Phrase::new(phrase);
        let phrase_index = PhraseIndex::build(&phrase);
        let inventory = LetterInventory::of_letters(phrase.folded().iter().copied());
        debug!(
            "Indexed phrase of {} characters ({} letters)",
            phrase.len(),
            inventory.total()
        );

        // Skip words the phrase cannot possibly hold before running the
        // placement search on them.
        let candidates: Vec<&str> = dictionary
            .iter()
            .map(|word| word.as_ref())
            .filter(|word| may_fit(&inventory, word))
            .collect();
        debug!(
            "Trimmed dictionary from {} to {} candidate words",
            dictionary.len(),
            candidates.len()
        );

        let found = discover_placements(&candidates, &phrase_index);

        let mut placements = PlacementIndex::with_phrase_len(phrase.len());
        let mut placed_words = 0;
        for word_placements in found {
            if !word_placements.is_empty() {
                placed_words += 1;
            }
            for indices in word_placements {
                placements.push(Placement::new(indices));
            }
        }

        let stats = CoverStats {
            dictionary_words: dictionary.len(),
            candidate_words: candidates.len(),
            placed_words,
            placements: placements.total(),
        };
        debug!("Found {} placements for {} words", stats.placements, stats.placed_words);

        CoverSearch { phrase, phrase_index, placements, stats }
    }

    #[must_use]
    pub fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    #[must_use]
    pub fn phrase_index(&self) -> &PhraseIndex {
        &self.phrase_index
    }

    #[must_use]
    pub fn placement_index(&self) -> &PlacementIndex {
        &self.placements
    }

    #[must_use]
    pub fn placement_count(&self) -> usize {
        self.placements.total()
    }

    #[must_use]
    pub fn stats(&self) -> CoverStats {
        self.stats
    }

    /// Lazily enumerate combinations, borrowing this search.
    #[must_use]
    pub fn combinations(&self, params: SearchParams) -> Combinations<&PlacementIndex> {
        debug!("Enumerating combinations with {params:?}");
        Combinations::new(&self.placements, params)
    }

    /// Lazily enumerate combinations, consuming this search.
    #[must_use]
    pub fn into_combinations(self, params: SearchParams) -> Combinations<PlacementIndex> {
        debug!("Enumerating combinations with {params:?}");
        Combinations::new(self.placements, params)
    }
}

/// Find every combination of dictionary words covering letters of `phrase`.
///
/// `count == 0` means any number of words; otherwise combinations have exactly
/// `count` words, or between 1 and `count` when `allow_less` is set.
///
/// The returned iterator owns everything it needs. Placement happens up front;
/// combinations are produced one at a time as the caller pulls them, and
/// dropping the iterator stops the search.
pub fn find_combinations<S: AsRef<str>>(
    phrase: &str,
    dictionary: &[S],
    count: usize,
    allow_less: bool,
) -> Combinations<PlacementIndex> {
    CoverSearch::new(phrase, dictionary).into_combinations(SearchParams::new(count, allow_less))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerator::Combination;

    fn as_indices(combinations: impl Iterator<Item = Combination>) -> Vec<Vec<Vec<usize>>> {
        combinations
            .map(|c| c.placements().iter().map(|p| p.indices().to_vec()).collect())
            .collect()
    }

    #[test]
    fn test_cat_example_placements() {
        let search = CoverSearch::new("cat", &["c", "a", "t", "ca", "at", "cat"]);
        let index = search.placement_index();
        let at = |pos: usize| -> Vec<Vec<usize>> {
            index.starting_at(pos).iter().map(|p| p.indices().to_vec()).collect()
        };
        assert_eq!(at(0), vec![vec![0], vec![0, 1], vec![0, 1, 2]]);
        assert_eq!(at(1), vec![vec![1], vec![1, 2]]);
        assert_eq!(at(2), vec![vec![2]]);
        assert_eq!(search.placement_count(), 6);
    }

    #[test]
    fn test_cat_example_unbounded() {
        let results = as_indices(find_combinations("cat", &["c", "a", "t", "ca", "at", "cat"], 0, true));
        for expected in [
            vec![vec![0]],
            vec![vec![1]],
            vec![vec![2]],
            vec![vec![0, 1]],
            vec![vec![1, 2]],
            vec![vec![0, 1, 2]],
            vec![vec![0], vec![1]],
            vec![vec![0], vec![2]],
            vec![vec![0], vec![1], vec![2]],
            vec![vec![0], vec![1, 2]],
            vec![vec![0, 1], vec![2]],
        ] {
            assert!(results.contains(&expected), "missing {expected:?}");
        }
        // c and ca overlap at 0; cat leaves nothing for another word
        assert!(!results.iter().any(|c| c.contains(&vec![0]) && c.contains(&vec![0, 1])));
        assert!(!results.iter().any(|c| c.contains(&vec![0, 1, 2]) && c.len() > 1));
    }

    #[test]
    fn test_space_separated_exact_two() {
        let results = as_indices(find_combinations("a a", &["a"], 2, false));
        assert_eq!(results, vec![vec![vec![0], vec![2]]]);
    }

    #[test]
    fn test_dictionary_is_case_folded() {
        let results = as_indices(find_combinations("Cat", &["CAT"], 0, true));
        assert_eq!(results, vec![vec![vec![0, 1, 2]]]);
    }

    #[test]
    fn test_duplicates_produce_duplicate_combinations() {
        let results = as_indices(find_combinations("a", &["a", "a"], 0, true));
        assert_eq!(results, vec![vec![vec![0]], vec![vec![0]]]);
    }

    #[test]
    fn test_trimming_skips_impossible_words() {
        let search = CoverSearch::new("tea", &["eat", "teat", "ice cream", "", "tea"]);
        let stats = search.stats();
        assert_eq!(stats.dictionary_words, 5);
        assert_eq!(stats.candidate_words, 2);
        // "eat" fits the inventory but not the order
        assert_eq!(stats.placed_words, 1);
        assert_eq!(stats.placements, 1);
    }

    #[test]
    fn test_empty_phrase_and_dictionary() {
        let empty: [&str; 0] = [];
        assert_eq!(find_combinations("", &["a"], 0, true).count(), 0);
        assert_eq!(find_combinations("abc", &empty, 0, true).count(), 0);
    }

    #[test]
    fn test_search_can_be_enumerated_repeatedly() {
        let search = CoverSearch::new("banana", &["an", "a", "nab"]);
        let first = search.combinations(SearchParams::at_most(2)).count();
        let second = search.combinations(SearchParams::at_most(2)).count();
        assert_eq!(first, second);
        assert!(first > 0);
    }
}
