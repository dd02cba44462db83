//! Find every placement of one word in a phrase.
//!
//! A placement is a strictly increasing list of phrase positions whose folded
//! characters spell the word. Letters need not be contiguous: `"cat"` is placed
//! in `"Copy a Text"` at `[0, 5, 7]`, among others.
//!
//! The search is a depth-first backtrack over the [`PhraseIndex`]:
//! - state is `(word position, phrase position, positions chosen so far)`
//! - for the next word letter, every forward occurrence at or after the phrase
//!   position is a branch; the following letter must then start one past it
//! - a branch dies quietly when its letter no longer occurs

use crate::cover_char::CoverChar;
use crate::phrase_index::PhraseIndex;
use crate::placement::Placement;

/// Context shared by every level of one placement search.
struct PlaceCtx<'a> {
    /// The folded word being placed.
    word: &'a [char],
    index: &'a PhraseIndex,
}

/// Fold `word` the same way phrases are folded.
pub(crate) fn fold_word(word: &str) -> Vec<char> {
    word.chars().map(|c| c.fold()).collect()
}

/// Depth-first placement search.
///
/// `chosen` is the shared accumulator: every push is matched by exactly one pop
/// before returning, so the caller gets it back unchanged.
fn place_inner<F>(
    ctx: &PlaceCtx,
    word_pos: usize,
    phrase_pos: usize,
    chosen: &mut Vec<usize>,
    emit: &mut F,
) where
    F: FnMut(&[usize]),
{
    debug_assert_eq!(chosen.len(), word_pos, "one chosen position per matched letter");

    // Base case: every letter has a position.
    let Some(&letter) = ctx.word.get(word_pos) else {
        emit(chosen.as_slice());
        return;
    };

    let remaining_letters = ctx.word.len() - word_pos;
    for &p in ctx.index.occurrences_from(letter, phrase_pos) {
        // Not enough phrase left for the rest of the word: later candidates
        // only leave less room, so stop scanning this level.
        if p + remaining_letters > ctx.index.len() {
            break;
        }
        chosen.push(p);
        place_inner(ctx, word_pos + 1, p + 1, chosen, emit);
        chosen.pop();
    }
}

/// Call `emit` once per placement of `word`, in discovery order.
///
/// Discovery order is lexicographic on the index lists. An empty word has no
/// placements; neither does a word with a non-letter in it.
pub fn for_each_placement<F>(word: &str, index: &PhraseIndex, mut emit: F)
where
    F: FnMut(&[usize]),
{
    let folded = fold_word(word);
    if folded.is_empty() {
        return;
    }
    let ctx = PlaceCtx { word: &folded, index };
    let mut chosen = Vec::with_capacity(folded.len());
    place_inner(&ctx, 0, 0, &mut chosen, &mut emit);
    debug_assert!(chosen.is_empty(), "backtracking must leave the accumulator empty");
}

/// Every placement of `word` as plain index lists.
///
/// These are `Send`, so they can be produced on worker threads and turned
/// into [`Placement`]s afterwards.
#[must_use]
pub fn find_placement_indices(word: &str, index: &PhraseIndex) -> Vec<Vec<usize>> {
    let mut found = Vec::new();
    for_each_placement(word, index, |indices| found.push(indices.to_vec()));
    found
}

/// Every placement of `word` in the phrase behind `index`.
#[must_use]
pub fn find_placements(word: &str, index: &PhraseIndex) -> Vec<Placement> {
    find_placement_indices(word, index).into_iter().map(Placement::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrase::Phrase;

    fn placements(word: &str, phrase: &str) -> Vec<Vec<usize>> {
        let index = PhraseIndex::build(&Phrase::new(phrase));
        find_placement_indices(word, &index)
    }

    #[test]
    fn test_contiguous_word() {
        assert_eq!(placements("cat", "cat"), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_every_placement_is_found() {
        assert_eq!(
            placements("an", "banana"),
            vec![vec![1, 2], vec![1, 4], vec![3, 4]]
        );
    }

    #[test]
    fn test_repeated_letters_use_distinct_positions() {
        assert_eq!(placements("aa", "a a"), vec![vec![0, 2]]);
        assert!(placements("aaa", "a a").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(placements("CAT", "Copy a Text"), vec![vec![0, 5, 7], vec![0, 5, 10]]);
    }

    #[test]
    fn test_order_matters() {
        assert!(placements("tac", "cat").is_empty());
    }

    #[test]
    fn test_empty_word_has_no_placements() {
        assert!(placements("", "anything").is_empty());
    }

    #[test]
    fn test_non_letter_word_has_no_placements() {
        assert!(placements("a b", "a b").is_empty());
        assert!(placements("don't", "don't").is_empty());
    }

    #[test]
    fn test_empty_phrase_has_no_placements() {
        assert!(placements("a", "").is_empty());
    }

    #[test]
    fn test_find_placements_wraps_indices() {
        let index = PhraseIndex::build(&Phrase::new("abab"));
        let found = find_placements("ab", &index);
        let starts: Vec<usize> = found.iter().map(Placement::start).collect();
        assert_eq!(starts, vec![0, 0, 2]);
        assert!(found.iter().all(|p| p.len() == 2));
    }
}
