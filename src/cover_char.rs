use std::ops::RangeInclusive;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';
#[cfg(test)]
pub(crate) const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';

/// Marker shown in a display line for a letter position nobody claimed.
pub(crate) const BLANK_MARKER: char = '_';
/// Marker shown in a display line between two words.
pub(crate) const WORD_SEPARATOR: char = '|';

/// Classification of characters as seen by the cover engine.
///
/// Only ASCII letters take part in matching. Everything else (spaces,
/// punctuation, digits, non-ASCII letters) is scenery that is never claimed.
pub trait CoverChar {
    /// Case-fold a single character without changing the phrase length.
    fn fold(&self) -> char;
    /// `true` if this character, once folded, is one of `a..=z`.
    fn is_cover_letter(&self) -> bool;
    /// Slot `0..26` of the folded letter, or `None` for non-letters.
    fn letter_slot(&self) -> Option<usize>;
}

impl CoverChar for char {
    fn fold(&self) -> char {
        self.to_ascii_lowercase()
    }
    fn is_cover_letter(&self) -> bool {
        self.is_ascii_alphabetic()
    }
    fn letter_slot(&self) -> Option<usize> {
        let c = self.fold();
        if c.is_ascii_lowercase() {
            Some((c as u8 - b'a') as usize)
        } else {
            None
        }
    }
}

/// Inverse of [`CoverChar::letter_slot`].
pub(crate) fn slot_letter(slot: usize) -> char {
    debug_assert!(slot < ALPHABET_SIZE, "letter slot {slot} out of range");
    (b'a' + slot as u8) as char
}
