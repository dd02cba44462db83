//! The phrase being covered.
//!
//! A [`Phrase`] keeps two views of the same characters: the original text (used
//! for rendering, so casing survives) and a case-folded copy (used for matching).
//! Both views always have the same length, so a position means the same thing
//! in either of them.

use std::fmt;

use crate::cover_char::CoverChar;

/// Immutable phrase with an original-case and a folded view of equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    original: Vec<char>,
    folded: Vec<char>,
}

impl Phrase {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let original: Vec<char> = text.chars().collect();
        let folded = original.iter().map(CoverChar::fold).collect();
        Phrase { original, folded }
    }

    /// Number of characters (not bytes) in the phrase.
    #[must_use]
    pub fn len(&self) -> usize {
        self.original.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Original character at `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= self.len()`.
    #[must_use]
    pub fn original_at(&self, pos: usize) -> char {
        self.original[pos]
    }

    /// Folded character at `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= self.len()`.
    #[must_use]
    pub fn folded_at(&self, pos: usize) -> char {
        self.folded[pos]
    }

    #[must_use]
    pub fn original(&self) -> &[char] {
        &self.original
    }

    #[must_use]
    pub fn folded(&self) -> &[char] {
        &self.folded
    }

    /// `true` if `pos` holds a letter that a placement may claim.
    #[must_use]
    pub fn is_letter_position(&self, pos: usize) -> bool {
        self.folded.get(pos).is_some_and(CoverChar::is_cover_letter)
    }

    /// Number of letter positions in the phrase.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.folded.iter().filter(|c| c.is_cover_letter()).count()
    }

    /// Original-case text spelled by the characters at `indices`.
    #[must_use]
    pub fn spell(&self, indices: &[usize]) -> String {
        indices.iter().map(|&i| self.original[i]).collect()
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.original {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
