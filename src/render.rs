//! Text rendering of combinations.
//!
//! A display line shows the phrase with claimed letters visible and every
//! other letter blanked out, followed by the words themselves:
//!
//! ```text
//! H e|_ _ _   W o _ _ _ (He Wo)
//! ```
//!
//! Characters are separated by single spaces. The gap right after a word is
//! drawn as `|`, except after the word that ends last.

use std::collections::HashSet;

use crate::cover_char::{BLANK_MARKER, WORD_SEPARATOR};
use crate::enumerator::Combination;
use crate::phrase::Phrase;

/// The covered words in original casing, joined by single spaces.
#[must_use]
pub fn render_words(phrase: &Phrase, combination: &Combination) -> String {
    combination.words(phrase).join(" ")
}

/// The phrase template: claimed letters in original case, other letters as
/// [`BLANK_MARKER`], non-letters unchanged. One character per phrase position.
#[must_use]
pub fn render_template(phrase: &Phrase, combination: &Combination) -> Vec<char> {
    let mut template: Vec<char> = (0..phrase.len())
        .map(|pos| {
            if phrase.is_letter_position(pos) {
                BLANK_MARKER
            } else {
                phrase.original_at(pos)
            }
        })
        .collect();

    for pos in combination.claimed() {
        template[pos] = phrase.original_at(pos);
    }
    template
}

/// Full display line: spaced template with word separators, then the words.
#[must_use]
pub fn render_line(phrase: &Phrase, combination: &Combination) -> String {
    let template = render_template(phrase, combination);

    // Character `i` of the template sits at `2 * i` once spaced out, so the
    // gap in front of it is at `2 * i - 1`.
    let mut spaced: Vec<char> = Vec::with_capacity(template.len() * 2);
    for (i, c) in template.iter().enumerate() {
        if i > 0 {
            spaced.push(' ');
        }
        spaced.push(*c);
    }

    let last_next = combination.placements().iter().map(|p| p.next_index()).max();
    for placement in combination {
        let next = placement.next_index();
        if Some(next) != last_next {
            spaced[2 * next - 1] = WORD_SEPARATOR;
        }
    }

    let line: String = spaced.into_iter().collect();
    format!("{line} ({})", render_words(phrase, combination))
}

/// Passes each rendered line through only the first time it is seen,
/// comparing case-insensitively.
#[derive(Debug, Default)]
pub struct UniqueLines {
    seen: HashSet<String>,
}

impl UniqueLines {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `Some(line)` the first time a line is offered, `None` afterwards.
    pub fn admit(&mut self, line: String) -> Option<String> {
        self.seen.insert(line.to_lowercase()).then_some(line)
    }

    /// Number of distinct lines admitted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
