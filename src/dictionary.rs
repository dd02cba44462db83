//! `dictionary`: load and normalise the word list used to cover phrases.
//!
//! The input is a flat word list, one word per line. The output is a
//! [`Dictionary`] holding a `Vec<String>` of words with a fixed policy applied:
//!
//! - surrounding whitespace is trimmed and empty lines are skipped
//! - words are folded to lowercase
//! - duplicates are removed
//! - the final list is sorted alphabetically
//!
//! Folding and deduplication only change how much work the search does, never
//! which combinations are reachable. The engine entry point
//! ([`crate::cover::find_combinations`]) does not rely on any of this and
//! accepts raw, unsorted word lists with duplicates.
//!
//! The public API provides:
//! - `parse_from_str(...)`: parse in-memory contents.
//! - `from_words(...)`: apply the policy to an existing list.
//! - `load_from_path(...)`: read a file and parse it.

use crate::errors::CoverError;

/// Path used when no dictionary is given on the command line.
pub const DEFAULT_DICTIONARY_PATH: &str = "dict.txt";

/// A processed, ready-to-use word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// Lowercase, deduplicated, alphabetically sorted words.
    /// Example: `["able", "acid", "acorn", ...]`
    pub words: Vec<String>,
}

impl Dictionary {
    /// Apply the dictionary policy to an arbitrary list of words.
    pub fn from_words<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .filter_map(|raw| {
                let word = raw.as_ref().trim();
                (!word.is_empty()).then(|| word.to_lowercase())
            })
            .collect();

        // `dedup()` only removes adjacent duplicates, so sort first.
        words.sort();
        words.dedup();

        Dictionary { words }
    }

    /// Parse a raw word list from an in-memory string, one word per line.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> Dictionary {
        Self::from_words(contents.lines())
    }

    /// Read the word list at `path` and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`CoverError::DictionaryUnreadable`] if the file cannot be read
    /// (missing, no permission, not UTF-8).
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Dictionary, CoverError> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|source| CoverError::DictionaryUnreadable {
            path: path_ref.to_path_buf(),
            source,
        })?;

        let dictionary = Self::parse_from_str(&data);
        log::debug!("Loaded {} words from '{}'", dictionary.len(), path_ref.display());
        Ok(dictionary)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words as string slices, the shape the search entry points take.
    #[must_use]
    pub fn as_strs(&self) -> Vec<&str> {
        self.words.iter().map(String::as_str).collect()
    }
}
