//! Error types with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - W001: `DictionaryUnreadable` (Dictionary source could not be read)
//! - W002: `PromptFailed` (Interactive terminal I/O failed)
//!
//! The matching engine itself never fails: a word with no placements, or a
//! phrase with no combinations, is an empty result rather than an error.
//!
//! # Examples
//!
//! ```
//! use wordcover::dictionary::Dictionary;
//!
//! match Dictionary::load_from_path("/no/such/dictionary.txt") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(dictionary) => println!("Loaded {} words", dictionary.len()),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Errors surfaced by the library and the CLI around it.
#[derive(Debug, thiserror::Error)]
pub enum CoverError {
    #[error("failed to read dictionary from '{}': {source}", .path.display())]
    DictionaryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal I/O failed: {0}")]
    PromptFailed(#[from] io::Error),
}

impl CoverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CoverError::DictionaryUnreadable { .. } => "W001",
            CoverError::PromptFailed(_) => "W002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            CoverError::DictionaryUnreadable { .. } => "Dictionary source could not be read",
            CoverError::PromptFailed(_) => "Interactive terminal I/O failed",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            CoverError::DictionaryUnreadable { .. } => "The dictionary file is missing, unreadable, or not valid UTF-8. Nothing was searched. In interactive mode the prompt continues, so a different phrase or a fixed file can be tried.",
            CoverError::PromptFailed(_) => "Reading the answer to a prompt, or writing the prompt itself, failed. This usually means standard input was closed or is not a terminal.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            CoverError::DictionaryUnreadable { .. } => Some("Pass an existing word list with '-d PATH' (one word per line)"),
            CoverError::PromptFailed(_) => Some("Pass the phrase as an argument to skip interactive mode, e.g. 'wordcover \"hello world\"'"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<CoverError> {
        vec![
            CoverError::DictionaryUnreadable {
                path: PathBuf::from("missing.txt"),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            },
            CoverError::PromptFailed(io::Error::new(io::ErrorKind::UnexpectedEof, "closed")),
        ]
    }

    #[test]
    fn test_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            assert!(codes.insert(err.code()), "Duplicate error code found: {}", err.code());
        }
    }

    /// Test that all error codes follow the format W0XX
    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (W0XX)", code);
            assert!(code.starts_with("W0"), "Error code '{}' should start with 'W0'", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_dictionary_error_mentions_path() {
        let variants = all_variants();
        let err = &variants[0];
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        for err in all_variants() {
            let detailed = err.display_detailed();
            assert!(detailed.contains(err.code()));
            assert!(detailed.contains(&err.to_string()));
            if let Some(help) = err.help() {
                assert!(detailed.contains(help));
            }
        }
    }

    #[test]
    fn test_io_error_converts_to_prompt_failed() {
        let err: CoverError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, CoverError::PromptFailed(_)));
        assert_eq!(err.code(), "W002");
    }

    #[test]
    fn test_source_chain_is_preserved() {
        use std::error::Error;
        let variants = all_variants();
        let err = &variants[0];
        assert!(err.source().is_some());
    }

    #[test]
    fn test_format_without_help() {
        assert_eq!(format_error_with_code_and_help("boom", "W999", None), "boom (W999)");
    }
}
