//! Interactive prompting for phrases and search parameters.
//!
//! Generic over any `BufRead` / `Write` pair so the CLI can use stdin/stdout
//! and tests can script the conversation.

use std::io::{BufRead, Write};

use crate::enumerator::SearchParams;
use crate::errors::CoverError;

const PHRASE_PROMPT: &str = "Enter a phrase (empty to quit): ";
const COUNT_PROMPT: &str = "How many words? (0 or empty for any number): ";
const ALLOW_LESS_PROMPT: &str = "Allow combinations with less words? (Y/n) ";

/// Parse a word count leniently.
///
/// Anything that is not a positive integer (empty, non-numeric, negative,
/// overflowing) means "any number of words", i.e. `0`.
#[must_use]
pub fn parse_count(input: &str) -> usize {
    input.trim().parse::<usize>().unwrap_or(0)
}

/// One phrase to search, with the parameters chosen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub phrase: String,
    pub params: SearchParams,
}

/// Asks for queries over a reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print `prompt` and read one line, without its line ending.
    /// `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, CoverError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for the next query. `Ok(None)` means the user is done: an empty
    /// phrase, or input closed.
    ///
    /// # Errors
    ///
    /// Returns [`CoverError::PromptFailed`] if reading or writing fails.
    pub fn next_query(&mut self) -> Result<Option<Query>, CoverError> {
        let phrase = match self.ask(PHRASE_PROMPT)? {
            Some(phrase) if !phrase.is_empty() => phrase,
            _ => return Ok(None),
        };

        let count = self.ask(COUNT_PROMPT)?.map_or(0, |answer| parse_count(&answer));

        let mut allow_less = true;
        if count > 1 {
            if let Some(answer) = self.ask(ALLOW_LESS_PROMPT)? {
                allow_less = !answer.trim_start().to_lowercase().starts_with('n');
            }
        }

        Ok(Some(Query { phrase, params: SearchParams::new(count, allow_less) }))
    }

    /// Write a line of output (results, or a reported error).
    ///
    /// # Errors
    ///
    /// Returns [`CoverError::PromptFailed`] if writing fails.
    pub fn say(&mut self, line: &str) -> Result<(), CoverError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
