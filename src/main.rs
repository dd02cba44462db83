use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use wordcover::cover::CoverSearch;
use wordcover::dictionary::{Dictionary, DEFAULT_DICTIONARY_PATH};
use wordcover::enumerator::SearchParams;
use wordcover::errors::CoverError;
use wordcover::prompt::{parse_count, Prompter};
use wordcover::render::{render_line, render_words, UniqueLines};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Find ways to make words by covering letters of a phrase
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// The phrase to cover (omit it to be prompted interactively)
    phrase: Option<String>,

    /// Number of words per combination (0, or anything that is not a positive number, means any)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    count: String,

    /// Only allow combinations with exactly COUNT words
    #[arg(short, long)]
    exact: bool,

    /// Only print the words
    #[arg(short, long)]
    words_only: bool,

    /// Only print a series of words once (only with --words-only)
    #[arg(short, long)]
    unique_phrases: bool,

    /// Dictionary file to use (one word per line)
    #[arg(short, long, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: PathBuf,

    /// Stop after this many combinations (0 = no limit)
    #[arg(short = 'n', long, default_value_t = 0)]
    limit: usize,
}

/// How results are written out.
#[derive(Debug, Clone, Copy)]
struct OutputOptions {
    words_only: bool,
    unique_phrases: bool,
    limit: usize,
}

impl From<&Cli> for OutputOptions {
    fn from(cli: &Cli) -> Self {
        OutputOptions {
            words_only: cli.words_only,
            unique_phrases: cli.words_only && cli.unique_phrases,
            limit: cli.limit,
        }
    }
}

/// Entry point of the wordcover CLI.
///
/// Delegates to [`try_main`], printing any error in detail before exiting
/// with a nonzero code.
fn main() -> ExitCode {
    wordcover::log::init_logger(wordcover::log::debug_enabled_from_env());

    if let Err(e) = try_main() {
        if let Some(cover_err) = e.downcast_ref::<CoverError>() {
            eprintln!("Error: {}", cover_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// With a phrase: load the dictionary, search once, print the results.
/// Without one: prompt for queries until an empty phrase is entered.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let options = OutputOptions::from(&cli);

    let Some(phrase) = cli.phrase.as_deref() else {
        return run_interactive(&cli.dictionary, options).map_err(Into::into);
    };

    let params = SearchParams::new(parse_count(&cli.count), !cli.exact);

    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    run_query(phrase, &dictionary, params, options, load_secs)?;
    Ok(())
}

/// Prompt for phrases until the user quits. An unreadable dictionary is
/// reported and the loop goes on.
fn run_interactive(dictionary_path: &Path, options: OutputOptions) -> Result<(), CoverError> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    while let Some(query) = prompter.next_query()? {
        let t_load = Instant::now();
        let dictionary = match Dictionary::load_from_path(dictionary_path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                eprintln!("Error: {}", e.display_detailed());
                continue;
            }
        };
        let load_secs = t_load.elapsed().as_secs_f64();

        run_query(&query.phrase, &dictionary, query.params, options, load_secs)?;
    }
    Ok(())
}

/// Search one phrase and print its combinations, then timing diagnostics on stderr.
fn run_query(
    phrase: &str,
    dictionary: &Dictionary,
    params: SearchParams,
    options: OutputOptions,
    load_secs: f64,
) -> Result<(), CoverError> {
    let t_index = Instant::now();
    let search = CoverSearch::new(phrase, &dictionary.words);
    let index_secs = t_index.elapsed().as_secs_f64();

    let t_enum = Instant::now();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let printed = match print_combinations(&search, params, options, &mut out).and_then(|n| {
        out.flush()?;
        Ok(n)
    }) {
        Ok(n) => n,
        // Output closed early (e.g. piped into `head`): stop quietly.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
        Err(e) => return Err(e.into()),
    };
    let enum_secs = t_enum.elapsed().as_secs_f64();

    let stats = search.stats();
    eprintln!(
        "Loaded {} words in {:.3}s; placed {} words ({} placements) in {:.3}s; printed {} combinations in {:.3}s.",
        stats.dictionary_words,
        load_secs,
        stats.placed_words,
        stats.placements,
        index_secs,
        printed,
        enum_secs
    );
    Ok(())
}

/// Write every combination of `search` to `out`, one per line.
///
/// Returns the number of lines written. Stops pulling combinations as soon as
/// `options.limit` lines are out.
fn print_combinations<W: Write>(
    search: &CoverSearch,
    params: SearchParams,
    options: OutputOptions,
    out: &mut W,
) -> io::Result<usize> {
    let phrase = search.phrase();
    let mut unique = options.unique_phrases.then(UniqueLines::new);
    let mut printed = 0;

    for combination in search.combinations(params) {
        let line = if options.words_only {
            render_words(phrase, &combination)
        } else {
            render_line(phrase, &combination)
        };

        let line = match unique.as_mut() {
            Some(unique) => match unique.admit(line) {
                Some(line) => line,
                None => continue,
            },
            None => line,
        };

        writeln!(out, "{line}")?;
        printed += 1;
        if options.limit > 0 && printed >= options.limit {
            break;
        }
    }

    Ok(printed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(words_only: bool, unique_phrases: bool, limit: usize) -> OutputOptions {
        OutputOptions { words_only, unique_phrases, limit }
    }

    fn printed(search: &CoverSearch, params: SearchParams, opts: OutputOptions) -> Vec<String> {
        let mut out = Vec::new();
        let n = print_combinations(search, params, opts, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        assert_eq!(n, lines.len());
        lines
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["wordcover", "hello", "-c", "2", "-e", "-w", "-u", "-n", "5"]);
        assert_eq!(cli.phrase.as_deref(), Some("hello"));
        assert_eq!(parse_count(&cli.count), 2);
        assert!(cli.exact);
        let opts = OutputOptions::from(&cli);
        assert!(opts.words_only && opts.unique_phrases);
        assert_eq!(opts.limit, 5);
    }

    #[test]
    fn test_cli_tolerates_bad_count() {
        let cli = Cli::parse_from(["wordcover", "hello", "--count", "-3"]);
        assert_eq!(parse_count(&cli.count), 0);
        let cli = Cli::parse_from(["wordcover", "hello", "--count", "many"]);
        assert_eq!(parse_count(&cli.count), 0);
    }

    #[test]
    fn test_unique_requires_words_only() {
        let cli = Cli::parse_from(["wordcover", "hello", "-u"]);
        assert!(!OutputOptions::from(&cli).unique_phrases);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["wordcover"]);
        assert!(cli.phrase.is_none());
        assert_eq!(cli.dictionary, PathBuf::from(DEFAULT_DICTIONARY_PATH));
        assert_eq!(cli.limit, 0);
        assert!(!cli.exact);
    }

    #[test]
    fn test_print_display_lines() {
        let search = CoverSearch::new("a a", &["a"]);
        let lines = printed(&search, SearchParams::exactly(2), options(false, false, 0));
        assert_eq!(lines, vec!["a|  a (a a)"]);
    }

    #[test]
    fn test_print_limit_stops_early() {
        let search = CoverSearch::new("cat", &["c", "a", "t"]);
        let lines = printed(&search, SearchParams::unbounded(), options(true, false, 2));
        assert_eq!(lines, vec!["c", "c a"]);
    }

    #[test]
    fn test_print_unique_words() {
        // "a" is placed twice, so "a" alone comes out twice unless deduplicated
        let search = CoverSearch::new("A a", &["a"]);
        let all = printed(&search, SearchParams::exactly(1), options(true, false, 0));
        assert_eq!(all, vec!["A", "a"]);
        let unique = printed(&search, SearchParams::exactly(1), options(true, true, 0));
        assert_eq!(unique, vec!["A"]);
    }
}
