//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of phrases on *your* machine.
//! - Loads the dictionary once, then runs each case several times and reports the median.
//! - Each run indexes the phrase, places every word, and drains the combination iterator.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few combinations:       `cargo run --bin bench_local --release -- -p 5`
//! - Parallel placement:             `cargo run --bin bench_local --release --features rayon`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Use the same machine and `--release` for more comparable numbers.
//! - Cases live in `get_cases()` below.
//! - I/O (printing) is kept outside the timed section.
//! - One warm-up run per case is done (not included in timing).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordcover::cover::CoverSearch;
use wordcover::dictionary::{Dictionary, DEFAULT_DICTIONARY_PATH};
use wordcover::enumerator::SearchParams;
use wordcover::render::render_line;

/// Simple local benchmark runner: load the dictionary once, time several phrases.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file (one word per line)
    #[arg(short, long, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: String,

    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many combinations per case (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// A benchmark case: a phrase and the word-count parameters to search it with.
#[derive(Clone)]
struct Case {
    phrase: &'static str,
    params: SearchParams,
}

/// Edit/add new cases here. The summary shows the phrase as the case name.
fn get_cases() -> Vec<Case> {
    vec![
        Case { phrase: "Hello World", params: SearchParams::unbounded() },
        Case { phrase: "The quick brown fox", params: SearchParams::at_most(2) },
        Case { phrase: "The quick brown fox", params: SearchParams::exactly(3) },
        Case { phrase: "Never gonna give you up", params: SearchParams::exactly(2) },
        Case { phrase: "It was the best of times, it was the worst of times", params: SearchParams::exactly(2) },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

/// Index, place and drain every combination; returns (placements, combinations).
fn run_case(case: &Case, words: &[&str]) -> (usize, usize) {
    let search = CoverSearch::new(black_box(case.phrase), words);
    let combinations = search.combinations(case.params).count();
    (search.placement_count(), combinations)
}

const MAX_NAME_LEN: usize = 40;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// One row in the summary: (case name, median seconds, placements, combinations).
    type SummaryRow = (String, f64, usize, usize);

    let cli = Cli::parse();

    // Load the dictionary once. This I/O is *not* included in per-case timing.
    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    eprintln!("Loaded {} words in {:.3}s", dictionary.len(), load_secs);

    let words = dictionary.as_strs();

    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        let name = format!("{} (count={}, allow_less={})", case.phrase, case.params.count, case.params.allow_less);
        eprintln!("\n[{:02}] {}", idx + 1, name);

        // One *warm-up* execution per case; its timing is ignored.
        let _warmup = black_box(run_case(case, &words));

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last = (0, 0);
        for rep in 0..cli.num_repeats {
            let t_run = Instant::now();
            last = black_box(run_case(case, &words));
            let run_secs = t_run.elapsed().as_secs_f64();
            times.push(run_secs);

            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} placements, {} combinations)",
                rep + 1,
                cli.num_repeats,
                run_secs,
                last.0,
                last.1
            );
        }

        let med = median(times);

        // Optionally print a few combinations (outside timing).
        if cli.print_limit > 0 {
            let search = CoverSearch::new(case.phrase, &words);
            for combination in search.combinations(case.params).take(cli.print_limit) {
                println!("{}", render_line(search.phrase(), &combination));
            }
        }

        eprintln!(
            "  → median {:.3}s over {} run(s); {} {}",
            med,
            cli.num_repeats,
            last.1,
            pluralizer(last.1, "combination".into(), None)
        );

        summary.push((name, med, last.0, last.1));
    }

    // Compact summary at the end for a quick scan across all cases.
    eprintln!("\n==== Summary ====");
    eprintln!(
        "{:<MAX_NAME_LEN$} | {:>10} | {:>10} | {:>12}",
        "case", "median (s)", "placements", "combinations"
    );
    eprintln!("{:-<MAX_NAME_LEN$}-+-{:-<10}-+-{:-<10}-+-{:-<12}", "", "", "", "");
    for (name, med, placements, combinations) in &summary {
        let display = if name.chars().count() > MAX_NAME_LEN {
            // "- 1" for the "…"
            format!("{}…", name.chars().take(MAX_NAME_LEN - 1).collect::<String>())
        } else {
            name.clone()
        };
        eprintln!("{display:<MAX_NAME_LEN$} | {med:>10.3} | {placements:>10} | {combinations:>12}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}
