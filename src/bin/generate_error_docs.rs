//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `CoverError` via its `code()`, `description()`, `details()`,
//! and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;
use std::io;
use std::path::PathBuf;

use wordcover::errors::CoverError;

/// Helper to create all `CoverError` variants for documentation
fn all_cover_error_variants() -> Vec<CoverError> {
    vec![
        CoverError::DictionaryUnreadable {
            path: PathBuf::from("dict.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory (os error 2)"),
        },
        CoverError::PromptFailed(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed")),
    ]
}

/// Render one section per error variant.
fn render_error_docs(doc: &mut String, errors: &[CoverError]) -> std::fmt::Result {
    for error in errors {
        writeln!(doc, "### {}: {}\n", error.code(), error.description())?;
        writeln!(doc, "**Details:** {}\n", error.details())?;

        if let Some(help_text) = error.help() {
            writeln!(doc, "**How to fix:**\n```\n{help_text}\n```\n")?;
        }

        writeln!(doc, "**Example error message:**\n```\n{error}\n```\n")?;
        writeln!(doc, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed())?;
        writeln!(doc, "---\n")?;
    }
    Ok(())
}

/// The whole reference document.
fn render_docs() -> Result<String, std::fmt::Error> {
    let mut doc = String::new();
    writeln!(doc, "# Error Code Reference\n")?;
    writeln!(doc, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n")?;

    writeln!(doc, "## Errors (W001-W002)\n")?;
    writeln!(doc, "Matching itself never fails: no placements or no combinations is an empty result. These errors come from the surroundings of the search.\n")?;
    render_error_docs(&mut doc, &all_cover_error_variants())?;

    writeln!(doc, "## Error Display Formats\n")?;
    writeln!(doc, "### Simple Format\n```\nError: <message>\n```\n")?;
    writeln!(doc, "### Detailed Format (via `display_detailed()`)\n```\n<message> (<code>)\n<help text if available>\n```")?;
    Ok(doc)
}

fn main() -> Result<(), std::fmt::Error> {
    print!("{}", render_docs()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_cover_every_code() {
        let doc = render_docs().unwrap();
        for error in all_cover_error_variants() {
            assert!(doc.contains(&format!("### {}", error.code())), "missing {}", error.code());
            assert!(doc.contains(error.details()));
        }
    }

    #[test]
    fn test_docs_include_help() {
        let doc = render_docs().unwrap();
        assert!(doc.contains("**How to fix:**"));
        assert!(doc.contains("-d PATH"));
    }
}
