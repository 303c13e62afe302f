//! Runners behind each subcommand
//!
//! Every runner writes its results to the supplied writer and logs through
//! `tracing`. Failures of individual conversions or searches are reported
//! and do not stop the runner.

use roman_numeral::{convert, convert_token};
use serde::Serialize;
use serde_json::{json, Value};
use square_search::{search_all, Assessment, SearchConfig, SearchError, SearchReport, Square};
use std::io::{self, Write};

/// Arguments the demonstration feeds to the converter, in order
#[must_use]
pub fn demo_inputs() -> Vec<Value> {
    vec![
        // valid
        json!(6),
        json!("6"),
        json!(20),
        json!("L"),
        json!(true),  // wrong input kind
        json!("6.5"), // neither digits nor a numeral
        json!("3859"),
        json!(-1),
        json!(2.5), // not whole
        json!(4000),
        // not canonical
        json!("IL"),
        // bounds
        json!(3999),
        json!(1),
        json!("MMMCMXCIX"),
        json!("I"),
        json!("MMMM"),
    ]
}

/// Counts reported by [`run_demo`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoSummary {
    /// Conversions that succeeded
    pub conversions_ok: usize,
    /// Conversions that failed
    pub conversions_failed: usize,
    /// Whether the search returned a square
    pub search_found: bool,
}

/// Run the converter over [`demo_inputs`], then the square search
pub fn run_demo<W: Write>(out: &mut W, config: &SearchConfig) -> io::Result<DemoSummary> {
    let mut summary = DemoSummary::default();

    writeln!(out, "--------TESTING roman numeral converter--------")?;
    for input in demo_inputs() {
        writeln!(out, "---------")?;
        writeln!(out, "Result of passing {}: ", display_input(&input))?;
        match convert(&input) {
            Ok(conversion) => {
                summary.conversions_ok += 1;
                writeln!(out, "{conversion}")?;
            }
            Err(err) => {
                summary.conversions_failed += 1;
                tracing::debug!("Conversion of {} failed: {}", input, err);
                writeln!(out, "{err}")?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "--------TESTING square search--------")?;
    match search_all(config).and_then(|report| report.into_selected(config.selection)) {
        Ok(square) => {
            summary.search_found = true;
            write_square(out, &square)?;
        }
        Err(err) => {
            tracing::warn!("Square search failed: {}", err);
            writeln!(out, "{err}")?;
        }
    }

    Ok(summary)
}

/// Convert each token, one line per token
///
/// Returns `true` when every token converted.
pub fn run_roman<W: Write, S: AsRef<str>>(out: &mut W, tokens: &[S]) -> io::Result<bool> {
    let mut all_ok = true;
    for token in tokens {
        let token = token.as_ref();
        match convert_token(token) {
            Ok(conversion) => writeln!(out, "{token} -> {conversion}")?,
            Err(err) => {
                all_ok = false;
                tracing::warn!("Could not convert '{}': {}", token, err);
                writeln!(out, "{token}: {err}")?;
            }
        }
    }
    Ok(all_ok)
}

/// Output switches for [`run_search`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOutput {
    /// List every match, not only the selected one
    pub all: bool,
    /// Emit JSON instead of text
    pub json: bool,
}

#[derive(Serialize)]
struct SearchDocument<'a> {
    selected: Option<&'a Square>,
    assessment: Option<Assessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a SearchReport>,
}

/// Run one search and print the selected square
///
/// Returns `Ok(false)` when the range held no qualifying square; other
/// errors propagate.
pub fn run_search<W: Write>(
    out: &mut W,
    config: &SearchConfig,
    output: SearchOutput,
) -> anyhow::Result<bool> {
    let report = search_all(config)?;
    let selected = report.select(config.selection);

    if output.json {
        let document = SearchDocument {
            selected,
            assessment: selected.map(Assessment::of),
            report: output.all.then_some(&report),
        };
        serde_json::to_writer_pretty(&mut *out, &document)?;
        writeln!(out)?;
        return Ok(selected.is_some());
    }

    if output.all {
        for (index, square) in report.matches.iter().enumerate() {
            writeln!(out, "#{}", index + 1)?;
            write_square(out, square)?;
        }
        writeln!(
            out,
            "{} matches, {} valid triples, {} candidates in {}ms",
            report.matches.len(),
            report.valid_triples,
            report.candidates_tested,
            report.elapsed_ms
        )?;
    }

    match selected {
        Some(square) => {
            if !output.all {
                write_square(out, square)?;
            }
            Ok(true)
        }
        None => {
            let err = SearchError::Exhausted {
                val_max: report.val_max,
            };
            tracing::warn!("{}", err);
            writeln!(out, "{err}")?;
            Ok(false)
        }
    }
}

/// Print a square followed by its magic number
pub fn write_square<W: Write>(out: &mut W, square: &Square) -> io::Result<()> {
    writeln!(out, "{square}")?;
    writeln!(out, "Has magic number of {}", square.magic_number())
}

fn display_input(input: &Value) -> String {
    match input {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
