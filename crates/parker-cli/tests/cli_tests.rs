//! Runner output tests
//!
//! Searches use the `[1, 48)` range so each test stays fast.

use parker_cli::{command, dispatch, run_demo, run_search, search_config, SearchOutput};
use pretty_assertions::assert_eq;
use square_search::Selection;
use square_test_utils::{sequential_config, PARKER_RANGE, PARKER_RANGE_MATCHES};
use tempfile::NamedTempFile;

fn output_of<F>(run: F) -> String
where
    F: FnOnce(&mut Vec<u8>),
{
    let mut out = Vec::new();
    run(&mut out);
    String::from_utf8(out).expect("runners write UTF-8")
}

#[test]
fn search_prints_square_and_magic_number() {
    let mut found = false;
    let text = output_of(|out| {
        found = run_search(out, &sequential_config(PARKER_RANGE), SearchOutput::default()).unwrap();
    });
    assert!(found);
    assert_eq!(
        text,
        "[37², 47², 1²\n23², 29², 47²\n41², 23², 37²]\nHas magic number of 3579\n"
    );
}

#[test]
fn search_all_lists_every_match() {
    let text = output_of(|out| {
        let output = SearchOutput { all: true, json: false };
        run_search(out, &sequential_config(PARKER_RANGE), output).unwrap();
    });
    assert!(text.starts_with("#1\n[29², 1², 47²\n"));
    assert!(text.contains("#4\n[37², 47², 1²\n"));
    assert!(text.contains("4 matches, 26 valid triples"));
}

#[test]
fn search_json_includes_assessment() {
    let text = output_of(|out| {
        let output = SearchOutput { all: false, json: true };
        run_search(out, &sequential_config(PARKER_RANGE), output).unwrap();
    });
    let document: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        document["selected"],
        serde_json::to_value(PARKER_RANGE_MATCHES[3]).unwrap()
    );
    assert_eq!(document["assessment"]["magic_number"], 3579);
    assert_eq!(document["assessment"]["magic_diagonals"], 1);
    assert!(document.get("report").is_none());
}

#[test]
fn exhausted_search_reports_range_and_fails() {
    let mut found = true;
    let text = output_of(|out| {
        found = run_search(out, &sequential_config(2), SearchOutput::default()).unwrap();
    });
    assert!(!found);
    assert_eq!(text, "No semi-magic squares found in the range of values [1, 2]\n");
}

#[test]
fn demo_continues_past_failures() {
    let mut summary = None;
    let text = output_of(|out| {
        summary = Some(run_demo(out, &sequential_config(PARKER_RANGE)).unwrap());
    });
    let summary = summary.unwrap();

    assert_eq!(summary.conversions_ok, 9);
    assert_eq!(summary.conversions_failed, 7);
    assert!(summary.search_found);
    assert!(text.contains("Result of passing 6: \nVI\n"));
    assert!(text.contains("Result of passing true: \n"));
    assert!(text.contains("Result of passing MMMCMXCIX: \n3999\n"));
    assert!(text.contains("-1 is out of valid range for roman numerals [1, 3999]"));
    assert!(text.ends_with("Has magic number of 3579\n"));
}

#[test]
fn demo_reports_exhaustion_without_failing() {
    let mut summary = None;
    let text = output_of(|out| {
        summary = Some(run_demo(out, &sequential_config(2)).unwrap());
    });
    assert!(!summary.unwrap().search_found);
    assert!(text.ends_with("No semi-magic squares found in the range of values [1, 2]\n"));
}

#[test]
fn config_file_values_are_overridden_by_flags() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "val_max = 30\nselection = \"most-magic\"\n").unwrap();
    let path = file.path().to_str().unwrap();

    let matches = command()
        .try_get_matches_from(["parker", "search", "--config", path, "--val-max", "48"])
        .unwrap();
    let config = search_config(matches.subcommand_matches("search").unwrap()).unwrap();

    assert_eq!(config.val_max, 48);
    assert_eq!(config.selection, Selection::MostMagic);
}

#[test]
fn missing_config_file_is_an_error() {
    let matches = command()
        .try_get_matches_from(["parker", "search", "--config", "/no/such/search.toml"])
        .unwrap();
    let err = search_config(matches.subcommand_matches("search").unwrap()).unwrap_err();
    assert!(format!("{err:#}").contains("/no/such/search.toml"));
}

#[test]
fn dispatch_roman_reports_failures() {
    let matches = command()
        .try_get_matches_from(["parker", "roman", "XII", "12"])
        .unwrap();
    let mut out = Vec::new();
    assert!(dispatch(&matches, &mut out).unwrap());
    assert_eq!(String::from_utf8(out).unwrap(), "XII -> 12\n12 -> XII\n");

    let matches = command()
        .try_get_matches_from(["parker", "roman", "MMMM"])
        .unwrap();
    assert!(!dispatch(&matches, &mut Vec::new()).unwrap());
}

#[test]
fn dispatch_search_uses_flags() {
    let matches = command()
        .try_get_matches_from(["parker", "search", "--val-max", "30", "--sequential"])
        .unwrap();
    let mut out = Vec::new();
    assert!(!dispatch(&matches, &mut out).unwrap());
    assert!(String::from_utf8(out).unwrap().contains("[1, 30]"));
}
