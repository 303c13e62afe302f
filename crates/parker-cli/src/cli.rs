//! Command-line definition and dispatch

use crate::driver::{run_demo, run_roman, run_search, SearchOutput};
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use square_search::{SearchConfig, Selection};
use std::io::Write;
use std::path::PathBuf;

/// Build the `parker` command
#[must_use]
pub fn command() -> Command {
    Command::new("parker")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parker-square search and Roman numeral conversion")
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log filter directive, e.g. 'debug' (overrides RUST_LOG)"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .default_value("text")
                .value_parser(["text", "json"])
                .help("Log line format"),
        )
        .subcommand(
            Command::new("demo")
                .about("Convert the demonstration inputs, then run the default search"),
        )
        .subcommand(
            Command::new("roman")
                .about("Convert numbers to numerals and numerals to numbers")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .num_args(1..)
                        .allow_hyphen_values(true)
                        .help("Integers in [1, 3999] or canonical numerals"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Search for a semi-magic square of squares")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML search configuration; flags override its values"),
                )
                .arg(
                    Arg::new("val-max")
                        .long("val-max")
                        .value_parser(value_parser!(u32))
                        .help("Exclusive upper bound on cell values [default: 100]"),
                )
                .arg(
                    Arg::new("select")
                        .long("select")
                        .value_parser(["last", "most-magic"])
                        .help("Which match to return [default: last]"),
                )
                .arg(
                    Arg::new("sequential")
                        .long("sequential")
                        .action(ArgAction::SetTrue)
                        .help("Search on the calling thread only"),
                )
                .arg(
                    Arg::new("threads")
                        .long("threads")
                        .value_parser(value_parser!(usize))
                        .help("Worker threads for the parallel search"),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .help("Print every match"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
}

/// Merge the optional config file with command-line overrides
pub fn search_config(args: &ArgMatches) -> anyhow::Result<SearchConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("loading search config from {}", path.display()))?,
        None => SearchConfig::default(),
    };

    if let Some(&val_max) = args.get_one::<u32>("val-max") {
        config = config.with_val_max(val_max);
    }
    if let Some(select) = args.get_one::<String>("select") {
        let selection: Selection = select.parse().map_err(anyhow::Error::msg)?;
        config = config.with_selection(selection);
    }
    if args.get_flag("sequential") {
        config = config.with_parallel(false);
    }
    if let Some(&threads) = args.get_one::<usize>("threads") {
        config = config.with_threads(threads);
    }

    Ok(config)
}

/// Run the selected subcommand, writing results to `out`
///
/// No subcommand runs the demonstration. Returns `false` when a conversion
/// failed or a search found nothing, so the process can exit non-zero.
pub fn dispatch<W: Write>(matches: &ArgMatches, out: &mut W) -> anyhow::Result<bool> {
    match matches.subcommand() {
        Some(("roman", args)) => {
            let tokens: Vec<&String> = args
                .get_many::<String>("input")
                .map(Iterator::collect)
                .unwrap_or_default();
            Ok(run_roman(out, &tokens)?)
        }
        Some(("search", args)) => {
            let config = search_config(args)?;
            tracing::debug!("Resolved search config: {:?}", config);
            let output = SearchOutput {
                all: args.get_flag("all"),
                json: args.get_flag("json"),
            };
            run_search(out, &config, output)
        }
        _ => {
            let summary = run_demo(out, &SearchConfig::default())?;
            tracing::info!(
                "Demo finished: {} conversions ok, {} failed, square found: {}",
                summary.conversions_ok,
                summary.conversions_failed,
                summary.search_found
            );
            Ok(true)
        }
    }
}
