use parker_cli::{command, dispatch, telemetry, LogFormat};
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = command().get_matches();

    let format = matches
        .get_one::<String>("log-format")
        .and_then(|f| f.parse::<LogFormat>().ok())
        .unwrap_or_default();
    let directive = matches.get_one::<String>("log-level").map(String::as_str);
    if let Err(err) = telemetry::init(directive, format) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match dispatch(&matches, &mut out) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
