//! Parker CLI
//!
//! Library half of the `parker` binary: the clap command, tracing setup and
//! the runners behind each subcommand. Kept as a library so the runners can
//! be exercised without spawning a process.

pub mod cli;
pub mod driver;
pub mod telemetry;

pub use cli::{command, dispatch, search_config};
pub use driver::{demo_inputs, run_demo, run_roman, run_search, DemoSummary, SearchOutput};
pub use telemetry::LogFormat;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
