//! Command-line interface orchestration for the digen generator.
//!
//! The CLI takes no required arguments: it writes the nine datasets to
//! `./data` using the fixed base seed and prints a Markdown summary. Both the
//! directory and the seed can be overridden.

mod commands;

pub use commands::{Cli, CliError, ExecutionSummary, SUMMARY_HEADING, render_summary, run_cli};

#[cfg(test)]
mod test_helpers;
