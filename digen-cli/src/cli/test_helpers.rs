//! Small helpers shared across CLI tests.

use std::path::Path;

use tempfile::TempDir;

use super::{Cli, CliError, ExecutionSummary, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn cli_for(out_dir: &Path, seed: u64) -> Cli {
    Cli {
        out_dir: out_dir.to_path_buf(),
        seed,
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn render_to_string(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = super::render_summary(summary, &mut buffer) {
        panic!("rendering into a buffer cannot fail: {err}");
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(err) => panic!("summary must be UTF-8: {err}"),
    }
}
