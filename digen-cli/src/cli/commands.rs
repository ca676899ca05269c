use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use digen_core::{
    DEFAULT_BASE_SEED, DEFAULT_OUTPUT_DIR, DatasetError, DatasetSummary, DatasetsConfig,
    generate_datasets,
};
use thiserror::Error;
use tracing::info;

/// Line printed above the summary table.
pub const SUMMARY_HEADING: &str = "Generated datasets (copy this table to README):";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "digen",
    about = "Generate the directed-graph datasets used to test SCC, topological sort and DAG shortest-path code."
)]
pub struct Cli {
    /// Directory the dataset files are written to.
    #[arg(long = "out-dir", default_value = DEFAULT_OUTPUT_DIR)]
    pub out_dir: PathBuf,

    /// Base seed; dataset `i` is generated from `seed + i`.
    #[arg(long, default_value_t = DEFAULT_BASE_SEED)]
    pub seed: u64,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: DEFAULT_BASE_SEED,
        }
    }
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing the datasets failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Outcome of a generation run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Directory the files were written to.
    pub out_dir: PathBuf,
    /// One row per dataset, in generation order.
    pub datasets: Vec<DatasetSummary>,
}

/// Generates the datasets described by `cli`.
///
/// # Errors
/// Returns [`CliError::Dataset`] when the output directory or a dataset file
/// cannot be written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use digen_cli::cli::{Cli, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let cli = Cli {
///     out_dir: dir.path().to_path_buf(),
///     ..Cli::default()
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.datasets.len(), 9);
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let config = DatasetsConfig::new()
        .with_out_dir(cli.out_dir)
        .with_base_seed(cli.seed);
    let datasets = generate_datasets(&config)?;
    info!(
        out_dir = %config.out_dir().display(),
        datasets = datasets.len(),
        "generation complete"
    );
    Ok(ExecutionSummary {
        out_dir: config.out_dir().to_path_buf(),
        datasets,
    })
}

/// Renders `summary` to `writer` as a heading and a Markdown table.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use digen_cli::cli::{ExecutionSummary, render_summary};
/// # use digen_core::{DatasetSummary, Density};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     out_dir: PathBuf::from("data"),
///     datasets: vec![DatasetSummary {
///         name: "small-1-dag-sparse".into(),
///         nodes: 7,
///         edges: 9,
///         density: Density::Sparse,
///         cyclic: false,
///         source: 3,
///         path: PathBuf::from("data/small-1-dag-sparse.json"),
///     }],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.ends_with("| small-1-dag-sparse.json | 7 | 9 | sparse | DAG | 3 |\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{SUMMARY_HEADING}")?;
    writeln!(writer, "| file | n | m | density | type | source |")?;
    writeln!(writer, "|------|---|---|---------|------|--------|")?;
    for row in &summary.datasets {
        writeln!(
            writer,
            "| {} | {} | {} | {} | {} | {} |",
            row.file_name(),
            row.nodes,
            row.edges,
            row.density,
            row.kind(),
            row.source
        )?;
    }
    Ok(())
}
